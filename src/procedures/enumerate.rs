/*!
Enumeration of injective bindings.

Given some variables and a population, every (complete) binding of the variables to distinct individuals is visited by a depth-first search:

1. The variables are declared on a fresh [binding](Binding).
2. Each individual not yet used by the binding is bound to the first unbound variable.
3. If the binding is complete, the binding is handed to a visitor.
   Otherwise, the search continues with the individuals still unused.
4. The individual is released, and the next individual is tried.

So, for *k* variables and *n* individuals exactly *n*!/(*n* − *k*)! bindings are visited, following the order of the population.

```rust
# use finite_fol::db::Population;
# use finite_fol::procedures::enumerate::for_each_binding;
# use finite_fol::structures::individual::Individual;
let population = ["goku", "gohan", "vegeta"]
    .into_iter()
    .map(|name| Individual::new(name).unwrap())
    .collect::<Population>();

let mut seen = Vec::default();
let visited = for_each_binding(&['x', 'y'], &population, |binding| {
    seen.push(binding.to_string());
    Ok(())
});

assert_eq!(visited, Ok(6));
assert_eq!(seen[0], "{x ↦ goku, y ↦ gohan}");
assert_eq!(seen[5], "{x ↦ vegeta, y ↦ gohan}");
```

The binding handed to a visitor is reused by the search, so a visitor which keeps a binding must clone it.
*/

use crate::{
    db::{truth_table::TruthTable, Population},
    misc::log::targets::{self},
    structures::{binding::Binding, formula::Formula, individual::Individual, variable::Variable},
    types::err::{self, ErrorKind},
};

/// Visits every complete injective binding of the variables to the population, returning a count of the bindings visited.
///
/// An error from the visitor stops the search and is returned as is.
pub fn for_each_binding(
    variables: &[Variable],
    population: &Population,
    mut visit: impl FnMut(&Binding) -> Result<(), ErrorKind>,
) -> Result<usize, ErrorKind> {
    if variables.is_empty() {
        return Err(err::EnumerationError::NoVariables.into());
    }

    if variables.len() > population.len() {
        return Err(err::EnumerationError::InsufficientPopulation.into());
    }

    let mut binding = Binding::default();
    binding.declare_all(variables.iter().copied())?;

    let individuals = population.elements().collect::<Vec<_>>();
    let mut visited = 0;

    extend(&mut binding, &individuals, &mut visit, &mut visited)?;

    log::debug!(target: targets::BINDING, "Visited {visited} bindings of {variables:?}");
    Ok(visited)
}

fn extend(
    binding: &mut Binding,
    candidates: &[&Individual],
    visit: &mut impl FnMut(&Binding) -> Result<(), ErrorKind>,
    visited: &mut usize,
) -> Result<(), ErrorKind> {
    for individual in candidates {
        if binding.has_individual(individual) {
            continue;
        }

        binding.bind_next((*individual).clone())?;

        if binding.is_complete() {
            *visited += 1;
            visit(binding)?;
        } else {
            extend(binding, candidates, visit, visited)?;
        }

        binding.release_individual(individual)?;
    }

    Ok(())
}

/// Every complete injective binding of the free variables of the formula under which the formula is true, in order of enumeration.
pub fn satisfying_bindings(
    formula: &Formula,
    population: &Population,
    table: &TruthTable,
) -> Result<Vec<Binding>, ErrorKind> {
    let mut satisfying = Vec::default();

    for_each_binding(&formula.free_variables(), population, |binding| {
        if formula.bind(binding)?.evaluate(table) {
            satisfying.push(binding.clone());
        }
        Ok(())
    })?;

    Ok(satisfying)
}
