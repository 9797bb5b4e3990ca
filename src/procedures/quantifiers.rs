/*!
Quantification over the population of a model.

Both quantifiers take a *premise* and a *body*, each a [template formula](Formula):
- The premise restricts the bindings of interest to those [satisfying](crate::procedures::enumerate::satisfying_bindings) the premise.
- The body is then evaluated under each binding which satisfies the premise.

So, [existential] asks whether the body holds under *some* binding satisfying the premise, and [universal] asks whether the body holds under *every* binding satisfying the premise.

# Empty premises

If no binding satisfies the premise, both quantifiers are false.
In particular, universal quantification over an empty collection of bindings is false, rather than vacuously true.

# Preconditions

- The premise and the body each have at least one free variable.
- The population has at least as many individuals as the premise has free variables.

The body is bound with the bindings of the premise, and so a variable of the body which is not a variable of the premise is an error, if some binding satisfies the premise.

```rust
# use finite_fol::db::{truth_table::TruthTable, Population};
# use finite_fol::procedures::quantifiers::{existential, universal};
# use finite_fol::structures::{formula::Formula, individual::Individual, predicate::Predicate, sentence::Sentence};
let population = ["goku", "gohan"]
    .into_iter()
    .map(|name| Individual::new(name).unwrap())
    .collect::<Population>();

let saiyan = Predicate::unary("Saiyan", 'x').unwrap();
let strong = Predicate::unary("Strong", 'x').unwrap();

let table = TruthTable::default()
    .with(Sentence::build("Saiyan", Some("goku"), None, false).unwrap())
    .with(Sentence::build("Saiyan", Some("gohan"), None, false).unwrap())
    .with(Sentence::build("Strong", Some("goku"), None, false).unwrap());

let premise = Formula::from(saiyan);
let body = Formula::from(strong);

assert_eq!(existential(&premise, &body, &population, &table), Ok(true));
assert_eq!(universal(&premise, &body, &population, &table), Ok(false));
```
*/

use crate::{
    db::{truth_table::TruthTable, Population},
    misc::log::targets::{self},
    procedures::enumerate::satisfying_bindings,
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// Whether the body holds under some binding which satisfies the premise.
pub fn existential(
    premise: &Formula,
    body: &Formula,
    population: &Population,
    table: &TruthTable,
) -> Result<bool, ErrorKind> {
    check_preconditions(premise, body, population)?;

    for binding in satisfying_bindings(premise, population, table)? {
        if body.bind(&binding)?.evaluate(table) {
            log::trace!(target: targets::QUANTIFIER, "∃ witnessed by {binding}");
            return Ok(true);
        }
    }

    Ok(false)
}

/// Whether the body holds under every binding which satisfies the premise, and some binding satisfies the premise.
pub fn universal(
    premise: &Formula,
    body: &Formula,
    population: &Population,
    table: &TruthTable,
) -> Result<bool, ErrorKind> {
    check_preconditions(premise, body, population)?;

    let bindings = satisfying_bindings(premise, population, table)?;
    if bindings.is_empty() {
        log::trace!(target: targets::QUANTIFIER, "∀ over no bindings of {premise}");
        return Ok(false);
    }

    for binding in bindings {
        if !body.bind(&binding)?.evaluate(table) {
            log::trace!(target: targets::QUANTIFIER, "∀ refuted by {binding}");
            return Ok(false);
        }
    }

    Ok(true)
}

fn check_preconditions(
    premise: &Formula,
    body: &Formula,
    population: &Population,
) -> Result<(), err::QuantifierError> {
    let premise_variables = premise.free_variables();

    if premise_variables.is_empty() || body.free_variables().is_empty() {
        return Err(err::QuantifierError::NoVariables);
    }

    if premise_variables.len() > population.len() {
        return Err(err::QuantifierError::InsufficientPopulation);
    }

    Ok(())
}
