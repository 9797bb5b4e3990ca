/*!
Predicates, aka. relation symbols (or 'functions') of arity zero, one, or two.

A predicate is:
- A name, of ascii letters.
- A [Cardinality], the arity of the predicate.
- A [variable](crate::structures::variable) for each slot the cardinality requires.
  These default to `x` for the first slot and `y` for the second slot.
- A flag for whether the predicate is reflexive.
  Only predicates of cardinality two may be reflexive, and a request for a reflexive predicate of any other cardinality is quietly ignored.

Sentences of a reflexive predicate are symmetric under a swap of arguments, so `P[a,b]` and `P[b,a]` are the same sentence when `P` is reflexive.

# Identity

Variables are binding sites rather than part of the identity of a predicate.
So, two predicates are equal exactly when they have the same name, cardinality, and reflexivity.

The canonical (string) form of a reflexive predicate is prefixed with `~`, as in the textual form read by [Predicate::build].

```rust
# use finite_fol::structures::predicate::{Cardinality, Predicate};
let son_xy = Predicate::binary("Son", 'x', 'y').unwrap();
let son_zy = Predicate::binary("Son", 'z', 'y').unwrap();

assert_eq!(son_xy, son_zy);
assert_eq!(son_xy.to_string(), "Son[x,y]");
assert_eq!(son_zy.to_string(), "Son[z,y]");

let reflexive_son = Predicate::reflexive("Son", 'x', 'y').unwrap();
assert_ne!(son_xy, reflexive_son);
assert_eq!(reflexive_son.to_string(), "~Son[x,y]");
```

# As a formula

A predicate is the atomic case of a [template formula](crate::structures::formula::Formula).
Given a [binding](crate::structures::binding::Binding) which binds each variable of the predicate, the predicate instantiates to a [sentence](crate::structures::sentence::Sentence).
*/

use std::hash::{Hash, Hasher};

use crate::{
    builder::names,
    structures::{
        binding::Binding,
        individual::Individual,
        sentence::Sentence,
        variable::{is_variable, Variable, FIRST_VARIABLE, SECOND_VARIABLE},
    },
    types::err::{self, ErrorKind},
};

/// The arity of a predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cardinality {
    None,
    One,
    Two,
}

impl Cardinality {
    /// The count of arguments a sentence of a predicate with the cardinality takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// A predicate.
#[derive(Clone, Debug)]
pub struct Predicate {
    name: String,
    cardinality: Cardinality,
    first: Option<Variable>,
    second: Option<Variable>,
    reflexive: bool,
}

impl Predicate {
    /// A predicate with the given name and cardinality, using default variables and without reflexivity.
    pub fn new(name: &str, cardinality: Cardinality) -> Result<Self, err::BuildError> {
        Predicate::fresh(name, cardinality, FIRST_VARIABLE, SECOND_VARIABLE, false)
    }

    /// A predicate of cardinality none.
    pub fn nullary(name: &str) -> Result<Self, err::BuildError> {
        Predicate::new(name, Cardinality::None)
    }

    /// A predicate of cardinality one, with the given variable.
    pub fn unary(name: &str, variable: Variable) -> Result<Self, err::BuildError> {
        Predicate::fresh(name, Cardinality::One, variable, SECOND_VARIABLE, false)
    }

    /// A (non-reflexive) predicate of cardinality two, with the given variables.
    pub fn binary(name: &str, first: Variable, second: Variable) -> Result<Self, err::BuildError> {
        Predicate::fresh(name, Cardinality::Two, first, second, false)
    }

    /// A reflexive predicate of cardinality two, with the given variables.
    pub fn reflexive(name: &str, first: Variable, second: Variable) -> Result<Self, err::BuildError> {
        Predicate::fresh(name, Cardinality::Two, first, second, true)
    }

    /// A predicate, from each of its parts.
    ///
    /// Variables are checked regardless of the cardinality, though only those variables required by the cardinality are kept.
    pub fn fresh(
        name: &str,
        cardinality: Cardinality,
        first: Variable,
        second: Variable,
        reflexive: bool,
    ) -> Result<Self, err::BuildError> {
        if !names::is_name(name) {
            return Err(err::BuildError::InvalidName(name.to_string()));
        }

        for variable in [first, second] {
            if !is_variable(variable) {
                return Err(err::BuildError::InvalidVariable(variable));
            }
        }

        if cardinality == Cardinality::Two && first == second {
            return Err(err::BuildError::RepeatedVariable(first));
        }

        let (first, second) = match cardinality {
            Cardinality::None => (None, None),
            Cardinality::One => (Some(first), None),
            Cardinality::Two => (Some(first), Some(second)),
        };

        Ok(Predicate {
            name: name.to_string(),
            cardinality,
            first,
            second,
            reflexive: reflexive && cardinality == Cardinality::Two,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// The variable of the first slot, if the cardinality has a first slot.
    pub fn first_variable(&self) -> Option<Variable> {
        self.first
    }

    /// The variable of the second slot, if the cardinality has a second slot.
    pub fn second_variable(&self) -> Option<Variable> {
        self.second
    }

    pub fn is_reflexive(&self) -> bool {
        self.reflexive
    }

    /// The variables of the predicate, in slot order.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.first.into_iter().chain(self.second)
    }

    /// The sentence obtained by replacing each variable of the predicate with the individual it is bound to.
    pub fn instantiate(&self, binding: &Binding) -> Result<Sentence, ErrorKind> {
        let individuals = self
            .variables()
            .map(|variable| bound_individual(binding, variable))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Sentence::new(self.clone(), individuals)?)
    }
}

fn bound_individual(binding: &Binding, variable: Variable) -> Result<Individual, err::FormulaError> {
    match binding.value_of(variable) {
        None => Err(err::FormulaError::MissingVariable(variable)),
        Some(None) => Err(err::FormulaError::UnboundVariable(variable)),
        Some(Some(individual)) => Ok(individual.clone()),
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.cardinality == other.cardinality
            && self.reflexive == other.reflexive
    }
}

impl Eq for Predicate {}

impl Hash for Predicate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.cardinality.hash(state);
        self.reflexive.hash(state);
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.reflexive {
            write!(f, "~")?;
        }
        match (self.first, self.second) {
            (Some(first), Some(second)) => write!(f, "{}[{first},{second}]", self.name),
            (Some(first), None) => write!(f, "{}[{first}]", self.name),
            _ => write!(f, "{}", self.name),
        }
    }
}
