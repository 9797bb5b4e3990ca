/*!
Axioms, aka. rules of the form 'premises ⊢ conclusion'.

An axiom is an ordered, non-empty, sequence of premises together with a conclusion, each a [template formula](crate::structures::formula::Formula).
Every free variable of the conclusion must be a free variable of some premise, so any binding which satisfies the premises also binds each variable of the conclusion.

- The *premise* of an axiom is the conjunction of the premises, associated to the right and in order.
- The *formula* of an axiom is the implication from the premise to the conclusion.

Axioms are written with each premise in parentheses, and two axioms are equal when they are written the same.

```rust
# use finite_fol::structures::axiom::Axiom;
# use finite_fol::structures::formula::Formula;
# use finite_fol::structures::predicate::Predicate;
let a = Predicate::nullary("A").unwrap();
let b = Predicate::nullary("B").unwrap();
let c = Predicate::nullary("C").unwrap();

let axiom = Axiom::new(vec![a.into(), b.into()], c).unwrap();
assert_eq!(axiom.to_string(), "(A) & (B) > C");
assert_eq!(axiom.premise().to_string(), "(A & B)");
assert_eq!(axiom.formula().to_string(), "((A & B) > C)");
```
*/

use crate::{
    structures::{formula::Formula, variable::Variable},
    types::err::{self},
};

/// An axiom.
#[derive(Clone, Debug)]
pub struct Axiom {
    premises: Vec<Formula>,
    conclusion: Formula,

    /// The conjunction of the premises, fixed at construction.
    premise: Formula,
}

impl Axiom {
    /// An axiom with the given premises and conclusion, if there is some premise and the conclusion has no variable outside the premises.
    pub fn new(premises: Vec<Formula>, conclusion: impl Into<Formula>) -> Result<Self, err::BuildError> {
        let conclusion = conclusion.into();

        let premise = match Formula::conjunction(premises.iter().cloned()) {
            Some(premise) => premise,
            None => return Err(err::BuildError::NoPremises),
        };

        let premise_variables = premise.free_variables();
        if let Some(variable) = conclusion
            .free_variables()
            .into_iter()
            .find(|variable| !premise_variables.contains(variable))
        {
            return Err(err::BuildError::UnboundConclusionVariable(variable));
        }

        Ok(Axiom {
            premises,
            conclusion,
            premise,
        })
    }

    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    pub fn conclusion(&self) -> &Formula {
        &self.conclusion
    }

    /// The conjunction of the premises.
    pub fn premise(&self) -> &Formula {
        &self.premise
    }

    /// The implication from the premise to the conclusion.
    pub fn formula(&self) -> Formula {
        Formula::implies(self.premise.clone(), self.conclusion.clone())
    }

    /// The free variables of the axiom, which are exactly the free variables of the premise.
    pub fn variables(&self) -> Vec<Variable> {
        self.premise.free_variables()
    }
}

impl PartialEq for Axiom {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Axiom {}

impl std::fmt::Display for Axiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, premise) in self.premises.iter().enumerate() {
            if index > 0 {
                write!(f, " & ")?;
            }
            write!(f, "({premise})")?;
        }
        write!(f, " > {}", self.conclusion)
    }
}
