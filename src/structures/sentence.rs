/*!
Sentences, aka. ground atoms.

A sentence is a [predicate](crate::structures::predicate) together with as many [individuals](crate::structures::individual) as the cardinality of the predicate requires.
The two individuals of a sentence of cardinality two must differ.

# Equality and canonical form

Sentences are equal when their predicates are equal and their individuals are equal, in order.
Except, if the predicate is reflexive the order of the individuals is ignored.

The canonical (string) form of a sentence is the name of the predicate followed by the individuals.
For reflexive sentences the form is prefixed with `~` and the individuals are sorted, so both orders of the individuals have the same canonical form, distinct from the form of a non-reflexive sentence.
And, as the [truth table](crate::db::truth_table) is keyed by canonical forms, both orders are the same fact.

```rust
# use finite_fol::structures::individual::Individual;
# use finite_fol::structures::predicate::Predicate;
# use finite_fol::structures::sentence::Sentence;
let goku = Individual::new("goku").unwrap();
let vegeta = Individual::new("vegeta").unwrap();

let rivals = Predicate::reflexive("Rivals", 'x', 'y').unwrap();
let one_way = Sentence::binary(rivals.clone(), vegeta.clone(), goku.clone()).unwrap();
let other_way = Sentence::binary(rivals, goku, vegeta).unwrap();

assert_eq!(one_way, other_way);
assert_eq!(one_way.to_string(), "~Rivals[goku,vegeta]");
```
*/

use std::hash::{Hash, Hasher};

use crate::{
    structures::{individual::Individual, predicate::Predicate},
    types::err::{self},
};

/// A sentence.
#[derive(Clone, Debug)]
pub struct Sentence {
    predicate: Predicate,
    individuals: Vec<Individual>,
}

impl Sentence {
    /// A sentence of the predicate applied to the individuals, if the individuals fit the predicate.
    pub fn new(predicate: Predicate, individuals: Vec<Individual>) -> Result<Self, err::BuildError> {
        if individuals.len() != predicate.cardinality().arity() {
            return Err(err::BuildError::Arity);
        }

        if let [first, second] = individuals.as_slice() {
            if first == second {
                return Err(err::BuildError::RepeatedIndividual(first.name().to_string()));
            }
        }

        Ok(Sentence {
            predicate,
            individuals,
        })
    }

    /// A sentence of a predicate of cardinality none.
    pub fn nullary(predicate: Predicate) -> Result<Self, err::BuildError> {
        Sentence::new(predicate, Vec::default())
    }

    /// A sentence of a predicate of cardinality one.
    pub fn unary(predicate: Predicate, individual: Individual) -> Result<Self, err::BuildError> {
        Sentence::new(predicate, vec![individual])
    }

    /// A sentence of a predicate of cardinality two.
    pub fn binary(
        predicate: Predicate,
        first: Individual,
        second: Individual,
    ) -> Result<Self, err::BuildError> {
        Sentence::new(predicate, vec![first, second])
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// The individuals of the sentence, in the order given at construction.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn first(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    pub fn second(&self) -> Option<&Individual> {
        self.individuals.get(1)
    }

    /// The individuals of the sentence, sorted if the sentence is reflexive.
    fn canonical_individuals(&self) -> Vec<&Individual> {
        let mut individuals = self.individuals.iter().collect::<Vec<_>>();
        if self.predicate.is_reflexive() {
            individuals.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        }
        individuals
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.predicate == other.predicate
            && self.canonical_individuals() == other.canonical_individuals()
    }
}

impl Eq for Sentence {}

impl Hash for Sentence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.predicate.hash(state);
        self.canonical_individuals().hash(state);
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.predicate.is_reflexive() {
            write!(f, "~")?;
        }
        match self.canonical_individuals().as_slice() {
            [] => write!(f, "{}", self.predicate.name()),
            [first] => write!(f, "{}[{first}]", self.predicate.name()),
            [first, second, ..] => write!(f, "{}[{first},{second}]", self.predicate.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::structures::predicate::Cardinality;

    use super::*;

    fn individual(name: &str) -> Individual {
        Individual::new(name).unwrap()
    }

    #[test]
    fn arity_must_match() {
        let a = Predicate::new("A", Cardinality::One).unwrap();
        assert_eq!(
            Sentence::nullary(a.clone()).unwrap_err(),
            err::BuildError::Arity
        );
        assert_eq!(
            Sentence::binary(a.clone(), individual("goku"), individual("gohan")).unwrap_err(),
            err::BuildError::Arity
        );
        assert!(Sentence::unary(a, individual("goku")).is_ok());
    }

    #[test]
    fn binary_individuals_differ() {
        let a = Predicate::new("A", Cardinality::Two).unwrap();
        assert_eq!(
            Sentence::binary(a, individual("goku"), individual("goku")).unwrap_err(),
            err::BuildError::RepeatedIndividual("goku".to_string())
        );
    }

    #[test]
    fn order_matters_without_reflexivity() {
        let a = Predicate::new("A", Cardinality::Two).unwrap();
        let ab = Sentence::binary(a.clone(), individual("goku"), individual("vegeta")).unwrap();
        let ba = Sentence::binary(a, individual("vegeta"), individual("goku")).unwrap();

        assert_ne!(ab, ba);
        assert_eq!(ab.to_string(), "A[goku,vegeta]");
        assert_eq!(ba.to_string(), "A[vegeta,goku]");
    }

    #[test]
    fn variables_are_not_part_of_identity() {
        let a_x = Predicate::unary("A", 'x').unwrap();
        let a_z = Predicate::unary("A", 'z').unwrap();
        assert_eq!(
            Sentence::unary(a_x, individual("goku")).unwrap(),
            Sentence::unary(a_z, individual("goku")).unwrap()
        );
    }

    #[test]
    fn reflexivity_distinguishes_sentences() {
        let plain = Predicate::new("A", Cardinality::Two).unwrap();
        let reflexive = Predicate::reflexive("A", 'x', 'y').unwrap();

        let plain = Sentence::binary(plain, individual("goku"), individual("vegeta")).unwrap();
        let reflexive = Sentence::binary(reflexive, individual("goku"), individual("vegeta")).unwrap();

        assert_ne!(plain, reflexive);
        assert_eq!(plain.to_string(), "A[goku,vegeta]");
        assert_eq!(reflexive.to_string(), "~A[goku,vegeta]");
    }
}
