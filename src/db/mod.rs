//! Databases for holding a model and the rules used to reason about the model.
//!
//! Each database is a [store] keyed by the canonical string of its items:
//!   - The population, a store of [individuals](crate::structures::individual).
//!   - The catalog, a store of [predicates](crate::structures::predicate).
//!   - The rules, a store of [axioms](crate::structures::axiom).
//!   - [The truth table](crate::db::truth_table), a store of [sentences](crate::structures::sentence), with a handful of methods for use as a collection of facts.
//!
//! As predicates are keyed by their canonical string, which includes the variables of the predicate, the same predicate may appear in the catalog more than once with different variables.
//! For this reason, lookups against the catalog are typically made by [name and cardinality](find_predicate) rather than by key.
//!
//! The canonical string of a reflexive predicate is prefixed with `~`, so `~Rivals[x,y]` and `Rivals[x,y]` are distinct entries of the catalog.

pub mod store;
pub mod truth_table;

use crate::structures::{
    axiom::Axiom,
    individual::Individual,
    predicate::{Cardinality, Predicate},
};

/// The population of a model.
pub type Population = store::Store<Individual>;

/// The catalog of predicates of a model.
pub type Catalog = store::Store<Predicate>;

/// A collection of rules.
pub type Rules = store::Store<Axiom>;

/// Some predicate in the catalog with the given name, cardinality, and reflexivity.
pub fn find_predicate<'c>(
    catalog: &'c Catalog,
    name: &str,
    cardinality: Cardinality,
    reflexive: bool,
) -> Option<&'c Predicate> {
    catalog.elements().find(|predicate| {
        predicate.name() == name
            && predicate.cardinality() == cardinality
            && predicate.is_reflexive() == reflexive
    })
}
