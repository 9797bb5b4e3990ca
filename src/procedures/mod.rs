//! Procedures for querying and reasoning about a model.
//!
//! Each procedure is a free function over the databases of a model, and a [context](crate::context) offers each procedure as a method.
//!
//! - [enumerate] visits each injective binding of some variables to a population.
//! - [quantifiers] evaluate existential and universal claims, by enumeration.
//! - [modus_ponens] reasons forward from a collection of rules to a fixpoint, by enumeration.

pub mod enumerate;
pub mod modus_ponens;
pub mod quantifiers;
