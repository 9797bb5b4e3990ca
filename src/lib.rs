//! A library for reasoning over finite models of first-order logic.
//!
//! finite_fol is a library for answering two questions about a finite model --- a population of individuals, a catalog of predicates, and a truth table of the sentences true in the model:
//! - Does a quantified formula hold, over every way of binding its free variables to distinct individuals?
//! - Given some rules and some new facts, what must be added to, or retracted from, the truth table to reach a fixpoint of forward chaining?
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context], which holds a model together with rules, a configuration, and counters.
//!
//! Though, each procedure is also available as a free function over the databases of a model:
//! - [Enumeration](crate::procedures::enumerate) visits each injective binding of some variables to a population.
//! - [Quantifiers](crate::procedures::quantifiers) evaluate existential and universal claims, by enumeration.
//! - [Modus ponens](crate::procedures::modus_ponens) reasons forward from rules to a fixpoint, by enumeration.
//!
//! Useful starting points, then, may be:
//! - The [structures] to familiarise yourself with individuals, predicates, sentences, formulas, and axioms.
//! - The [database module](crate::db) to inspect how a model is stored.
//! - The [reasoning procedure](crate::procedures::modus_ponens) to inspect the dynamics of forward chaining.
//! - The [configuration](crate::config) to see what a context guards against.
//!
//! # Examples
//!
//! + Reason about a family.
//!
//! ```rust
//! # use finite_fol::context::Context;
//! # use finite_fol::structures::{axiom::Axiom, formula::Formula, predicate::Predicate};
//! let mut the_context = Context::default();
//!
//! for name in ["goku", "chichi", "gohan"] {
//!     assert!(the_context.add_individual(name).is_ok());
//! }
//!
//! let son = Predicate::build("Son[x,y]").unwrap();
//! let lovers = Predicate::build("~Lovers[y,z]").unwrap();
//! let parent = Predicate::build("Parent[z]").unwrap();
//!
//! for predicate in [&son, &lovers, &parent] {
//!     the_context.add_predicate(predicate.clone());
//! }
//!
//! let axiom = Axiom::new(vec![son.into(), lovers.clone().into()], parent.clone()).unwrap();
//! assert!(the_context.add_axiom(axiom).is_ok());
//!
//! assert!(the_context.read_sentence("Son[gohan,goku]").is_ok());
//! assert!(the_context.read_sentence("Lovers[chichi,goku]").is_ok());
//!
//! let delta = the_context.reason(&[]).unwrap();
//! assert_eq!(delta.added().map(|s| s.to_string()).collect::<Vec<_>>(), vec!["Parent[chichi]"]);
//!
//! // Lovers is reflexive, so chichi is a lover of goku and goku is a lover of chichi.
//! // Though, only chichi is a parent.
//! let lovers = Formula::from(lovers);
//! let parent = Formula::from(parent);
//! assert_eq!(the_context.existential(&lovers, &parent), Ok(true));
//! assert_eq!(the_context.universal(&lovers, &parent), Ok(false));
//! ```
//!
//! # Logs
//!
//! Calls to the [log] macros are made throughout the library, with [targets](crate::misc::log::targets) for each area.
//! No log implementation is provided.

#![allow(clippy::single_match)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;
pub mod reports;

pub mod misc;
