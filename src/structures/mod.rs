//! Key structures, such as individuals, predicates, sentences, formulas, and axioms.
//!
//! Each structure is an immutable value, with a canonical string representation (via [Display](std::fmt::Display)) which is used as a key when the structure is [stored](crate::db::store).
//!
//! # Individuals, predicates, and sentences
//!
//! A *model* is fixed by a finite population of [individuals](individual), a catalog of [predicates](predicate), and a [truth table](crate::db::truth_table) of [sentences](sentence).
//! A sentence is true in the model if and only if the sentence is in the truth table.
//!
//! # Formulas and bindings
//!
//! [Formulas](formula) built from predicates contain free [variables](variable).
//! A [binding](binding) of the free variables of a formula to individuals turns the formula into a ground formula, whose value in the model may be determined.
//!
//! # Axioms
//!
//! An [axiom](axiom) is a collection of premises and a conclusion, each a formula, used to reason [forward](crate::procedures::modus_ponens) from the truth table.

pub mod axiom;
pub mod binding;
pub mod formula;
pub mod individual;
pub mod predicate;
pub mod sentence;
pub mod variable;
