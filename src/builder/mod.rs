/*!
Tools for building structures from names and textual forms.

- [names] validates names and the textual forms of predicates and sentences.
- Predicates are read from a textual form with [Predicate::build](crate::structures::predicate::Predicate::build).
- Sentences are built from names with [Sentence::build](crate::structures::sentence::Sentence::build), or read from a textual form against a population and catalog with [Sentence::build_strict](crate::structures::sentence::Sentence::build_strict).

```rust
# use finite_fol::structures::predicate::Predicate;
let rivals = Predicate::build("~Rivals[x,y]").unwrap();
assert!(rivals.is_reflexive());
assert_eq!(rivals.to_string(), "~Rivals[x,y]");
```
*/

pub mod names;
mod parse;
