/*!
Reports from reasoning.

The report of a call to [modus_ponens](crate::procedures::modus_ponens) is a [Delta]: the sentences added to, and the sentences retracted from, a truth table.

Each side of a delta is a [store](crate::db::store) keyed by the canonical string of a sentence, and so:
- Recording a sentence twice on the same side keeps the position of the first record.
- [Merging](Delta::merge) one delta into another is a union of each side, with the merged sentence replacing any sentence already recorded under the same key.

A sentence may be recorded on both sides of a delta, e.g. when one rule concludes a sentence and another rule concludes the negation of the sentence.
A [purge](Delta::purge) resolves each such sentence in favour of addition.

```rust
# use finite_fol::reports::Delta;
# use finite_fol::structures::sentence::Sentence;
let a = Sentence::build("A", Some("goku"), None, false).unwrap();
let b = Sentence::build("B", Some("goku"), None, false).unwrap();

let mut delta = Delta::default();
delta.add(a.clone());
delta.retract(a.clone());
delta.retract(b.clone());
assert_eq!(delta.count(), 3);

delta.purge();
assert!(delta.is_added(&a));
assert!(!delta.is_retracted(&a));
assert!(delta.is_retracted(&b));
```
*/

use crate::{db::store::Store, structures::sentence::Sentence};

/// Sentences added to, and retracted from, a truth table.
#[derive(Clone, Debug, Default)]
pub struct Delta {
    added: Store<Sentence>,
    retracted: Store<Sentence>,
}

impl Delta {
    /// Records the sentence as added.
    pub fn add(&mut self, sentence: Sentence) {
        self.added.add(sentence);
    }

    /// Records the sentence as retracted.
    pub fn retract(&mut self, sentence: Sentence) {
        self.retracted.add(sentence);
    }

    /// Merges each side of the other delta into the corresponding side of the delta.
    pub fn merge(&mut self, other: Delta) {
        self.added.extend(other.added.into_elements());
        self.retracted.extend(other.retracted.into_elements());
    }

    /// Removes each retraction of a sentence which is also recorded as added.
    pub fn purge(&mut self) {
        let added = &self.added;
        self.retracted
            .retain(|sentence| !added.exists(sentence));
    }

    /// The count of sentences recorded, across both sides.
    pub fn count(&self) -> usize {
        self.added.len() + self.retracted.len()
    }

    /// Whether any sentence is recorded.
    pub fn any(&self) -> bool {
        self.count() > 0
    }

    /// The added sentences, in order of discovery.
    pub fn added(&self) -> impl Iterator<Item = &Sentence> {
        self.added.elements()
    }

    /// The retracted sentences, in order of discovery.
    pub fn retracted(&self) -> impl Iterator<Item = &Sentence> {
        self.retracted.elements()
    }

    pub fn is_added(&self, sentence: &Sentence) -> bool {
        self.added.exists(sentence)
    }

    pub fn is_retracted(&self, sentence: &Sentence) -> bool {
        self.retracted.exists(sentence)
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let added = self.added().map(|s| s.to_string()).collect::<Vec<_>>();
        let retracted = self.retracted().map(|s| s.to_string()).collect::<Vec<_>>();
        write!(f, "+ [{}] - [{}]", added.join(", "), retracted.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unary(name: &str, individual: &str) -> Sentence {
        Sentence::build(name, Some(individual), None, false).unwrap()
    }

    #[test]
    fn sides_deduplicate() {
        let mut delta = Delta::default();
        delta.add(unary("A", "goku"));
        delta.add(unary("B", "goku"));
        delta.add(unary("A", "goku"));

        assert_eq!(delta.count(), 2);
        assert!(delta.any());
        assert_eq!(
            delta.added().map(|s| s.to_string()).collect::<Vec<_>>(),
            vec!["A[goku]", "B[goku]"]
        );
    }

    #[test]
    fn merge_keeps_first_position() {
        let mut delta = Delta::default();
        delta.add(unary("A", "goku"));
        delta.add(unary("B", "goku"));

        let mut other = Delta::default();
        other.add(unary("C", "goku"));
        other.add(unary("A", "goku"));
        other.retract(unary("D", "goku"));

        delta.merge(other);

        assert_eq!(
            delta.added().map(|s| s.to_string()).collect::<Vec<_>>(),
            vec!["A[goku]", "B[goku]", "C[goku]"]
        );
        assert_eq!(delta.to_string(), "+ [A[goku], B[goku], C[goku]] - [D[goku]]");
    }

    #[test]
    fn purge_favours_addition() {
        let mut delta = Delta::default();
        delta.retract(unary("A", "goku"));
        delta.retract(unary("B", "goku"));
        delta.add(unary("A", "goku"));

        delta.purge();

        assert_eq!(delta.count(), 2);
        assert!(delta.is_added(&unary("A", "goku")));
        assert!(!delta.is_retracted(&unary("A", "goku")));
        assert!(delta.is_retracted(&unary("B", "goku")));
    }

    #[test]
    fn empty() {
        let delta = Delta::default();
        assert!(!delta.any());
        assert_eq!(delta.to_string(), "+ [] - []");
    }
}
