/*!
The truth table, aka. the set of sentences true in a model.

A sentence is true if and only if it is in the truth table, and so the truth table is a 'closed world' --- every sentence not in the table is false.

Sentences are [stored](crate::db::store) by canonical string.
As the canonical string of a reflexive sentence sorts its individuals, adding `P[a,b]` for a reflexive predicate `P` makes `P[b,a]` true as well.
Though, the canonical string also marks reflexivity, so no non-reflexive sentence is made true.

```rust
# use finite_fol::db::truth_table::TruthTable;
# use finite_fol::structures::sentence::Sentence;
let table = TruthTable::default().with(Sentence::build("A", Some("First"), Some("Second"), true).unwrap());

assert!(table.exists(&Sentence::build("A", Some("Second"), Some("First"), true).unwrap()));
assert!(!table.exists(&Sentence::build("A", Some("First"), Some("Second"), false).unwrap()));
```

The truth table is a plain value: a snapshot is a [clone](Clone::clone), and is independent of the table it was taken from.
*/

use crate::{
    db::store::Store,
    misc::log::targets::{self},
    structures::{predicate::Predicate, sentence::Sentence},
};

/// The truth table.
#[derive(Clone, Debug, Default)]
pub struct TruthTable {
    sentences: Store<Sentence>,
}

impl TruthTable {
    /// The table, with the sentence added.
    pub fn with(mut self, sentence: Sentence) -> Self {
        self.add(sentence);
        self
    }

    /// Whether the sentence is true.
    pub fn exists(&self, sentence: &Sentence) -> bool {
        self.sentences.exists(sentence)
    }

    /// Adds the sentence, returning whether the sentence was not already true.
    pub fn add(&mut self, sentence: Sentence) -> bool {
        log::trace!(target: targets::TRUTH_TABLE, "+ {sentence}");
        self.sentences.add(sentence)
    }

    /// Removes the sentence, returning whether the sentence was true.
    pub fn remove(&mut self, sentence: &Sentence) -> bool {
        log::trace!(target: targets::TRUTH_TABLE, "- {sentence}");
        self.sentences.remove(sentence)
    }

    /// Adds every sentence of the other table, returning whether some sentence was not already true.
    pub fn join(&mut self, other: &TruthTable) -> bool {
        let mut fresh = false;
        for sentence in other.sentences() {
            fresh |= self.add(sentence.clone());
        }
        fresh
    }

    /// Removes every sentence whose predicate is the given predicate, returning a count of the sentences removed.
    ///
    /// Note, predicates are compared by name, cardinality, and reflexivity.
    pub fn remove_predicate(&mut self, predicate: &Predicate) -> usize {
        let before = self.sentences.len();
        self.sentences
            .retain(|sentence| sentence.predicate() != predicate);
        let removed = before - self.sentences.len();
        log::debug!(target: targets::TRUTH_TABLE, "Removed {removed} sentences of {predicate}");
        removed
    }

    /// An iterator over the true sentences, in order of addition.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.elements()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl FromIterator<Sentence> for TruthTable {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        TruthTable {
            sentences: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, sentence) in self.sentences().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{sentence}")?;
        }
        write!(f, "}}")
    }
}
