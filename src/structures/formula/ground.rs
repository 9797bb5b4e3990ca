use crate::{db::truth_table::TruthTable, structures::sentence::Sentence};

use super::{symbols, write_binary, write_unary};

/// A ground formula, whose atoms are sentences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroundFormula {
    Sentence(Sentence),
    Not(Box<GroundFormula>),
    And(Box<GroundFormula>, Box<GroundFormula>),
    Or(Box<GroundFormula>, Box<GroundFormula>),
    Implies(Box<GroundFormula>, Box<GroundFormula>),
    Equiv(Box<GroundFormula>, Box<GroundFormula>),
}

impl GroundFormula {
    pub fn not(operand: impl Into<GroundFormula>) -> Self {
        Self::Not(Box::new(operand.into()))
    }

    pub fn and(left: impl Into<GroundFormula>, right: impl Into<GroundFormula>) -> Self {
        Self::And(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn or(left: impl Into<GroundFormula>, right: impl Into<GroundFormula>) -> Self {
        Self::Or(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn implies(left: impl Into<GroundFormula>, right: impl Into<GroundFormula>) -> Self {
        Self::Implies(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn equiv(left: impl Into<GroundFormula>, right: impl Into<GroundFormula>) -> Self {
        Self::Equiv(Box::new(left.into()), Box::new(right.into()))
    }

    /// The value of the formula, where a sentence is true if and only if the sentence is in the truth table.
    pub fn evaluate(&self, table: &TruthTable) -> bool {
        match self {
            Self::Sentence(sentence) => table.exists(sentence),
            Self::Not(operand) => !operand.evaluate(table),
            Self::And(left, right) => left.evaluate(table) && right.evaluate(table),
            Self::Or(left, right) => left.evaluate(table) || right.evaluate(table),
            Self::Implies(left, right) => !left.evaluate(table) || right.evaluate(table),
            Self::Equiv(left, right) => left.evaluate(table) == right.evaluate(table),
        }
    }
}

impl From<Sentence> for GroundFormula {
    fn from(sentence: Sentence) -> Self {
        GroundFormula::Sentence(sentence)
    }
}

impl std::fmt::Display for GroundFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sentence(sentence) => write!(f, "{sentence}"),
            Self::Not(operand) => write_unary(f, symbols::NEGATION, operand),
            Self::And(left, right) => write_binary(f, symbols::CONJUNCTION, left, right),
            Self::Or(left, right) => write_binary(f, symbols::DISJUNCTION, left, right),
            Self::Implies(left, right) => write_binary(f, symbols::IMPLICATION, left, right),
            Self::Equiv(left, right) => write_binary(f, symbols::EQUIVALENCE, left, right),
        }
    }
}
