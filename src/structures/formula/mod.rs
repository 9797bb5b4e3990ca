/*!
Formulas, built from atoms with negation (¬), conjunction (&), disjunction (|), implication (>), and equivalence (=).

Formulas come in two (parallel) kinds:
- [Template formulas](Formula), whose atoms are [predicates](crate::structures::predicate) and so may contain free variables.
- [Ground formulas](GroundFormula), whose atoms are [sentences](crate::structures::sentence) and so contain no variables.

A template formula is turned into a ground formula by [binding](Formula::bind) the formula to a [binding](crate::structures::binding::Binding), which replaces each predicate with the sentence obtained by replacing each variable with its bound individual.
And, a ground formula may be [evaluated](GroundFormula::evaluate) against a [truth table](crate::db::truth_table::TruthTable), where a sentence is true exactly when the sentence is in the truth table, and each connective has its usual two-valued meaning.

```rust
# use finite_fol::db::truth_table::TruthTable;
# use finite_fol::structures::binding::Binding;
# use finite_fol::structures::formula::Formula;
# use finite_fol::structures::individual::Individual;
# use finite_fol::structures::predicate::Predicate;
# use finite_fol::structures::sentence::Sentence;
let good = Predicate::unary("Good", 'x').unwrap();
let bad = Predicate::unary("Bad", 'x').unwrap();
let goku = Individual::new("goku").unwrap();

let formula = Formula::and(good.clone(), Formula::not(bad));
assert_eq!(formula.to_string(), "(Good[x] & ¬(Bad[x]))");
assert_eq!(formula.free_variables(), vec!['x']);

let mut binding = Binding::default();
binding.declare('x').unwrap();
binding.bind('x', goku.clone()).unwrap();

let ground = formula.bind(&binding).unwrap();
assert_eq!(ground.to_string(), "(Good[goku] & ¬(Bad[goku]))");

let table = TruthTable::default().with(Sentence::unary(good, goku).unwrap());
assert!(ground.evaluate(&table));
```
*/

mod ground;
mod template;

pub use ground::GroundFormula;
pub use template::Formula;

/// Symbols used when writing formulas.
pub mod symbols {
    pub const NEGATION: &str = "¬";
    pub const CONJUNCTION: &str = "&";
    pub const DISJUNCTION: &str = "|";
    pub const IMPLICATION: &str = ">";
    pub const EQUIVALENCE: &str = "=";
}

/// Writes a negation in canonical form.
fn write_unary(
    f: &mut std::fmt::Formatter<'_>,
    symbol: &str,
    operand: &impl std::fmt::Display,
) -> std::fmt::Result {
    write!(f, "{symbol}({operand})")
}

/// Writes a binary connective in canonical form.
fn write_binary(
    f: &mut std::fmt::Formatter<'_>,
    symbol: &str,
    left: &impl std::fmt::Display,
    right: &impl std::fmt::Display,
) -> std::fmt::Result {
    write!(f, "({left} {symbol} {right})")
}
