use crate::{
    structures::{binding::Binding, predicate::Predicate, variable::Variable},
    types::err::ErrorKind,
};

use super::{symbols, write_binary, write_unary, GroundFormula};

/// A template formula, whose atoms are predicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    Atom(Predicate),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Equiv(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn not(operand: impl Into<Formula>) -> Self {
        Self::Not(Box::new(operand.into()))
    }

    pub fn and(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::And(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn or(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::Or(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn implies(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::Implies(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn equiv(left: impl Into<Formula>, right: impl Into<Formula>) -> Self {
        Self::Equiv(Box::new(left.into()), Box::new(right.into()))
    }

    /// The conjunction of the formulas, associated to the right and in order.
    ///
    /// So, `[a, b, c]` is `(a & (b & c))`, and a single formula is the formula itself.
    /// None, if there are no formulas.
    pub fn conjunction(formulas: impl IntoIterator<Item = Formula>) -> Option<Formula> {
        let formulas = formulas.into_iter().collect::<Vec<_>>();
        formulas
            .into_iter()
            .rev()
            .reduce(|conjunction, formula| Formula::and(formula, conjunction))
    }

    /// The free variables of the formula, each once, in order of first occurrence (from left to right).
    pub fn free_variables(&self) -> Vec<Variable> {
        let mut variables = Vec::default();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, variables: &mut Vec<Variable>) {
        match self {
            Self::Atom(predicate) => {
                for variable in predicate.variables() {
                    if !variables.contains(&variable) {
                        variables.push(variable);
                    }
                }
            }

            Self::Not(operand) => operand.collect_variables(variables),

            Self::And(left, right)
            | Self::Or(left, right)
            | Self::Implies(left, right)
            | Self::Equiv(left, right) => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }

    /// The predicates of the formula, from left to right, with repetition.
    pub fn predicates(&self) -> Vec<&Predicate> {
        match self {
            Self::Atom(predicate) => vec![predicate],

            Self::Not(operand) => operand.predicates(),

            Self::And(left, right)
            | Self::Or(left, right)
            | Self::Implies(left, right)
            | Self::Equiv(left, right) => {
                let mut predicates = left.predicates();
                predicates.extend(right.predicates());
                predicates
            }
        }
    }

    /// The ground formula obtained by replacing each predicate with its instance on the binding.
    ///
    /// Each free variable of the formula must be bound on the binding.
    pub fn bind(&self, binding: &Binding) -> Result<GroundFormula, ErrorKind> {
        let ground = match self {
            Self::Atom(predicate) => GroundFormula::Sentence(predicate.instantiate(binding)?),

            Self::Not(operand) => GroundFormula::not(operand.bind(binding)?),

            Self::And(left, right) => GroundFormula::and(left.bind(binding)?, right.bind(binding)?),

            Self::Or(left, right) => GroundFormula::or(left.bind(binding)?, right.bind(binding)?),

            Self::Implies(left, right) => {
                GroundFormula::implies(left.bind(binding)?, right.bind(binding)?)
            }

            Self::Equiv(left, right) => {
                GroundFormula::equiv(left.bind(binding)?, right.bind(binding)?)
            }
        };
        Ok(ground)
    }
}

impl From<Predicate> for Formula {
    fn from(predicate: Predicate) -> Self {
        Formula::Atom(predicate)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(predicate) => write!(f, "{predicate}"),
            Self::Not(operand) => write_unary(f, symbols::NEGATION, operand),
            Self::And(left, right) => write_binary(f, symbols::CONJUNCTION, left, right),
            Self::Or(left, right) => write_binary(f, symbols::DISJUNCTION, left, right),
            Self::Implies(left, right) => write_binary(f, symbols::IMPLICATION, left, right),
            Self::Equiv(left, right) => write_binary(f, symbols::EQUIVALENCE, left, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        structures::{individual::Individual, predicate::Cardinality},
        types::err::{self},
    };

    use super::*;

    fn a() -> Predicate {
        Predicate::nullary("A").unwrap()
    }

    fn b() -> Predicate {
        Predicate::nullary("B").unwrap()
    }

    #[test]
    fn canonical_strings() {
        assert_eq!(Formula::not(a()).to_string(), "¬(A)");
        assert_eq!(Formula::and(a(), b()).to_string(), "(A & B)");
        assert_eq!(Formula::or(a(), b()).to_string(), "(A | B)");
        assert_eq!(Formula::implies(a(), b()).to_string(), "(A > B)");
        assert_eq!(Formula::equiv(a(), b()).to_string(), "(A = B)");
    }

    #[test]
    fn right_associated_conjunction() {
        let c = Predicate::nullary("C").unwrap();
        let conjunction = Formula::conjunction([a().into(), b().into(), c.into()]).unwrap();
        assert_eq!(conjunction.to_string(), "(A & (B & C))");

        assert_eq!(Formula::conjunction([a().into()]), Some(Formula::Atom(a())));
        assert_eq!(Formula::conjunction(Vec::default()), None);
    }

    #[test]
    fn free_variables_in_order_of_occurrence() {
        let son = Predicate::binary("Son", 'x', 'z').unwrap();
        let lovers = Predicate::binary("Lovers", 'x', 'y').unwrap();
        let parent = Predicate::unary("Parent", 'w').unwrap();

        let formula = Formula::implies(Formula::and(son, lovers), Formula::not(parent));
        assert_eq!(formula.free_variables(), vec!['x', 'z', 'y', 'w']);
        assert!(Formula::and(a(), b()).free_variables().is_empty());
    }

    #[test]
    fn predicates_with_repetition() {
        let formula = Formula::or(Formula::not(a()), Formula::and(b(), a()));
        let names = formula
            .predicates()
            .into_iter()
            .map(|predicate| predicate.name())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B", "A"]);
    }

    #[test]
    fn binding_requires_each_variable() {
        let a_xy = Predicate::new("A", Cardinality::Two).unwrap();
        let formula = Formula::not(a_xy);

        let mut binding = Binding::default();
        assert!(binding.declare('x').is_ok());
        assert!(binding.bind('x', Individual::new("goku").unwrap()).is_ok());

        assert_eq!(
            formula.bind(&binding),
            Err(ErrorKind::Formula(err::FormulaError::MissingVariable('y')))
        );

        assert!(binding.declare('y').is_ok());
        assert_eq!(
            formula.bind(&binding),
            Err(ErrorKind::Formula(err::FormulaError::UnboundVariable('y')))
        );

        assert!(binding.bind('y', Individual::new("vegeta").unwrap()).is_ok());
        assert_eq!(
            formula.bind(&binding).map(|ground| ground.to_string()),
            Ok("¬(A[goku,vegeta])".to_string())
        );
    }
}
