//! Error types used in the library.
//!
//! - Construction errors are returned when building an individual, predicate, sentence, or axiom from invalid parts.
//! - Binding errors are returned on lookups against a [Binding](crate::structures::binding::Binding) which make no sense --- e.g. reading an undeclared variable.
//! - Quantifier and reasoner errors are returned when the preconditions of a procedure fail, and always before any enumeration takes place.
//!
//! No error is recoverable in the sense of a procedure continuing after the error is returned.
//! Though, as every procedure checks its preconditions first, a failed call leaves each structure given to the procedure as it was.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Binding(BindingError),
    Build(BuildError),
    Context(ContextError),
    Enumeration(EnumerationError),
    Formula(FormulaError),
    Parse(ParseError),
    Quantifier(QuantifierError),
    Reasoner(ReasonerError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binding(e) => write!(f, "Binding: {e:?}"),
            Self::Build(e) => write!(f, "Build: {e:?}"),
            Self::Context(e) => write!(f, "Context: {e:?}"),
            Self::Enumeration(e) => write!(f, "Enumeration: {e:?}"),
            Self::Formula(e) => write!(f, "Formula: {e:?}"),
            Self::Parse(e) => write!(f, "Parse: {e:?}"),
            Self::Quantifier(e) => write!(f, "Quantifier: {e:?}"),
            Self::Reasoner(e) => write!(f, "Reasoner: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when using a binding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BindingError {
    /// The variable is already declared on the binding.
    DuplicateVariable(char),

    /// The variable has not been declared on the binding.
    UndeclaredVariable(char),

    /// The variable is already bound to some individual.
    AlreadyBound(char),

    /// An attempt to declare an empty collection of variables.
    NoVariables,

    /// The individual is already bound to some (other) variable.
    IndividualInUse(String),

    /// The individual is not bound to any variable.
    IndividualMissing(String),

    /// Every declared variable is bound, and so there is no 'next' variable.
    Complete,
}

impl From<BindingError> for ErrorKind {
    fn from(e: BindingError) -> Self {
        ErrorKind::Binding(e)
    }
}

/// Noted errors when building a structure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A name used letters other than ascii letters, or was empty.
    InvalidName(String),

    /// `x` and `y` are reserved as variables and may not name an individual.
    ReservedName(String),

    /// A variable was something other than a single lowercase ascii letter.
    InvalidVariable(char),

    /// The two variables of a binary predicate coincide.
    RepeatedVariable(char),

    /// The count of individuals given does not match the cardinality of the predicate.
    Arity,

    /// The two individuals of a binary sentence coincide.
    RepeatedIndividual(String),

    /// An axiom must have at least one premise.
    NoPremises,

    /// The conclusion of an axiom uses a variable which does not appear in any premise.
    UnboundConclusionVariable(char),
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors when using a context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContextError {
    /// Adding the individual would exceed the population limit of the context.
    PopulationLimit,

    /// The predicate is not part of the catalog of the context.
    UnknownPredicate(String),

    /// The individual is not part of the population of the context.
    UnknownIndividual(String),

    /// A configuration value was outside the bounds of the option.
    ConfigBounds(&'static str),
}

impl From<ContextError> for ErrorKind {
    fn from(e: ContextError) -> Self {
        ErrorKind::Context(e)
    }
}

/// Noted errors when enumerating bindings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EnumerationError {
    /// Nothing to enumerate, as there are no variables.
    NoVariables,

    /// There are fewer individuals than variables, and so no injective binding exists.
    InsufficientPopulation,
}

impl From<EnumerationError> for ErrorKind {
    fn from(e: EnumerationError) -> Self {
        ErrorKind::Enumeration(e)
    }
}

/// Noted errors when instantiating a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// A variable of the formula is not declared on the binding.
    MissingVariable(char),

    /// A variable of the formula is declared on the binding, but has no individual.
    UnboundVariable(char),
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The textual form of a predicate is malformed.
    Predicate(String),

    /// The textual form of a sentence is malformed.
    Sentence(String),

    /// No predicate with the parsed name and cardinality is in the catalog.
    UnknownPredicate(String),

    /// The parsed individual is not part of the population.
    UnknownIndividual(String),

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Failed preconditions of a quantifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QuantifierError {
    /// Either the premise or the body has no free variables.
    NoVariables,

    /// There are fewer individuals than variables in the premise.
    InsufficientPopulation,
}

impl From<QuantifierError> for ErrorKind {
    fn from(e: QuantifierError) -> Self {
        ErrorKind::Quantifier(e)
    }
}

/// Failed preconditions of the reasoner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReasonerError {
    /// There are no rules to reason with.
    NoRules,

    /// Some rule has more variables than there are individuals.
    InsufficientPopulation,

    /// The conclusion of the detailed rule is neither an atom nor the negation of an atom.
    UnsupportedConclusion(String),
}

impl From<ReasonerError> for ErrorKind {
    fn from(e: ReasonerError) -> Self {
        ErrorKind::Reasoner(e)
    }
}
