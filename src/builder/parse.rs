use crate::{
    builder::names::{self},
    db::{self, Catalog, Population},
    structures::{
        individual::Individual,
        predicate::{Cardinality, Predicate},
        sentence::Sentence,
        variable::{FIRST_VARIABLE, SECOND_VARIABLE},
    },
    types::err::{self, ErrorKind},
};

impl Predicate {
    /// A predicate from its textual form, e.g. `Saiyan[x]` or `~Rivals[x,y]`.
    ///
    /// The `~` prefix marks reflexivity, and is ignored unless the predicate has two variables.
    pub fn build(input: &str) -> Result<Self, ErrorKind> {
        if input.is_empty() {
            return Err(err::ParseError::Empty.into());
        }

        let form = match names::split_form(input) {
            Some(form) if names::is_predicate_form(input) => form,
            _ => return Err(err::ParseError::Predicate(input.to_string()).into()),
        };

        let variables = form
            .arguments
            .iter()
            .filter_map(|argument| argument.chars().next())
            .collect::<Vec<_>>();

        let predicate = match variables.as_slice() {
            [] => Predicate::nullary(form.name)?,
            [first] => Predicate::unary(form.name, *first)?,
            [first, second, ..] => Predicate::fresh(
                form.name,
                Cardinality::Two,
                *first,
                *second,
                form.reflexive,
            )?,
        };

        Ok(predicate)
    }
}

impl Sentence {
    /// A sentence from the name of a predicate and the names of (at most two) individuals.
    ///
    /// The cardinality of the predicate is the count of individual names given, where an empty name is the same as no name.
    /// And, the reflexivity flag is ignored unless two individual names are given.
    ///
    /// ```rust
    /// # use finite_fol::structures::sentence::Sentence;
    /// let sentence = Sentence::build("Son", Some("gohan"), Some("goku"), false).unwrap();
    /// assert_eq!(sentence.to_string(), "Son[gohan,goku]");
    ///
    /// let sentence = Sentence::build("Moon", Some(""), None, false).unwrap();
    /// assert_eq!(sentence.to_string(), "Moon");
    /// ```
    pub fn build(
        predicate: &str,
        first: Option<&str>,
        second: Option<&str>,
        reflexive: bool,
    ) -> Result<Self, err::BuildError> {
        let first = first.filter(|name| !name.is_empty());
        let second = second.filter(|name| !name.is_empty());

        match (first, second) {
            (None, _) => Sentence::nullary(Predicate::nullary(predicate)?),

            (Some(first), None) => Sentence::unary(
                Predicate::new(predicate, Cardinality::One)?,
                Individual::new(first)?,
            ),

            (Some(first), Some(second)) => Sentence::binary(
                Predicate::fresh(
                    predicate,
                    Cardinality::Two,
                    FIRST_VARIABLE,
                    SECOND_VARIABLE,
                    reflexive,
                )?,
                Individual::new(first)?,
                Individual::new(second)?,
            ),
        }
    }

    /// A sentence from its textual form, e.g. `Saiyan[goku]` or `~Rivals[goku,vegeta]`, using only predicates from the catalog and individuals from the population.
    ///
    /// A `~` prefix requires a reflexive predicate.
    /// Otherwise, for a sentence with two individuals a non-reflexive predicate in the catalog is preferred to a reflexive predicate.
    pub fn build_strict(
        input: &str,
        population: &Population,
        catalog: &Catalog,
    ) -> Result<Self, ErrorKind> {
        if input.is_empty() {
            return Err(err::ParseError::Empty.into());
        }

        let form = match names::split_form(input) {
            Some(form) if names::is_sentence_form(input) => form,
            _ => return Err(err::ParseError::Sentence(input.to_string()).into()),
        };

        let cardinality = match form.arguments.len() {
            0 => Cardinality::None,
            1 => Cardinality::One,
            _ => Cardinality::Two,
        };

        let found = if form.reflexive {
            db::find_predicate(catalog, form.name, cardinality, true)
        } else {
            db::find_predicate(catalog, form.name, cardinality, false).or_else(|| match cardinality {
                Cardinality::Two => db::find_predicate(catalog, form.name, cardinality, true),
                _ => None,
            })
        };

        let Some(predicate) = found else {
            return Err(err::ParseError::UnknownPredicate(form.name.to_string()).into());
        };

        let mut individuals = Vec::with_capacity(form.arguments.len());
        for argument in &form.arguments {
            let individual = Individual::new(*argument)?;
            if !population.exists(&individual) {
                return Err(err::ParseError::UnknownIndividual(argument.to_string()).into());
            }
            individuals.push(individual);
        }

        Ok(Sentence::new(predicate.clone(), individuals)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        let a = Predicate::build("A").unwrap();
        assert_eq!(a.cardinality(), Cardinality::None);

        let b = Predicate::build("B[z]").unwrap();
        assert_eq!(b.cardinality(), Cardinality::One);
        assert_eq!(b.first_variable(), Some('z'));

        let c = Predicate::build("~C[z,w]").unwrap();
        assert_eq!(c.cardinality(), Cardinality::Two);
        assert!(c.is_reflexive());
        assert_eq!(c.to_string(), "~C[z,w]");

        assert!(!Predicate::build("~C[z]").unwrap().is_reflexive());
    }

    #[test]
    fn malformed_predicates() {
        assert_eq!(Predicate::build(""), Err(err::ParseError::Empty.into()));
        assert_eq!(
            Predicate::build("A[goku]"),
            Err(err::ParseError::Predicate("A[goku]".to_string()).into())
        );
        assert!(matches!(
            Predicate::build("A1[x]"),
            Err(ErrorKind::Build(err::BuildError::InvalidName(_)))
        ));
        assert_eq!(
            Predicate::build("A[x,x]"),
            Err(err::BuildError::RepeatedVariable('x').into())
        );
    }

    #[test]
    fn sentences_by_name() {
        assert_eq!(
            Sentence::build("", None, None, false).unwrap_err(),
            err::BuildError::InvalidName(String::new())
        );

        let sentence = Sentence::build("Rivals", Some("vegeta"), Some("goku"), true).unwrap();
        assert!(sentence.predicate().is_reflexive());
        assert_eq!(sentence.to_string(), "~Rivals[goku,vegeta]");

        let sentence = Sentence::build("Saiyan", Some("goku"), None, true).unwrap();
        assert!(!sentence.predicate().is_reflexive());
    }

    fn model() -> (Population, Catalog) {
        let population = ["goku", "vegeta"]
            .into_iter()
            .map(|name| Individual::new(name).unwrap())
            .collect::<Population>();

        let catalog = ["Moon", "Saiyan[x]", "~Rivals[x,y]", "Trains[x,y]"]
            .into_iter()
            .map(|form| Predicate::build(form).unwrap())
            .collect::<Catalog>();

        (population, catalog)
    }

    #[test]
    fn strict_sentences() {
        let (population, catalog) = model();

        let moon = Sentence::build_strict("Moon", &population, &catalog).unwrap();
        assert_eq!(moon.predicate().cardinality(), Cardinality::None);

        let rivals = Sentence::build_strict("Rivals[vegeta,goku]", &population, &catalog).unwrap();
        assert!(rivals.predicate().is_reflexive());

        let trains = Sentence::build_strict("Trains[vegeta,goku]", &population, &catalog).unwrap();
        assert!(!trains.predicate().is_reflexive());
        assert_eq!(trains.to_string(), "Trains[vegeta,goku]");

        // Canonical forms read back to the same sentence.
        let read = Sentence::build_strict(&rivals.to_string(), &population, &catalog).unwrap();
        assert_eq!(rivals.to_string(), "~Rivals[goku,vegeta]");
        assert_eq!(read, rivals);
    }

    #[test]
    fn both_reflexivities_in_the_catalog() {
        let (population, mut catalog) = model();
        assert!(catalog.add(Predicate::build("Rivals[x,y]").unwrap()));
        assert_eq!(catalog.len(), 5);

        let plain = Sentence::build_strict("Rivals[vegeta,goku]", &population, &catalog).unwrap();
        assert!(!plain.predicate().is_reflexive());

        let reflexive = Sentence::build_strict("~Rivals[vegeta,goku]", &population, &catalog).unwrap();
        assert!(reflexive.predicate().is_reflexive());

        assert_ne!(plain, reflexive);
    }

    #[test]
    fn strict_sentences_outside_the_model() {
        let (population, catalog) = model();

        assert_eq!(
            Sentence::build_strict("Saiyan[gohan]", &population, &catalog),
            Err(err::ParseError::UnknownIndividual("gohan".to_string()).into())
        );
        assert_eq!(
            Sentence::build_strict("Saiyan", &population, &catalog),
            Err(err::ParseError::UnknownPredicate("Saiyan".to_string()).into())
        );
        assert_eq!(
            Sentence::build_strict("Moon[goku]", &population, &catalog),
            Err(err::ParseError::UnknownPredicate("Moon".to_string()).into())
        );
        assert_eq!(
            Sentence::build_strict("~Trains[goku,vegeta]", &population, &catalog),
            Err(err::ParseError::UnknownPredicate("Trains".to_string()).into())
        );
        assert_eq!(
            Sentence::build_strict("~Saiyan[goku]", &population, &catalog),
            Err(err::ParseError::Sentence("~Saiyan[goku]".to_string()).into())
        );
        assert_eq!(
            Sentence::build_strict("Rivals[goku,goku]", &population, &catalog),
            Err(err::BuildError::RepeatedIndividual("goku".to_string()).into())
        );
    }
}
