/*!
The context --- to which individuals, predicates, axioms, and sentences are added, and within which queries and reasoning take place.

A context holds a model (a population, a catalog of predicates, and a truth table) together with rules, a [configuration](crate::config), and [counters](Counters).

The [procedures](crate::procedures) are free functions over the databases of a model, and a context offers each procedure as a method.
In addition, a context guards what is added to the model:
- The population is bounded by the [population limit](crate::config::Config::population_limit).
- With [strict sentences](crate::config::Config::strict_sentences), only sentences of known predicates and individuals are asserted, and only axioms of known predicates are added.

# Example
```rust
# use finite_fol::config::Config;
# use finite_fol::context::Context;
# use finite_fol::structures::{axiom::Axiom, predicate::Predicate};
let mut the_context = Context::from_config(Config::default());

for name in ["goku", "chichi", "gohan"] {
    assert!(the_context.add_individual(name).is_ok());
}

let son = Predicate::build("Son[x,y]").unwrap();
let parent = Predicate::build("Parent[y]").unwrap();
the_context.add_predicate(son.clone());
the_context.add_predicate(parent.clone());

assert!(the_context.add_axiom(Axiom::new(vec![son.into()], parent).unwrap()).is_ok());

let fact = the_context.read_sentence("Son[gohan,goku]").unwrap();
let delta = the_context.reason(&[]).unwrap();

assert!(the_context.table().exists(&fact));
assert_eq!(delta.added().map(|s| s.to_string()).collect::<Vec<_>>(), vec!["Parent[goku]"]);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{self, truth_table::TruthTable, Catalog, Population, Rules},
    misc::log::targets::{self},
    procedures::{
        modus_ponens::{counted_modus_ponens, is_supported_conclusion},
        quantifiers,
    },
    reports::Delta,
    structures::{
        axiom::Axiom, formula::Formula, individual::Individual, predicate::Predicate,
        sentence::Sentence,
    },
    types::err::{self, ErrorKind},
};

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to reasoning within the context.
    pub counters: Counters,

    population: Population,

    catalog: Catalog,

    rules: Rules,

    table: TruthTable,
}

impl Context {
    /// A context with the given configuration and an empty model.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            population: Population::default(),
            catalog: Catalog::default(),
            rules: Rules::default(),
            table: TruthTable::default(),
        }
    }

    /// Adds an individual with the given name to the population, returning the individual.
    ///
    /// Adding an individual already in the population is harmless, even at the population limit.
    pub fn add_individual(&mut self, name: &str) -> Result<Individual, ErrorKind> {
        let individual = Individual::new(name)?;

        if self.population.exists(&individual) {
            return Ok(individual);
        }

        if self.population.len() >= self.config.population_limit.value {
            log::warn!(target: targets::CONTEXT, "Population limit reached, {individual} not added");
            return Err(err::ContextError::PopulationLimit.into());
        }

        log::trace!(target: targets::CONTEXT, "Individual {individual}");
        self.population.add(individual.clone());
        Ok(individual)
    }

    /// Adds a predicate to the catalog, returning whether the predicate (with its variables) was not already in the catalog.
    pub fn add_predicate(&mut self, predicate: Predicate) -> bool {
        log::trace!(target: targets::CONTEXT, "Predicate {predicate}");
        self.catalog.add(predicate)
    }

    /// Adds an axiom to the rules, returning whether the axiom was not already a rule.
    ///
    /// The conclusion of the axiom must be a sentence or the negation of a sentence.
    pub fn add_axiom(&mut self, axiom: Axiom) -> Result<bool, ErrorKind> {
        if !is_supported_conclusion(axiom.conclusion()) {
            return Err(err::ReasonerError::UnsupportedConclusion(axiom.conclusion().to_string()).into());
        }

        if self.config.strict_sentences.value {
            let premise_predicates = axiom.premises().iter().flat_map(Formula::predicates);
            for predicate in premise_predicates.chain(axiom.conclusion().predicates()) {
                self.check_predicate(predicate)?;
            }
        }

        log::trace!(target: targets::CONTEXT, "Axiom {axiom}");
        Ok(self.rules.add(axiom))
    }

    /// Asserts a sentence, returning whether the sentence was not already true.
    pub fn assert_sentence(&mut self, sentence: Sentence) -> Result<bool, ErrorKind> {
        if self.config.strict_sentences.value {
            self.check_sentence(&sentence)?;
        }

        Ok(self.table.add(sentence))
    }

    /// Asserts the sentence with the given textual form, returning the sentence.
    ///
    /// Regardless of configuration, the textual form is read [strictly](Sentence::build_strict).
    pub fn read_sentence(&mut self, input: &str) -> Result<Sentence, ErrorKind> {
        let sentence = Sentence::build_strict(input, &self.population, &self.catalog)?;
        self.table.add(sentence.clone());
        Ok(sentence)
    }

    /// Retracts a sentence, returning whether the sentence was true.
    pub fn retract_sentence(&mut self, sentence: &Sentence) -> bool {
        self.table.remove(sentence)
    }

    /// Removes a predicate from the catalog, together with every rule using the predicate and every sentence of the predicate, returning a count of the sentences removed.
    ///
    /// Predicates are compared by name, cardinality, and reflexivity, so each variant of the predicate in the catalog is removed.
    pub fn remove_predicate(&mut self, predicate: &Predicate) -> usize {
        self.catalog.retain(|known| known != predicate);

        let rules_before = self.rules.len();
        self.rules.retain(|rule| {
            let in_premises = rule
                .premises()
                .iter()
                .any(|premise| premise.predicates().contains(&predicate));
            !in_premises && !rule.conclusion().predicates().contains(&predicate)
        });

        let rules_removed = rules_before - self.rules.len();
        if rules_removed > 0 {
            log::info!(target: targets::CONTEXT, "Removed {rules_removed} rules using {predicate}");
        }

        self.table.remove_predicate(predicate)
    }

    /// Whether the body holds under some binding which satisfies the premise.
    ///
    /// See [quantifiers::existential].
    pub fn existential(&self, premise: &Formula, body: &Formula) -> Result<bool, ErrorKind> {
        quantifiers::existential(premise, body, &self.population, &self.table)
    }

    /// Whether the body holds under every binding which satisfies the premise, and some binding satisfies the premise.
    ///
    /// See [quantifiers::universal].
    pub fn universal(&self, premise: &Formula, body: &Formula) -> Result<bool, ErrorKind> {
        quantifiers::universal(premise, body, &self.population, &self.table)
    }

    /// Brings the truth table to a fixpoint of the rules, after adding the given sentences.
    ///
    /// See [modus_ponens](crate::procedures::modus_ponens) for details.
    pub fn reason(&mut self, added: &[Sentence]) -> Result<Delta, ErrorKind> {
        if self.config.strict_sentences.value {
            for sentence in added {
                self.check_sentence(sentence)?;
            }
        }

        counted_modus_ponens(
            &self.rules,
            &self.population,
            &mut self.table,
            added,
            &mut self.counters,
        )
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn table(&self) -> &TruthTable {
        &self.table
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}

impl Context {
    fn check_predicate(&self, predicate: &Predicate) -> Result<(), err::ContextError> {
        match db::find_predicate(
            &self.catalog,
            predicate.name(),
            predicate.cardinality(),
            predicate.is_reflexive(),
        ) {
            Some(_) => Ok(()),
            None => Err(err::ContextError::UnknownPredicate(predicate.to_string())),
        }
    }

    fn check_sentence(&self, sentence: &Sentence) -> Result<(), err::ContextError> {
        self.check_predicate(sentence.predicate())?;

        for individual in sentence.individuals() {
            if !self.population.exists(individual) {
                return Err(err::ContextError::UnknownIndividual(individual.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(individuals: &[&str], predicates: &[&str]) -> Context {
        let mut context = Context::default();
        for name in individuals {
            context.add_individual(name).unwrap();
        }
        for form in predicates {
            context.add_predicate(Predicate::build(form).unwrap());
        }
        context
    }

    #[test]
    fn population_limit() {
        let mut config = Config::default();
        config.population_limit.set(2).unwrap();
        let mut context = Context::from_config(config);

        assert!(context.add_individual("goku").is_ok());
        assert!(context.add_individual("gohan").is_ok());
        assert!(context.add_individual("goku").is_ok());
        assert_eq!(
            context.add_individual("vegeta"),
            Err(err::ContextError::PopulationLimit.into())
        );
        assert_eq!(context.population().len(), 2);
    }

    #[test]
    fn strict_assertions() {
        let mut context = context_with(&["goku"], &["Saiyan[x]"]);

        let goku_saiyan = Sentence::build("Saiyan", Some("goku"), None, false).unwrap();
        assert_eq!(context.assert_sentence(goku_saiyan.clone()), Ok(true));
        assert_eq!(context.assert_sentence(goku_saiyan), Ok(false));

        assert_eq!(
            context.assert_sentence(Sentence::build("Saiyan", Some("gohan"), None, false).unwrap()),
            Err(err::ContextError::UnknownIndividual("gohan".to_string()).into())
        );
        assert_eq!(
            context.assert_sentence(Sentence::build("Human", Some("goku"), None, false).unwrap()),
            Err(err::ContextError::UnknownPredicate("Human[x]".to_string()).into())
        );
    }

    #[test]
    fn lax_assertions() {
        let mut config = Config::default();
        config.strict_sentences.set(false).unwrap();
        let mut context = Context::from_config(config);

        let sentence = Sentence::build("Human", Some("bulma"), None, false).unwrap();
        assert_eq!(context.assert_sentence(sentence.clone()), Ok(true));
        assert!(context.table().exists(&sentence));
        assert!(context.retract_sentence(&sentence));
        assert!(!context.retract_sentence(&sentence));
    }

    #[test]
    fn axioms() {
        let mut context = context_with(&["goku"], &["Saiyan[x]", "Strong[x]"]);

        let saiyan = Predicate::build("Saiyan[x]").unwrap();
        let strong = Predicate::build("Strong[x]").unwrap();
        let human = Predicate::build("Human[x]").unwrap();

        let axiom = Axiom::new(vec![saiyan.clone().into()], strong.clone()).unwrap();
        assert_eq!(context.add_axiom(axiom.clone()), Ok(true));
        assert_eq!(context.add_axiom(axiom), Ok(false));

        assert_eq!(
            context.add_axiom(Axiom::new(vec![saiyan.clone().into()], human).unwrap()),
            Err(err::ContextError::UnknownPredicate("Human[x]".to_string()).into())
        );

        let compound = Formula::and(saiyan.clone(), strong);
        assert!(matches!(
            context.add_axiom(Axiom::new(vec![saiyan.into()], compound).unwrap()),
            Err(ErrorKind::Reasoner(err::ReasonerError::UnsupportedConclusion(_)))
        ));

        assert_eq!(context.rules().len(), 1);
    }

    #[test]
    fn remove_predicate() {
        let mut context = context_with(&["goku", "gohan"], &["Saiyan[x]", "Strong[x]"]);

        let saiyan = Predicate::build("Saiyan[x]").unwrap();
        let strong = Predicate::build("Strong[x]").unwrap();
        context
            .add_axiom(Axiom::new(vec![saiyan.clone().into()], strong).unwrap())
            .unwrap();

        context.read_sentence("Saiyan[goku]").unwrap();
        context.read_sentence("Saiyan[gohan]").unwrap();
        context.read_sentence("Strong[goku]").unwrap();

        assert_eq!(context.remove_predicate(&saiyan), 2);
        assert_eq!(context.catalog().len(), 1);
        assert!(context.rules().is_empty());
        assert_eq!(context.table().len(), 1);

        assert_eq!(
            context.read_sentence("Saiyan[goku]"),
            Err(err::ParseError::UnknownPredicate("Saiyan".to_string()).into())
        );
    }

    #[test]
    fn reasoning_is_counted() {
        let mut context = context_with(&["goku", "gohan"], &["Saiyan[x]", "Strong[x]"]);

        let saiyan = Predicate::build("Saiyan[x]").unwrap();
        let strong = Predicate::build("Strong[x]").unwrap();
        context
            .add_axiom(Axiom::new(vec![saiyan.into()], strong).unwrap())
            .unwrap();

        let goku = Sentence::build("Saiyan", Some("goku"), None, false).unwrap();
        let delta = context.reason(&[goku]).unwrap();
        assert_eq!(delta.count(), 2);
        assert_eq!(context.counters.rounds, 2);

        let delta = context.reason(&[]).unwrap();
        assert!(!delta.any());
        assert_eq!(context.counters.rounds, 3);

        assert_eq!(
            context.reason(&[Sentence::build("Saiyan", Some("bulma"), None, false).unwrap()]).map(|d| d.count()),
            Err(err::ContextError::UnknownIndividual("bulma".to_string()).into())
        );
    }
}
