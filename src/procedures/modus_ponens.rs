/*!
Forward chaining, by repeated application of modus ponens.

See [modus_ponens] for the procedure, or [Context::reason](crate::context::Context::reason) for the context method.

# Overview

Given some rules, a population, a truth table, and some sentences to add, the truth table is brought to a fixpoint of the rules.

1. Each sentence to add which is not already true is recorded as added, and added to the truth table.
2. In a round, each rule is inferred against the truth table, and each inference is merged into the [delta](Delta) of the procedure.
3. At the end of a round, the delta is [purged](Delta::purge), and applied to the truth table.
   Each added sentence not true is added, and each retracted sentence which is true is removed.
4. Rounds continue until a round leaves the count of the delta unchanged.

The truth table is only mutated at the end of a round, so each rule in a round is inferred against the same truth table.

# Inference

To infer a rule, the rule's premise is evaluated under each complete binding of its free variables to distinct individuals.
Or, if the premise has no free variables, the premise is evaluated once.

Under a binding which satisfies the premise, the conclusion of the rule is bound:
- A sentence which is not true is recorded as added.
- The negation of a sentence which is true is recorded as retracted.

Rules may only conclude a sentence or the negation of a sentence, and rules concluding anything else are rejected before any inference.

# Termination

Each round either grows the delta or ends the procedure, and the delta is bounded by the sentences which may be formed from the rules and the population.
So, the procedure terminates.
Though, a rule which retracts what another rule adds may leave a sentence on both sides of the delta, in which case addition is favoured.

# Example

```rust
# use finite_fol::db::{truth_table::TruthTable, Population, Rules};
# use finite_fol::procedures::modus_ponens::modus_ponens;
# use finite_fol::structures::{axiom::Axiom, formula::Formula, individual::Individual, predicate::Predicate, sentence::Sentence};
let population = ["goku"]
    .into_iter()
    .map(|name| Individual::new(name).unwrap())
    .collect::<Population>();

let saiyan = Predicate::unary("Saiyan", 'x').unwrap();
let human = Predicate::unary("Human", 'x').unwrap();

let rules = [Axiom::new(vec![saiyan.into()], Formula::not(human)).unwrap()]
    .into_iter()
    .collect::<Rules>();

let mut table = TruthTable::default()
    .with(Sentence::build("Human", Some("goku"), None, false).unwrap());

let goku_saiyan = Sentence::build("Saiyan", Some("goku"), None, false).unwrap();
let delta = modus_ponens(&rules, &population, &mut table, &[goku_saiyan.clone()]).unwrap();

assert!(delta.is_added(&goku_saiyan));
assert_eq!(delta.retracted().map(|s| s.to_string()).collect::<Vec<_>>(), vec!["Human[goku]"]);
assert_eq!(table.to_string(), "{Saiyan[goku]}");
```
*/

use std::time::Instant;

use crate::{
    context::Counters,
    db::{truth_table::TruthTable, Population, Rules},
    misc::log::targets::{self},
    procedures::enumerate::for_each_binding,
    reports::Delta,
    structures::{
        axiom::Axiom,
        binding::Binding,
        formula::{Formula, GroundFormula},
        sentence::Sentence,
    },
    types::err::{self, ErrorKind},
};

/// Brings the truth table to a fixpoint of the rules, after adding the given sentences, and returns the changes made.
///
/// Preconditions are checked before the truth table is touched, so a failed precondition leaves the truth table unchanged.
pub fn modus_ponens(
    rules: &Rules,
    population: &Population,
    table: &mut TruthTable,
    added: &[Sentence],
) -> Result<Delta, ErrorKind> {
    let mut counters = Counters::default();
    counted_modus_ponens(rules, population, table, added, &mut counters)
}

/// [modus_ponens], with a record of the work done kept in the given counters.
pub(crate) fn counted_modus_ponens(
    rules: &Rules,
    population: &Population,
    table: &mut TruthTable,
    added: &[Sentence],
    counters: &mut Counters,
) -> Result<Delta, ErrorKind> {
    check_preconditions(rules, population)?;

    let start = Instant::now();
    let mut delta = Delta::default();

    for sentence in added {
        if !table.exists(sentence) {
            delta.add(sentence.clone());
            table.add(sentence.clone());
        }
    }

    let mut last_count = None;

    while last_count.map_or(true, |last| delta.count() > last) {
        last_count = Some(delta.count());
        counters.rounds += 1;

        for rule in rules.elements() {
            let inference = infer(rule, population, table, counters)?;
            delta.merge(inference);
        }

        delta.purge();
        apply(&delta, table);

        log::debug!(target: targets::REASONER, "Round {}: {delta}", counters.rounds);
    }

    counters.time += start.elapsed();
    log::info!(target: targets::REASONER, "Fixpoint with {} changes", delta.count());

    Ok(delta)
}

/// The additions and retractions concluded by the rule against the truth table.
fn infer(
    rule: &Axiom,
    population: &Population,
    table: &TruthTable,
    counters: &mut Counters,
) -> Result<Delta, ErrorKind> {
    counters.rule_inferences += 1;

    let mut inference = Delta::default();
    let variables = rule.premise().free_variables();

    if variables.is_empty() {
        conclude(rule, &Binding::default(), table, &mut inference)?;
    } else {
        let visited = for_each_binding(&variables, population, |binding| {
            conclude(rule, binding, table, &mut inference)
        })?;
        counters.bindings_visited += visited;
    }

    Ok(inference)
}

/// Records the conclusion of the rule under the binding, if the binding satisfies the premise of the rule.
fn conclude(
    rule: &Axiom,
    binding: &Binding,
    table: &TruthTable,
    inference: &mut Delta,
) -> Result<(), ErrorKind> {
    if !rule.premise().bind(binding)?.evaluate(table) {
        return Ok(());
    }

    match rule.conclusion().bind(binding)? {
        GroundFormula::Sentence(sentence) => {
            if !table.exists(&sentence) {
                log::trace!(target: targets::REASONER, "{rule} under {binding} adds {sentence}");
                inference.add(sentence);
            }
        }

        GroundFormula::Not(operand) => match *operand {
            GroundFormula::Sentence(sentence) => {
                if table.exists(&sentence) {
                    log::trace!(target: targets::REASONER, "{rule} under {binding} retracts {sentence}");
                    inference.retract(sentence);
                }
            }
            other => {
                return Err(err::ReasonerError::UnsupportedConclusion(GroundFormula::not(other).to_string()).into())
            }
        },

        other => return Err(err::ReasonerError::UnsupportedConclusion(other.to_string()).into()),
    }

    Ok(())
}

/// Applies the (purged) delta to the truth table.
fn apply(delta: &Delta, table: &mut TruthTable) {
    for sentence in delta.added() {
        if !table.exists(sentence) {
            table.add(sentence.clone());
        }
    }

    for sentence in delta.retracted() {
        if table.exists(sentence) {
            table.remove(sentence);
        }
    }
}

fn check_preconditions(rules: &Rules, population: &Population) -> Result<(), err::ReasonerError> {
    if rules.is_empty() {
        return Err(err::ReasonerError::NoRules);
    }

    for rule in rules.elements() {
        if rule.variables().len() > population.len() {
            return Err(err::ReasonerError::InsufficientPopulation);
        }

        if !is_supported_conclusion(rule.conclusion()) {
            return Err(err::ReasonerError::UnsupportedConclusion(rule.conclusion().to_string()));
        }
    }

    Ok(())
}

/// Whether the conclusion is an atom or the negation of an atom.
pub fn is_supported_conclusion(conclusion: &Formula) -> bool {
    match conclusion {
        Formula::Atom(_) => true,
        Formula::Not(operand) => matches!(**operand, Formula::Atom(_)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::structures::{individual::Individual, predicate::Predicate};

    use super::*;

    #[test]
    fn supported_conclusions() {
        let a = Predicate::unary("A", 'x').unwrap();
        let b = Predicate::unary("B", 'x').unwrap();

        assert!(is_supported_conclusion(&Formula::from(a.clone())));
        assert!(is_supported_conclusion(&Formula::not(a.clone())));

        assert!(!is_supported_conclusion(&Formula::not(Formula::not(a.clone()))));
        assert!(!is_supported_conclusion(&Formula::and(a.clone(), b.clone())));
        assert!(!is_supported_conclusion(&Formula::not(Formula::or(a, b))));
    }

    #[test]
    fn counters_record_work() {
        let population = ["goku", "gohan", "vegeta"]
            .into_iter()
            .map(|name| Individual::new(name).unwrap())
            .collect::<Population>();

        let a = Predicate::unary("A", 'x').unwrap();
        let b = Predicate::unary("B", 'x').unwrap();
        let rules = [Axiom::new(vec![a.into()], b).unwrap()]
            .into_iter()
            .collect::<Rules>();

        let mut table = TruthTable::default();
        let mut counters = Counters::default();

        let goku = Sentence::build("A", Some("goku"), None, false).unwrap();
        let delta =
            counted_modus_ponens(&rules, &population, &mut table, &[goku], &mut counters).unwrap();

        assert_eq!(delta.count(), 2);
        // A round adding B[goku], then a round with nothing new.
        assert_eq!(counters.rounds, 2);
        assert_eq!(counters.rule_inferences, 2);
        assert_eq!(counters.bindings_visited, 6);
    }
}
