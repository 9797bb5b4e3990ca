use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of every round of modus ponens, across all calls.
    pub rounds: usize,

    /// A count of every inference from a single rule.
    pub rule_inferences: usize,

    /// A count of every complete binding visited during inference.
    pub bindings_visited: usize,

    /// The time taken during reasoning.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            rounds: 0,
            rule_inferences: 0,
            bindings_visited: 0,

            time: Duration::from_secs(0),
        }
    }
}
