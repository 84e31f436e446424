use std::time::Duration;

/// Counts for various things which count.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of passes through the implication rules.
    pub passes: usize,

    /// A count of facts set by a rule.
    pub derivations: usize,

    /// A count of contradictions noted, from axioms or rules.
    pub contradictions: usize,

    /// A count of axioms and rules which could not be read.
    pub skipped: usize,

    /// The time taken during forward chaining.
    pub time: Duration,
}
