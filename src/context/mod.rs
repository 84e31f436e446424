/*!
The context, to which axioms and rules are added and within which a solve takes place.

A context holds everything particular to a solve: the configuration, the facts derived, the rules read, and the trace.
Nothing is shared between contexts, and so independent rule bases may be solved in independent contexts without coordination.

Axioms and rules are [read](crate::procedures::axioms) as strings, [forward chaining](crate::procedures::chain) is applied, and then some literal may be [checked](crate::procedures::answer) against the facts derived.
Or, a rule base may be [solved](crate::procedures::solve) in one go.

# Example
```rust
# use otter_chain::context::Context;
# use otter_chain::config::Config;
# use otter_chain::reports::Report;
let mut the_context = Context::from_config(Config::default());

the_context.read_axiom("p");
the_context.read_rule("p ∧ ¬q → r");
the_context.read_rule("r → ¬p");

the_context.chain();

assert_eq!(the_context.facts.value_of("r"), Some(true));
assert_eq!(the_context.facts.value_of("p"), Some(true));
assert_eq!(the_context.counters.contradictions, 2);
assert_eq!(the_context.answer("r"), Report::True);

let trace = the_context
    .trace()
    .iter()
    .map(|step| step.to_string())
    .collect::<Vec<_>>();

assert_eq!(
    trace,
    vec![
        "p = True",
        "'p ∧ ¬q → r' so r = True",
        "Contradiction detected for p: existing value True, rule 'r → ¬p' suggests False",
        "Contradiction detected for p: existing value True, rule 'r → ¬p' suggests False",
        "End.",
    ]
);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    misc::log::targets,
    structures::{
        facts::FactSet,
        rule::Rule,
        step::{Origin, Step},
    },
};

use callbacks::{CallbackStep, CallbackTerminate};

/// A context for a solve.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The facts of the context, set by axioms or derived from rules.
    pub facts: FactSet,

    /// The implication rules which have been read.
    pub(crate) rules: Vec<Rule>,

    /// The trace of the context, with steps in the order they were taken.
    pub(crate) trace: Vec<Step>,

    /// Called on each step noted in the trace.
    pub(super) callback_step: Option<Box<CallbackStep>>,

    /// Terminates forward chaining, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            facts: FactSet::default(),
            rules: Vec::default(),
            trace: Vec::default(),

            callback_step: None,
            callback_terminate: None,
        }
    }

    /// The implication rules which have been read, in the order they were read.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The trace of the context.
    pub fn trace(&self) -> &[Step] {
        &self.trace
    }

    /// Adds a step to the trace.
    pub(crate) fn note(&mut self, step: Step) {
        log::debug!(target: log_target(&step), "{step}");

        if let Some(callback) = &mut self.callback_step {
            callback(&step);
        }

        self.trace.push(step);
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}

/// The target to log a step under, by the procedure which notes the step.
fn log_target(step: &Step) -> &'static str {
    match step {
        Step::Axiom(_) | Step::RepeatedAxiom(_) | Step::SkippedAxiom { .. } => targets::AXIOMS,

        Step::Contradiction {
            origin: Origin::Axiom,
            ..
        } => targets::AXIOMS,

        Step::InvalidRuleFormat { .. } | Step::InvalidRule { .. } => targets::RULES,

        Step::InvalidAnswer { .. } => targets::ANSWER,

        Step::Derived { .. }
        | Step::Contradiction { .. }
        | Step::End
        | Step::PassLimit
        | Step::TimeLimit
        | Step::Terminated => targets::CHAIN,
    }
}
