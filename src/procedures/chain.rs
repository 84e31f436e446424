/*!
Forward chaining, to a fixed point.

Forward chaining is a sequence of passes through the implication rules of a context, in the order the rules were read.
On each pass, and for each rule whose premise holds on the current facts:
- If the atom of the conclusion has no value, the value is set and the derivation is noted in the trace.
- If the atom of the conclusion has the value required, nothing happens.
- If the atom of the conclusion has the opposite value, a contradiction is noted and the existing value is kept.

Values set during a pass are used by rules later in the same pass.

If a pass sets no value a fixed point has been reached, `End.` is noted, and forward chaining stops.
As each pass which does not stop forward chaining sets the value of some atom, forward chaining stops after at most one more pass than the count of atoms in the conclusions of the rules.

Roughly, the loop is:

```none
          +-------------+
    +---->| apply_rules |-----+---> end, if no value was set
    |     +-------------+     |
    |                         |
    +-------------------------+
       if some value was set (and no limit is reached)
```

# Limits

Forward chaining is also stopped, before a pass, if:
- The count of passes has reached the [pass limit](crate::config::Config::pass_limit).
- The time spent has exceeded the [time limit](crate::config::Config::time_limit).
- The [terminate callback](crate::context::callbacks) returns true.

In each case a note is made in the trace in place of `End.`, and the facts are those derived so far.

# Example

```rust
# use otter_chain::context::Context;
# use otter_chain::procedures::chain;
let mut the_context = Context::default();

the_context.read_axioms(["A"]);
the_context.read_rules(["B → C", "A → B"]);

assert_eq!(the_context.chain(), chain::ChainOk::FixedPoint);
assert_eq!(the_context.counters.passes, 3);
assert_eq!(the_context.facts.as_display_string(), "A B C");
```
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        facts::FactStatus,
        rule::Rule,
        step::{Origin, Step},
    },
};

/// How forward chaining stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainOk {
    /// A pass set no value.
    FixedPoint,

    /// The pass limit was reached.
    PassLimit,

    /// The time limit was exceeded.
    TimeLimit,

    /// The terminate callback returned true.
    Terminated,
}

impl Context {
    /// Applies the implication rules of the context until a fixed point (or some limit) is reached.
    pub fn chain(&mut self) -> ChainOk {
        let start = std::time::Instant::now();

        // The rules are taken to allow facts and the trace to be revised while rules are read.
        let rules = std::mem::take(&mut self.rules);

        let mut passes = 0;
        let outcome = 'chain_loop: loop {
            if passes >= self.config.pass_limit.value {
                break 'chain_loop ChainOk::PassLimit;
            }

            if start.elapsed() > self.config.time_limit.value {
                break 'chain_loop ChainOk::TimeLimit;
            }

            if self.check_callback_terminate() {
                break 'chain_loop ChainOk::Terminated;
            }

            passes += 1;
            self.counters.passes += 1;
            log::trace!(target: targets::CHAIN, "Pass {passes}");

            if !self.apply_rules(&rules) {
                break 'chain_loop ChainOk::FixedPoint;
            }
        };

        self.rules = rules;
        self.counters.time += start.elapsed();

        log::info!(
            target: targets::CHAIN,
            "{outcome:?} after {passes} passes, with {} facts",
            self.facts.len()
        );

        match outcome {
            ChainOk::FixedPoint => self.note(Step::End),
            ChainOk::PassLimit => self.note(Step::PassLimit),
            ChainOk::TimeLimit => self.note(Step::TimeLimit),
            ChainOk::Terminated => self.note(Step::Terminated),
        }

        outcome
    }

    /// A single pass through the rules, returning true if some value was set.
    fn apply_rules(&mut self, rules: &[Rule]) -> bool {
        let mut fresh_facts = false;

        for rule in rules {
            if !rule.premise().evaluate(&self.facts) {
                continue;
            }

            match self.facts.set(rule.conclusion()) {
                FactStatus::NotSet => {
                    fresh_facts = true;
                    self.counters.derivations += 1;
                    self.note(Step::Derived {
                        rule: rule.source().to_string(),
                        conclusion: rule.conclusion().clone(),
                    });
                }

                FactStatus::Match => {}

                FactStatus::Conflict(existing) => {
                    self.counters.contradictions += 1;
                    self.note(Step::Contradiction {
                        origin: Origin::Rule,
                        source: rule.source().to_string(),
                        suggested: rule.conclusion().clone(),
                        existing,
                    });
                }
            }
        }

        fresh_facts
    }
}
