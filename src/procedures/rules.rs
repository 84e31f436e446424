/*!
Reads implication rules to a context.

A rule is split on the implication glyph, with the premise parsed as an expression and the conclusion parsed as a literal.
A rule which cannot be read is noted in the trace and is not used during [forward chaining](crate::procedures::chain).

```rust
# use otter_chain::context::Context;
let mut the_context = Context::default();

the_context.read_rules(["A", "A → B", "A → B → C", "A ∧ → C", "A → B ∨ C"]);

assert_eq!(the_context.rules().len(), 1);

let trace = the_context.trace().iter().map(|step| step.to_string()).collect::<Vec<_>>();
assert_eq!(
    trace,
    vec![
        "Invalid rule format (should have one '→'): A → B → C",
        "Error parsing rule 'A ∧ → C': Unexpected end of tokens in atom parsing",
        "Error parsing rule 'A → B ∨ C': Conclusion must be a literal (atom or its negation)",
    ]
);
```
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        rule::{is_implication, Rule},
        step::Step,
    },
    types::err::ErrorKind,
};

impl Context {
    /// Reads a single implication rule.
    pub fn read_rule(&mut self, rule: &str) {
        match rule.parse::<Rule>() {
            Ok(the_rule) => {
                log::debug!(target: targets::RULES, "Read: {the_rule}");
                self.rules.push(the_rule);
            }

            Err(ErrorKind::RuleFormat(error)) => {
                log::info!(target: targets::RULES, "Skipping '{rule}': {error}");
                self.counters.skipped += 1;
                self.note(Step::InvalidRuleFormat {
                    rule: rule.to_string(),
                });
            }

            Err(error) => {
                log::info!(target: targets::RULES, "Skipping '{rule}': {error}");
                self.counters.skipped += 1;
                self.note(Step::InvalidRule {
                    rule: rule.to_string(),
                    error,
                });
            }
        }
    }

    /// Reads each implication rule from some rule representation, in order.
    ///
    /// Any axiom in the representation is passed over.
    pub fn read_rules<'r>(&mut self, rules: impl IntoIterator<Item = &'r str>) {
        for rule in rules.into_iter().filter(|rule| is_implication(rule)) {
            self.read_rule(rule);
        }
    }
}
