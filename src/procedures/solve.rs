/*!
Solves a rule base.

A solve is made in four phases, each recorded in the trace of the context:
1. [Axioms](crate::procedures::axioms) are read, in order, from the rule representation.
2. [Implication rules](crate::procedures::rules) are read, in order, from the rule representation.
3. Rules are applied by [forward chaining](crate::procedures::chain) until a fixed point (or limit) is reached.
4. The [answer](crate::procedures::answer) is checked against the facts reached.

As axioms are read before any rule, the position of an axiom within the rule representation has no effect on a solve, other than relative to other axioms.

An axiom or rule which cannot be read is noted and skipped, and an answer which cannot be read gives an undefined verdict.
So, a solve always returns a result.

# Example

```rust
# use otter_chain::structures::rule::RuleBase;
# use otter_chain::procedures::solve::solve_rule_base;
let rule_base = RuleBase {
    rule_representation: vec!["A → B".to_string()],
    answer_logical_statement: "B".to_string(),
    ..Default::default()
};

let result = solve_rule_base(&rule_base);

assert_eq!(result.is_answer_true, Some(false));
assert_eq!(result.result, "'B' is False.");
assert!(result.facts.is_empty());
```
*/

use crate::{
    config::Config,
    context::Context,
    reports::SolveResult,
    structures::rule::RuleBase,
};

impl Context {
    /// Solves a rule base, consuming the context.
    ///
    /// Any axioms or rules read to the context prior to the solve are kept.
    pub fn solve(mut self, rule_base: &RuleBase) -> SolveResult {
        let rules = rule_base.rule_representation.iter().map(String::as_str);

        self.read_axioms(rules.clone());
        self.read_rules(rules);
        self.chain();

        let answer = rule_base.answer_logical_statement.trim();
        let report = self.answer(answer);

        SolveResult {
            result: report.describe(answer),
            facts: self.facts,
            steps: self.trace,
            is_answer_true: report.into(),
        }
    }
}

/// Solves a rule base in a fresh context, with the default configuration.
pub fn solve_rule_base(rule_base: &RuleBase) -> SolveResult {
    solve_rule_base_with(rule_base, Config::default())
}

/// Solves a rule base in a fresh context, with the given configuration.
pub fn solve_rule_base_with(rule_base: &RuleBase, config: Config) -> SolveResult {
    Context::from_config(config).solve(rule_base)
}
