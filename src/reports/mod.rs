/*!
Reports from a context.

- A [Report] is the verdict on some answer literal.
- A [SolveResult] gathers the facts, trace, and verdict of a solve, and is serialised as:

```json
{
  "result": "'G' is True.",
  "facts": { "A": true, "G": true },
  "steps": ["A = True", "'A → G' so G = True", "End."],
  "is_answer_true": true
}
```

With `is_answer_true` null if the answer could not be read.
*/

use crate::structures::{facts::FactSet, rule::RuleBase, step::Step};

/// A verdict on an answer literal.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The atom of the answer has the polarity of the answer as its value.
    True,

    /// The atom of the answer has no value, or has the opposite value.
    False,

    /// The answer is not a literal, or could not be parsed.
    Undefined,
}

impl Report {
    /// The result of a solve on the given answer, as a sentence.
    pub fn describe(&self, answer: &str) -> String {
        match self {
            Self::True => format!("'{answer}' is True."),
            Self::False => format!("'{answer}' is False."),
            Self::Undefined => "Invalid answer logical statement.".to_string(),
        }
    }
}

impl From<Report> for Option<bool> {
    fn from(value: Report) -> Self {
        match value {
            Report::True => Some(true),
            Report::False => Some(false),
            Report::Undefined => None,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Undefined => write!(f, "Undefined"),
        }
    }
}

/// The result of a solve.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SolveResult {
    /// The verdict on the answer, as a sentence.
    pub result: String,

    /// The facts set by axioms or derived by rules.
    pub facts: FactSet,

    /// The trace of the solve.
    pub steps: Vec<Step>,

    /// The verdict on the answer, if the answer could be read.
    pub is_answer_true: Option<bool>,
}

impl SolveResult {
    /// A conclusion on the statement described by the answer of a rule base.
    ///
    /// Available only if the answer is the (alphabetical) label of some logical statement of the rule base, e.g. `G` or `¬G`.
    /// The verdict is on the statement, so a true answer of `¬G` concludes the statement labelled `G` is false.
    ///
    /// ```rust
    /// # use otter_chain::structures::rule::RuleBase;
    /// # use otter_chain::procedures::solve::solve_rule_base;
    /// let rule_base = RuleBase {
    ///     logical_statements: vec!["A. It rains.".to_string(), "B. The ground is wet.".to_string()],
    ///     rule_representation: vec!["A".to_string(), "A → B".to_string()],
    ///     answer_logical_statement: "B".to_string(),
    /// };
    ///
    /// let result = solve_rule_base(&rule_base);
    /// assert_eq!(
    ///     result.conclusion(&rule_base),
    ///     Some("The statement 'The ground is wet.' is True.".to_string())
    /// );
    /// ```
    pub fn conclusion(&self, rule_base: &RuleBase) -> Option<String> {
        let verdict = self.is_answer_true?;

        let answer = rule_base.answer_logical_statement.trim();
        let (label, negated) = match answer.strip_prefix(crate::structures::token::NOT) {
            Some(label) => (label.trim(), true),
            None => (answer, false),
        };
        let statement = rule_base.statement(label)?;

        let verdict = crate::structures::step::truth(verdict != negated);
        Some(format!("The statement '{statement}' is {verdict}."))
    }
}
