/*!
Implication rules and rule bases.

# Rules

An implication rule is written `premise → conclusion`, where the premise is any [expression](crate::structures::expression) and the conclusion is a [literal](crate::structures::literal).
The string a rule was read from is kept as the source of the rule, and is used when noting the rule in a trace.

```rust
# use otter_chain::structures::rule::Rule;
# use otter_chain::structures::literal::Literal;
let rule: Rule = "C ∧ F → ¬G".parse().unwrap();

assert_eq!(rule.premise().to_string(), "C ∧ F");
assert_eq!(rule.conclusion(), &Literal::new("G", false));
assert_eq!(rule.source(), "C ∧ F → ¬G");

assert!("C → F → G".parse::<Rule>().is_err());
assert!("C ∧ F → G ∨ H".parse::<Rule>().is_err());
```

# Rule bases

A rule base is the input to a solve, and is typically read from JSON:

```json
{
    "logical_statements": ["A. It rains.", "B. The ground is wet."],
    "rule_representation": ["A", "A → B"],
    "answer_logical_statement": "B"
}
```

- The logical statements describe the atoms, and are used only when presenting a result.
- The rule representation is a list of axioms (literals) and implication rules.
- The answer logical statement is the literal whose truth is of interest.
*/

use std::io::Read;

use crate::{
    parse::expression::{parse_expression, parse_literal},
    structures::{expression::Expression, literal::Literal, token::IMPLIES},
    types::err::{self, ErrorKind},
};

/// A premise expression paired with a concluding literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    premise: Expression,
    conclusion: Literal,
    source: String,
}

impl Rule {
    pub fn premise(&self) -> &Expression {
        &self.premise
    }

    pub fn conclusion(&self) -> &Literal {
        &self.conclusion
    }

    /// The string the rule was read from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::str::FromStr for Rule {
    type Err = ErrorKind;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let mut parts = string.split(IMPLIES);

        let (Some(premise), Some(conclusion)) = (parts.next(), parts.next()) else {
            return Err(err::RuleFormatError::NoImplication.into());
        };

        let surplus = parts.count();
        if surplus > 0 {
            return Err(err::RuleFormatError::MultipleImplications(surplus + 1).into());
        }

        Ok(Rule {
            premise: parse_expression(premise.trim())?,
            conclusion: parse_literal(conclusion.trim())?,
            source: string.to_string(),
        })
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {IMPLIES} {}", self.premise, self.conclusion)
    }
}

/// Whether some string of a rule representation is an implication rule, rather than an axiom.
pub fn is_implication(rule: &str) -> bool {
    rule.contains(IMPLIES)
}

/// The input to a solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuleBase {
    /// Descriptions of the atoms, in order of their (alphabetical) labels.
    #[serde(default)]
    pub logical_statements: Vec<String>,

    /// Axioms and implication rules.
    #[serde(default)]
    pub rule_representation: Vec<String>,

    /// The literal whose truth is of interest.
    #[serde(default)]
    pub answer_logical_statement: String,
}

impl RuleBase {
    /// Reads a rule base written in JSON.
    pub fn from_json(reader: impl Read) -> Result<Self, err::InputError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(string: &str) -> Result<Self, err::InputError> {
        Ok(serde_json::from_str(string)?)
    }

    /// Each logical statement paired with a label, in order.
    ///
    /// The label of a statement is given by position, with the first statement labelled `A`, the second `B`, and so on.
    /// If a statement begins with some label followed by `. ` the prefix is removed.
    ///
    /// ```rust
    /// # use otter_chain::structures::rule::RuleBase;
    /// let rule_base = RuleBase {
    ///     logical_statements: vec!["A. It rains.".to_string(), "The ground is wet.".to_string()],
    ///     ..Default::default()
    /// };
    ///
    /// let labelled = rule_base.labelled_statements();
    /// assert_eq!(labelled[0], ("A".to_string(), "It rains."));
    /// assert_eq!(labelled[1], ("B".to_string(), "The ground is wet."));
    /// ```
    pub fn labelled_statements(&self) -> Vec<(String, &str)> {
        self.logical_statements
            .iter()
            .enumerate()
            .map(|(index, statement)| (statement_label(index), strip_label(statement)))
            .collect()
    }

    /// The description of the statement with the given label, if any.
    pub fn statement(&self, label: &str) -> Option<&str> {
        self.labelled_statements()
            .into_iter()
            .find(|(statement_label, _)| statement_label == label)
            .map(|(_, statement)| statement)
    }
}

/// The label of the statement at some index: `A` … `Z`, then `AA`, `AB`, and so on.
fn statement_label(index: usize) -> String {
    let mut label = Vec::default();
    let mut index = index + 1;

    while index > 0 {
        index -= 1;
        label.push((b'A' + (index % 26) as u8) as char);
        index /= 26;
    }

    label.iter().rev().collect()
}

/// A statement without a leading alphanumeric label and `. `, if present.
fn strip_label(statement: &str) -> &str {
    match statement.split_once(". ") {
        Some((label, rest))
            if !label.is_empty() && label.chars().all(|c| c.is_alphanumeric()) =>
        {
            rest
        }
        _ => statement,
    }
}
