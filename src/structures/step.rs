/*!
Steps, the entries of the trace of a solve.

Each step is displayed as a line of text, and a trace is serialised as a list of these lines.
Truth values are written `True` and `False`.

| Step              | Display                                                                                   |
|-------------------|-------------------------------------------------------------------------------------------|
| Axiom             | `{atom} = {value}`                                                                        |
| RepeatedAxiom     | `{atom} already {value}`                                                                  |
| SkippedAxiom      | `Skipping axiom '{axiom}': {error}`                                                       |
| InvalidRuleFormat | `Invalid rule format (should have one '→'): {rule}`                                       |
| InvalidRule       | `Error parsing rule '{rule}': {error}`                                                    |
| Derived           | `'{rule}' so {atom} = {value}`                                                            |
| Contradiction     | `Contradiction detected for {atom}: existing value {value}, rule '{rule}' suggests {value}` |
| InvalidAnswer     | `Error parsing answer logical statement '{answer}': {error}`                              |
| End               | `End.`                                                                                    |
| PassLimit         | `Pass limit reached.`                                                                     |
| TimeLimit         | `Time limit reached.`                                                                     |
| Terminated        | `Terminated.`                                                                             |

A contradiction with an axiom is written with `axiom` in place of `rule`.
*/

use crate::{
    structures::{literal::Literal, token::IMPLIES},
    types::err::ErrorKind,
};

/// Whether a contradiction was found when reading an axiom or when applying a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Axiom,
    Rule,
}

/// An entry of a trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// An axiom was read, and set the value of an atom.
    Axiom(Literal),

    /// An axiom restated the value of an atom.
    /// Noted only if [trace_duplicates](crate::config::Config::trace_duplicates) is set.
    RepeatedAxiom(Literal),

    /// An axiom could not be read, and was skipped.
    SkippedAxiom { axiom: String, error: ErrorKind },

    /// A rule contains more than one implication glyph, and was skipped.
    InvalidRuleFormat { rule: String },

    /// A rule could not be read, and was skipped.
    InvalidRule { rule: String, error: ErrorKind },

    /// The premise of a rule held, and the conclusion set the value of an atom.
    Derived { rule: String, conclusion: Literal },

    /// An axiom or rule required the opposite of the existing value of an atom.
    Contradiction {
        origin: Origin,
        source: String,
        suggested: Literal,
        existing: bool,
    },

    /// The answer could not be read.
    InvalidAnswer { answer: String, error: ErrorKind },

    /// A fixed point was reached.
    End,

    /// The solve stopped after the configured number of passes.
    PassLimit,

    /// The solve stopped after the configured time.
    TimeLimit,

    /// The solve was stopped by a [callback](crate::context::callbacks).
    Terminated,
}

/// A truth value, as written in a trace.
pub fn truth(value: bool) -> &'static str {
    match value {
        true => "True",
        false => "False",
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Axiom(literal) => {
                write!(f, "{} = {}", literal.atom(), truth(literal.polarity()))
            }

            Self::RepeatedAxiom(literal) => {
                write!(f, "{} already {}", literal.atom(), truth(literal.polarity()))
            }

            Self::SkippedAxiom { axiom, error } => write!(f, "Skipping axiom '{axiom}': {error}"),

            Self::InvalidRuleFormat { rule } => {
                write!(f, "Invalid rule format (should have one '{IMPLIES}'): {rule}")
            }

            Self::InvalidRule { rule, error } => write!(f, "Error parsing rule '{rule}': {error}"),

            Self::Derived { rule, conclusion } => write!(
                f,
                "'{rule}' so {} = {}",
                conclusion.atom(),
                truth(conclusion.polarity())
            ),

            Self::Contradiction {
                origin,
                source,
                suggested,
                existing,
            } => {
                let origin = match origin {
                    Origin::Axiom => "axiom",
                    Origin::Rule => "rule",
                };
                write!(
                    f,
                    "Contradiction detected for {}: existing value {}, {origin} '{source}' suggests {}",
                    suggested.atom(),
                    truth(*existing),
                    truth(suggested.polarity())
                )
            }

            Self::InvalidAnswer { answer, error } => {
                write!(f, "Error parsing answer logical statement '{answer}': {error}")
            }

            Self::End => write!(f, "End."),

            Self::PassLimit => write!(f, "Pass limit reached."),

            Self::TimeLimit => write!(f, "Time limit reached."),

            Self::Terminated => write!(f, "Terminated."),
        }
    }
}

impl serde::Serialize for Step {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::err::ParseError;

    #[test]
    fn display() {
        assert_eq!(Step::Axiom(Literal::new("A", true)).to_string(), "A = True");

        let derived = Step::Derived {
            rule: "A ∧ B → ¬C".to_string(),
            conclusion: Literal::new("C", false),
        };
        assert_eq!(derived.to_string(), "'A ∧ B → ¬C' so C = False");

        let contradiction = Step::Contradiction {
            origin: Origin::Rule,
            source: "A → ¬C".to_string(),
            suggested: Literal::new("C", false),
            existing: true,
        };
        assert_eq!(
            contradiction.to_string(),
            "Contradiction detected for C: existing value True, rule 'A → ¬C' suggests False"
        );

        let skipped = Step::SkippedAxiom {
            axiom: "A ∧".to_string(),
            error: ParseError::UnexpectedEnd.into(),
        };
        assert_eq!(
            skipped.to_string(),
            "Skipping axiom 'A ∧': Unexpected end of tokens in atom parsing"
        );
    }

    #[test]
    fn serialise_as_string() {
        let steps = vec![Step::Axiom(Literal::new("A", false)), Step::End];
        let json = serde_json::to_string(&steps).unwrap();
        assert_eq!(json, r#"["A = False","End."]"#);
    }
}
