/*!
Checks an answer literal against the facts of a context.

The answer holds only if the atom of the literal has the polarity of the literal as its value.
So, an answer whose atom has no value and an answer whose atom has the opposite value are both false, and are distinguished only by the facts and trace.

An answer which is not a literal is undefined.

```rust
# use otter_chain::context::Context;
# use otter_chain::reports::Report;
let mut the_context = Context::default();
the_context.read_axioms(["¬A"]);

assert_eq!(the_context.answer("¬A"), Report::True);
assert_eq!(the_context.answer("A"), Report::False);
assert_eq!(the_context.answer("B"), Report::False);
assert_eq!(the_context.answer("¬B"), Report::False);
assert_eq!(the_context.answer("A ∨ B"), Report::Undefined);

assert_eq!(
    the_context.trace().last().unwrap().to_string(),
    "Error parsing answer logical statement 'A ∨ B': Conclusion must be a literal (atom or its negation)"
);
```
*/

use crate::{
    context::Context,
    misc::log::targets,
    parse::expression::parse_literal,
    reports::Report,
    structures::{facts::Valuation, step::Step},
};

impl Context {
    /// A report on the answer, noting the error in the trace if the answer could not be read.
    pub fn answer(&mut self, answer: &str) -> Report {
        let answer = answer.trim();

        match parse_literal(answer) {
            Ok(literal) => {
                let report = match self.facts.satisfies(&literal) {
                    true => Report::True,
                    false => Report::False,
                };
                log::info!(target: targets::ANSWER, "{literal}: {report}");
                report
            }

            Err(error) => {
                log::info!(target: targets::ANSWER, "Invalid answer '{answer}': {error}");
                self.note(Step::InvalidAnswer {
                    answer: answer.to_string(),
                    error,
                });
                Report::Undefined
            }
        }
    }

    /// A report on the answer, without revision to the trace.
    pub fn report_on(&self, answer: &str) -> Report {
        match parse_literal(answer.trim()) {
            Ok(literal) if self.facts.satisfies(&literal) => Report::True,
            Ok(_) => Report::False,
            Err(_) => Report::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer() {
        let mut the_context = Context::default();
        assert_eq!(the_context.answer("  "), Report::Undefined);
        assert_eq!(
            the_context.trace()[0].to_string(),
            "Error parsing answer logical statement '': Unexpected end of tokens in atom parsing"
        );
    }

    #[test]
    fn report_on_leaves_trace() {
        let mut the_context = Context::default();
        the_context.read_axiom("p");

        assert_eq!(the_context.report_on(" p "), Report::True);
        assert_eq!(the_context.report_on("p ∧"), Report::Undefined);
        assert_eq!(the_context.trace().len(), 1);
    }
}
