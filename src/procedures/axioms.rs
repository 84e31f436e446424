/*!
Reads axioms to a context.

An axiom is a literal, asserted outright.
On reading an axiom, the value of its atom is set to the polarity of the literal, unless the atom already has a value.

- If the atom had no value, the axiom is noted in the trace.
- If the atom had the same value, nothing is noted (unless [trace_duplicates](crate::config::Config::trace_duplicates) is set).
- If the atom had the opposite value, a contradiction is noted and the existing value is kept.
- If the axiom is not a literal, or cannot be parsed, the axiom is noted as skipped.

Blank axioms are ignored.

```rust
# use otter_chain::context::Context;
let mut the_context = Context::default();

the_context.read_axioms(["A", "¬B", "", "A ∧", "A → B"]);

let trace = the_context.trace().iter().map(|step| step.to_string()).collect::<Vec<_>>();
assert_eq!(
    trace,
    vec![
        "A = True",
        "B = False",
        "Skipping axiom 'A ∧': Unexpected end of tokens in atom parsing",
    ]
);
```
*/

use crate::{
    context::Context,
    misc::log::targets,
    parse::expression::parse_literal,
    structures::{
        facts::FactStatus,
        rule::is_implication,
        step::{Origin, Step},
    },
};

impl Context {
    /// Reads a single axiom.
    pub fn read_axiom(&mut self, axiom: &str) {
        let axiom = axiom.trim();
        if axiom.is_empty() {
            return;
        }

        let literal = match parse_literal(axiom) {
            Ok(literal) => literal,
            Err(error) => {
                log::info!(target: targets::AXIOMS, "Skipping '{axiom}': {error}");
                self.counters.skipped += 1;
                self.note(Step::SkippedAxiom {
                    axiom: axiom.to_string(),
                    error,
                });
                return;
            }
        };

        match self.facts.set(&literal) {
            FactStatus::NotSet => self.note(Step::Axiom(literal)),

            FactStatus::Match => {
                log::trace!(target: targets::AXIOMS, "Repeated: {literal}");
                if self.config.trace_duplicates.value {
                    self.note(Step::RepeatedAxiom(literal));
                }
            }

            FactStatus::Conflict(existing) => {
                self.counters.contradictions += 1;
                self.note(Step::Contradiction {
                    origin: Origin::Axiom,
                    source: axiom.to_string(),
                    suggested: literal,
                    existing,
                })
            }
        }
    }

    /// Reads each axiom from some rule representation, in order.
    ///
    /// Any implication rule in the representation is passed over.
    pub fn read_axioms<'r>(&mut self, rules: impl IntoIterator<Item = &'r str>) {
        for rule in rules.into_iter().filter(|rule| !is_implication(rule)) {
            self.read_axiom(rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context};

    fn trace(context: &Context) -> Vec<String> {
        context.trace().iter().map(|step| step.to_string()).collect()
    }

    #[test]
    fn first_axiom_stands() {
        let mut the_context = Context::default();
        the_context.read_axioms(["A", "¬A"]);

        assert_eq!(the_context.facts.value_of("A"), Some(true));
        assert_eq!(
            trace(&the_context),
            vec![
                "A = True",
                "Contradiction detected for A: existing value True, axiom '¬A' suggests False",
            ]
        );
    }

    #[test]
    fn duplicates() {
        let mut the_context = Context::default();
        the_context.read_axioms(["A", " A "]);
        assert_eq!(trace(&the_context), vec!["A = True"]);

        let mut config = Config::default();
        config.trace_duplicates.value = true;
        let mut the_context = Context::from_config(config);
        the_context.read_axioms(["A", " A "]);
        assert_eq!(trace(&the_context), vec!["A = True", "A already True"]);
    }

    #[test]
    fn deep_axioms_are_skipped() {
        let negations = format!("{}A", "¬".repeat(10_000));
        let parentheses = format!("{}A{}", "(".repeat(200_000), ")".repeat(200_000));

        let mut the_context = Context::default();
        the_context.read_axioms([negations.as_str(), parentheses.as_str(), "B"]);

        assert_eq!(the_context.counters.skipped, 2);
        assert_eq!(the_context.facts.value_of("A"), None);
        assert_eq!(the_context.facts.value_of("B"), Some(true));

        let skipped = trace(&the_context);
        assert!(skipped[0].ends_with(": Expression nested deeper than 256"));
        assert!(skipped[1].starts_with("Skipping axiom '((("));
        assert_eq!(skipped[2], "B = True");
    }

    #[test]
    fn compound_axiom_is_skipped() {
        let mut the_context = Context::default();
        the_context.read_axiom("A ∧ B");

        assert!(the_context.facts.is_empty());
        assert_eq!(the_context.counters.skipped, 1);
        assert_eq!(
            trace(&the_context),
            vec!["Skipping axiom 'A ∧ B': Conclusion must be a literal (atom or its negation)"]
        );
    }
}
