use otter_chain::{
    config::Config, context::Context, procedures::solve::solve_rule_base, reports::Report,
    structures::rule::RuleBase,
};

fn rule_base(rules: &[&str], answer: &str) -> RuleBase {
    RuleBase {
        logical_statements: Vec::default(),
        rule_representation: rules.iter().map(|rule| rule.to_string()).collect(),
        answer_logical_statement: answer.to_string(),
    }
}

fn steps(rules: &[&str], answer: &str) -> Vec<String> {
    solve_rule_base(&rule_base(rules, answer))
        .steps
        .iter()
        .map(|step| step.to_string())
        .collect()
}

mod basic {
    use super::*;

    #[test]
    fn one_axiom() {
        let result = solve_rule_base(&rule_base(&["p"], "p"));

        assert_eq!(result.is_answer_true, Some(true));
        assert_eq!(result.result, "'p' is True.");
        assert_eq!(steps(&["p"], "p"), vec!["p = True", "End."]);
    }

    #[test]
    fn fixed_point() {
        let result = solve_rule_base(&rule_base(&["A", "A → B", "B → C"], "C"));

        assert_eq!(result.facts.value_of("A"), Some(true));
        assert_eq!(result.facts.value_of("B"), Some(true));
        assert_eq!(result.facts.value_of("C"), Some(true));
        assert_eq!(result.facts.len(), 3);
        assert_eq!(result.is_answer_true, Some(true));
    }

    #[test]
    fn underived_answer() {
        let result = solve_rule_base(&rule_base(&["A → B"], "B"));

        assert_eq!(result.is_answer_true, Some(false));
        assert_eq!(result.result, "'B' is False.");
        assert!(result.facts.is_empty());
    }

    #[test]
    fn negative_answer() {
        let result = solve_rule_base(&rule_base(&["A", "A → ¬B"], "¬B"));
        assert_eq!(result.is_answer_true, Some(true));

        let result = solve_rule_base(&rule_base(&["A", "A → ¬B"], "B"));
        assert_eq!(result.is_answer_true, Some(false));
    }

    #[test]
    fn contradiction_is_not_fatal() {
        let result = solve_rule_base(&rule_base(&["A", "¬A"], "A"));

        assert_eq!(result.facts.value_of("A"), Some(true));
        assert_eq!(result.is_answer_true, Some(true));
        assert_eq!(
            steps(&["A", "¬A"], "A"),
            vec![
                "A = True",
                "Contradiction detected for A: existing value True, axiom '¬A' suggests False",
                "End.",
            ]
        );
    }

    #[test]
    fn malformed_rule_is_skipped() {
        let result = solve_rule_base(&rule_base(&["A", "A ∧", "A → B"], "B"));

        assert_eq!(result.is_answer_true, Some(true));
        assert_eq!(
            steps(&["A", "A ∧", "A → B"], "B"),
            vec![
                "A = True",
                "Skipping axiom 'A ∧': Unexpected end of tokens in atom parsing",
                "'A → B' so B = True",
                "End.",
            ]
        );

        let mut the_context = Context::from_config(Config::default());
        the_context.read_rules(["A ∧ → B"]);
        assert!(the_context.rules().is_empty());
    }

    #[test]
    fn disjunctive_premise() {
        let result = solve_rule_base(&rule_base(&["¬A", "B", "A ∨ B → C", "A ∧ B → D"], "C"));

        assert_eq!(result.is_answer_true, Some(true));
        assert_eq!(result.facts.value_of("D"), None);
    }

    #[test]
    fn empty_rule_base() {
        let result = solve_rule_base(&RuleBase::default());

        assert!(result.facts.is_empty());
        assert_eq!(result.is_answer_true, None);
        assert_eq!(result.result, "Invalid answer logical statement.");
    }

    #[test]
    fn deep_nesting_is_skipped() {
        let nested = format!("{}A{}", "(".repeat(200_000), ")".repeat(200_000));
        let result = solve_rule_base(&rule_base(&["B", nested.as_str()], "B"));

        assert_eq!(result.is_answer_true, Some(true));
        assert_eq!(result.facts.value_of("A"), None);

        let deep_premise = format!("{} → D", vec!["B"; 1_000].join(" ∧ "));
        let result = solve_rule_base(&rule_base(&["B", deep_premise.as_str()], "D"));

        assert_eq!(result.is_answer_true, Some(false));
        assert!(result.steps[1].to_string().ends_with(": Expression nested deeper than 256"));
    }

    #[test]
    fn contexts_are_independent() {
        let mut first = Context::default();
        let mut second = Context::default();

        first.read_axiom("A");
        second.read_axiom("¬A");
        first.chain();
        second.chain();

        assert_eq!(first.report_on("A"), Report::True);
        assert_eq!(second.report_on("A"), Report::False);
        assert_eq!(second.report_on("¬A"), Report::True);
    }
}

mod monotonic {
    use super::*;

    use otter_chain::structures::step::Step;
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    #[test]
    fn facts_are_written_once() {
        let rules = [
            "A",
            "A → B",
            "B → ¬C",
            "A → C",
            "¬C ∨ C → ¬B",
            "B ∧ ¬D → D",
            "D → ¬A",
        ];

        let seen = Rc::new(RefCell::new(HashMap::<String, bool>::new()));
        let seen_clone = seen.clone();

        let mut the_context = Context::default();
        the_context.set_callback_step(Box::new(move |step| match step {
            Step::Axiom(literal) | Step::Derived { conclusion: literal, .. } => {
                let previous = seen_clone
                    .borrow_mut()
                    .insert(literal.atom().to_string(), literal.polarity());
                assert!(previous.is_none(), "{} set twice", literal.atom());
            }
            _ => {}
        }));

        let result = the_context.solve(&rule_base(&rules, "D"));

        for (atom, value) in seen.borrow().iter() {
            assert_eq!(result.facts.value_of(atom), Some(*value));
        }

        assert_eq!(result.facts.value_of("A"), Some(true));
        assert_eq!(result.facts.value_of("B"), Some(true));
        assert_eq!(result.facts.value_of("C"), Some(false));
        assert_eq!(result.facts.value_of("D"), Some(true));

        let contradictions = result
            .steps
            .iter()
            .filter(|step| matches!(step, Step::Contradiction { .. }))
            .count();
        assert!(contradictions > 0);
    }
}
