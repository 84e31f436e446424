//! Rule bases with known solves, read from `tests/rule_bases/*.json`.
//!
//! Each file is a rule base together with an `expected` object, holding the expected parts of the solve.

use std::path::PathBuf;

use indexmap::IndexMap;
use otter_chain::{procedures::solve::solve_rule_base, structures::rule::RuleBase};

#[derive(serde::Deserialize)]
struct Fixture {
    #[serde(flatten)]
    rule_base: RuleBase,

    expected: Expected,
}

#[derive(serde::Deserialize)]
struct Expected {
    is_answer_true: Option<bool>,
    result: String,
    facts: IndexMap<String, bool>,
    steps: Vec<String>,

    #[serde(default)]
    conclusion: Option<String>,
}

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("rule_bases")
}

fn check_fixture(path: PathBuf) {
    let file = std::fs::File::open(&path).expect("fixture missing");
    let fixture: Fixture = serde_json::from_reader(file).expect("malformed fixture");
    let expected = fixture.expected;

    let result = solve_rule_base(&fixture.rule_base);

    assert_eq!(result.is_answer_true, expected.is_answer_true, "{path:?}");
    assert_eq!(result.result, expected.result, "{path:?}");

    let facts = result
        .facts
        .iter()
        .map(|(atom, value)| (atom.to_string(), value))
        .collect::<Vec<_>>();
    assert_eq!(
        facts,
        expected.facts.into_iter().collect::<Vec<_>>(),
        "{path:?}"
    );

    let steps = result
        .steps
        .iter()
        .map(|step| step.to_string())
        .collect::<Vec<_>>();
    assert_eq!(steps, expected.steps, "{path:?}");

    if expected.conclusion.is_some() {
        assert_eq!(
            result.conclusion(&fixture.rule_base),
            expected.conclusion,
            "{path:?}"
        );
    }
}

#[cfg(test)]
mod rule_bases {
    use super::*;

    #[test]
    fn fixtures() {
        let mut counter = 0;

        if let Some(dir) = fixture_dir().to_str() {
            for entry in glob::glob(format!("{dir}/*.json").as_str()).expect("bad glob") {
                check_fixture(entry.unwrap());
                counter += 1;
            }
        }

        assert!(counter > 0, "no fixtures found");
    }

    #[test]
    fn serialised_result() {
        let fixture = fixture_dir().join("southeast_asia.json");
        let file = std::fs::File::open(fixture).unwrap();
        let fixture: Fixture = serde_json::from_reader(file).unwrap();

        let result = solve_rule_base(&fixture.rule_base);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["is_answer_true"], serde_json::Value::Bool(true));
        assert_eq!(json["result"], "'G' is True.");
        assert_eq!(json["facts"]["F"], serde_json::Value::Bool(true));
        assert_eq!(json["steps"][5], "'D → F' so F = True");
    }
}
