use std::{fs::File, io::BufReader, path::Path};

use otter_chain::{reports::SolveResult, structures::rule::RuleBase, types::err::InputError};

/// Reads a rule base from the given path, or from stdin if no path is given.
pub fn read_rule_base(path: Option<&Path>) -> Result<RuleBase, InputError> {
    match path {
        Some(path) => {
            eprintln!("c Reading rule base from {path:?}");
            let file = File::open(path)?;
            RuleBase::from_json(BufReader::new(file))
        }

        None => {
            eprintln!("c Reading rule base from stdin");
            RuleBase::from_json(std::io::stdin().lock())
        }
    }
}

/// Writes the steps, facts, and result of a solve.
///
/// Steps are written as comments, facts as a valuation, and the result as a solution line.
pub fn print_text(result: &SolveResult) {
    for step in &result.steps {
        println!("c {step}");
    }
    println!("v {}", result.facts.as_display_string());
    println!("s {}", result.result);
}
