#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::Parser;

use otter_chain::{procedures::solve::solve_rule_base_with, reports::SolveResult};

use misc::{print_text, read_rule_base};
use parse_args::{config_from_args, Args};

mod misc;
mod parse_args;

/// Exit codes, by verdict.
const EXIT_TRUE: i32 = 0;
const EXIT_FALSE: i32 = 1;
const EXIT_UNDEFINED: i32 = 2;
const EXIT_INPUT: i32 = 3;
const EXIT_OUTPUT: i32 = 4;

/// The exit code for the verdict on an answer.
fn verdict_code(is_answer_true: Option<bool>) -> i32 {
    match is_answer_true {
        Some(true) => EXIT_TRUE,
        Some(false) => EXIT_FALSE,
        None => EXIT_UNDEFINED,
    }
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(EXIT_INPUT);
        }
    };

    let rule_base = match read_rule_base(args.path.as_deref()) {
        Ok(rule_base) => rule_base,
        Err(e) => {
            eprintln!("c {e}");
            std::process::exit(EXIT_INPUT);
        }
    };

    let result: SolveResult = solve_rule_base_with(&rule_base, config);

    match args.json {
        true => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("c Failed to write result: {e}");
                std::process::exit(EXIT_OUTPUT);
            }
        },

        false => print_text(&result),
    }

    if args.conclusion {
        match result.conclusion(&rule_base) {
            Some(conclusion) => println!("{conclusion}"),
            None => println!("c No statement is described by the answer."),
        }
    }

    std::process::exit(verdict_code(result.is_answer_true));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(verdict_code(Some(true)), 0);
        assert_eq!(verdict_code(Some(false)), 1);
        assert_eq!(verdict_code(None), 2);

        let codes = [EXIT_TRUE, EXIT_FALSE, EXIT_UNDEFINED, EXIT_INPUT, EXIT_OUTPUT];
        for (index, code) in codes.iter().enumerate() {
            assert!(!codes[index + 1..].contains(code));
        }
    }
}
