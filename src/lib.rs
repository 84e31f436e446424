//! A library for deriving the truth of a literal from propositional axioms and implication rules.
//!
//! otter_chain reads a [rule base](crate::structures::rule::RuleBase), made of axioms (literals asserted outright) and implication rules (a premise formula and a concluding literal), and forward chains from the axioms until no rule adds a new fact.
//! The result of a solve is the facts derived, a human-readable trace of the derivation, and a verdict on some designated answer literal.
//!
//! Formulas are written with the glyphs ¬ (not), ∧ (and), ∨ (or), parentheses, and alphanumeric atoms, and rules with a single → (implies).
//! For example, `C ∧ F → G`.
//!
//! # Orientation
//!
//! As with a SAT solver, the library is designed around a [context].
//! A context is built from a [configuration](crate::config), is fed axioms and rules, and then [solved](crate::procedures::solve).
//!
//! Internally, a solve is a short pipeline:
//! - Strings are [tokenized](crate::parse::tokenize) and [parsed](crate::parse::expression) to [expressions](crate::structures::expression).
//! - Axioms, rule conclusions, and the answer are reduced to [literals](crate::structures::literal).
//! - Premises are [evaluated](crate::procedures::evaluate) against the [facts](crate::structures::facts) derived so far.
//! - Rules are [applied](crate::procedures::chain) until a fixed point is reached.
//!
//! Each fact is written once.
//! If some rule later demands the opposite value for an atom, a contradiction is noted in the trace and the first value stands.
//! Atoms without a value are read as false when evaluating a premise.
//!
//! Useful starting points, then, may be:
//! - The [solve procedure](crate::procedures::solve) for the phases of a solve.
//! - The [structures] for the representation of formulas, literals, rules, and facts.
//! - The [configuration](crate::config) for limits on a solve.
//!
//! # Examples
//!
//! + Solve a rule base given as JSON.
//!
//! ```rust
//! # use otter_chain::structures::rule::RuleBase;
//! # use otter_chain::procedures::solve::solve_rule_base;
//! let rule_base = RuleBase::from_json_str(
//!     r#"{
//!         "logical_statements": ["A. It rains.", "B. The ground is wet.", "C. The match is off."],
//!         "rule_representation": ["A", "A → B", "B → C"],
//!         "answer_logical_statement": "C"
//!     }"#,
//! )
//! .unwrap();
//!
//! let result = solve_rule_base(&rule_base);
//!
//! assert_eq!(result.is_answer_true, Some(true));
//! assert_eq!(result.result, "'C' is True.");
//! assert_eq!(result.steps.last().unwrap().to_string(), "End.");
//! ```
//!
//! + Step through a solve with a context.
//!
//! ```rust
//! # use otter_chain::config::Config;
//! # use otter_chain::context::Context;
//! # use otter_chain::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! the_context.read_axiom("¬P");
//! the_context.read_rule("¬P ∨ Q → R");
//! the_context.chain();
//!
//! assert_eq!(the_context.facts.value_of("R"), Some(true));
//! assert_eq!(the_context.report_on("R"), Report::True);
//! assert_eq!(the_context.report_on("Q"), Report::False);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Rule firings may be found with `RUST_LOG=chain=debug …`
//! - Details of parsing may be found with `RUST_LOG=parse=trace …`

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]

pub mod config;
pub mod context;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

pub mod misc;
