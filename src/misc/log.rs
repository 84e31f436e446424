/*!
Log targets.

Each procedure logs under its own target, so a solve can be followed one stage at a time, e.g. with `RUST_LOG=chain=trace`.

No logger is set by the library.
The command line tool uses `env_logger`, when built with the `log` feature.
*/

/// Targets for the [log] macros.
pub mod targets {
    /// Logs related to [tokenizing](crate::parse::tokenize)
    pub const TOKENIZE: &str = "tokenize";

    /// Logs related to [parsing](crate::parse::expression)
    pub const PARSE: &str = "parse";

    /// Logs related to [axiom intake](crate::procedures::axioms)
    pub const AXIOMS: &str = "axioms";

    /// Logs related to [rule preparation](crate::procedures::rules)
    pub const RULES: &str = "rules";

    /// Logs related to [facts](crate::structures::facts)
    pub const FACTS: &str = "facts";

    /// Logs related to [forward chaining](crate::procedures::chain)
    pub const CHAIN: &str = "chain";

    /// Logs related to [the answer](crate::procedures::answer)
    pub const ANSWER: &str = "answer";
}
