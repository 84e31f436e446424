//! Error types used in the library.
//!
//! - Errors from tokenizing, parsing, or reducing to a literal are expected from time to time, as rule bases are often written by hand (or by some model).
//!   During a solve these are caught at the level of an axiom or rule, noted in the trace, and the axiom or rule is skipped.
//! - Errors on input are external, e.g. a rule base file which is not valid JSON.
//!
//! Error enums are named after the stage of a solve they arise in.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Literal(#[from] LiteralError),

    #[error(transparent)]
    RuleFormat(#[from] RuleFormatError),
}

/// Errors when splitting a string into tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TokenizeError {
    /// A character which is not whitespace, an operator, a parenthesis, or part of an atom.
    ///
    /// The position is a count of characters (not bytes) from the start of the string.
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// Errors when parsing a sequence of tokens to an expression.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The tokens ran out where an atom or a parenthesised expression was required.
    #[error("Unexpected end of tokens in atom parsing")]
    UnexpectedEnd,

    /// An opening parenthesis without a matching closing parenthesis.
    #[error("Missing closing parenthesis")]
    MissingClosingParenthesis,

    /// A token which cannot begin an atom, e.g. a binary operator or a closing parenthesis.
    #[error("Unexpected token '{0}' in atom parsing")]
    UnexpectedToken(String),

    /// Tokens remaining after a complete expression, given in order and separated by spaces.
    #[error("Unexpected tokens remaining: {0}")]
    TrailingTokens(String),

    /// Negations and parentheses nested deeper than the given bound.
    #[error("Expression nested deeper than {0}")]
    TooDeep(usize),
}

/// Errors when reducing an expression to a literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum LiteralError {
    /// The expression is neither an atom nor the negation of an atom.
    #[error("Conclusion must be a literal (atom or its negation)")]
    NotALiteral,
}

/// Errors in the shape of an implication rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RuleFormatError {
    /// No implication glyph was found.
    #[error("Invalid rule format (should have one '→'): no '→' found")]
    NoImplication,

    /// More than one implication glyph was found, with the count of glyphs.
    #[error("Invalid rule format (should have one '→'): {0} found")]
    MultipleImplications(usize),
}

/// Errors when reading a rule base.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InputError {
    /// The source could not be read.
    #[error("Failed to read rule base: {0}")]
    Read(String),

    /// The source was read, but is not a rule base written in JSON.
    #[error("Failed to parse rule base: {0}")]
    Json(String),
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Read(e.to_string())
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            serde_json::error::Category::Io => InputError::Read(e.to_string()),
            _ => InputError::Json(e.to_string()),
        }
    }
}
