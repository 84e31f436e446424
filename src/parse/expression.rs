/*!
Parses a sequence of [tokens](crate::structures::token) to an [expression](crate::structures::expression).

The parser is recursive descent, reading tokens left to right without backtracking, on the grammar:

```none
expression := or
or         := and { '∨' and }*
and        := not { '∧' not }*
not        := '¬' not | atom
atom       := ATOM | '(' expression ')'
```

All tokens must be read.
So, tokens remaining after a complete expression are an error, rather than ignored.

Nesting negations or parentheses beyond [MAX_DEPTH] is an error.
So is an expression with more than [MAX_DEPTH] operators on some path from the root to an atom, e.g. a conjunction of more than [MAX_DEPTH] + 1 atoms.
Hence any expression built by the parser may be evaluated, displayed, and dropped within a bounded depth of recursion.

```rust
# use otter_chain::parse::expression::parse_expression;
# use otter_chain::structures::expression::Expression;
# use otter_chain::types::err::{ErrorKind, ParseError};
let a = || Expression::atom("A");
let b = || Expression::atom("B");
let c = || Expression::atom("C");

assert_eq!(
    parse_expression("A ∨ B ∧ C"),
    Ok(Expression::or(a(), Expression::and(b(), c())))
);

assert_eq!(
    parse_expression("¬A ∧ B"),
    Ok(Expression::and(Expression::not(a()), b()))
);

assert_eq!(
    parse_expression("(A ∨ B"),
    Err(ErrorKind::Parse(ParseError::MissingClosingParenthesis))
);
```
*/

use crate::{
    misc::log::targets,
    parse::tokenize::tokenize,
    structures::{expression::Expression, literal::Literal, token::Token},
    types::err::{ErrorKind, ParseError},
};

/// The deepest nesting the parser reads, and the greatest height of an expression the parser builds.
pub const MAX_DEPTH: usize = 256;

/// An expression, with the count of operators on the longest path from the root to an atom.
type Parsed = (Expression, usize);

/// The height of an expression, if within [MAX_DEPTH].
fn bounded(height: usize) -> Result<usize, ParseError> {
    match height > MAX_DEPTH {
        true => Err(ParseError::TooDeep(MAX_DEPTH)),
        false => Ok(height),
    }
}

/// Tokens, the index of the next token to read, and the count of open negations and parentheses.
struct Parser {
    tokens: Vec<Token>,
    index: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            index: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Reads the next token if it is equal to the given token.
    fn next_if(&mut self, token: &Token) -> bool {
        match self.peek() == Some(token) {
            true => {
                self.index += 1;
                true
            }
            false => false,
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth = bounded(self.depth + 1)?;
        Ok(())
    }

    fn expression(&mut self) -> Result<Parsed, ParseError> {
        self.or()
    }

    fn or(&mut self) -> Result<Parsed, ParseError> {
        let (mut expression, mut height) = self.and()?;
        while self.next_if(&Token::Or) {
            let (right, right_height) = self.and()?;
            height = bounded(height.max(right_height) + 1)?;
            expression = Expression::or(expression, right);
        }
        Ok((expression, height))
    }

    fn and(&mut self) -> Result<Parsed, ParseError> {
        let (mut expression, mut height) = self.not()?;
        while self.next_if(&Token::And) {
            let (right, right_height) = self.not()?;
            height = bounded(height.max(right_height) + 1)?;
            expression = Expression::and(expression, right);
        }
        Ok((expression, height))
    }

    fn not(&mut self) -> Result<Parsed, ParseError> {
        match self.next_if(&Token::Not) {
            true => {
                self.descend()?;
                let (inner, height) = self.not()?;
                self.depth -= 1;
                Ok((Expression::not(inner), bounded(height + 1)?))
            }
            false => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<Parsed, ParseError> {
        match self.next_token() {
            None => Err(ParseError::UnexpectedEnd),

            Some(Token::Atom(name)) => Ok((Expression::Atom(name), 0)),

            Some(Token::LeftParen) => {
                self.descend()?;
                let parsed = self.expression()?;
                self.depth -= 1;
                match self.next_if(&Token::RightParen) {
                    true => Ok(parsed),
                    false => Err(ParseError::MissingClosingParenthesis),
                }
            }

            Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    /// The tokens not yet read, separated by spaces.
    fn remaining(&self) -> String {
        self.tokens[self.index..]
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parses a sequence of tokens to an expression, requiring every token to be read.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(tokens);
    let (expression, _) = parser.expression()?;

    match parser.peek() {
        None => Ok(expression),
        Some(_) => Err(ParseError::TrailingTokens(parser.remaining())),
    }
}

/// Tokenizes and parses a string to an expression.
pub fn parse_expression(string: &str) -> Result<Expression, ErrorKind> {
    let expression = parse_tokens(tokenize(string)?)?;
    log::trace!(target: targets::PARSE, "Parsed '{string}' to: {expression:?}");
    Ok(expression)
}

/// Tokenizes and parses a string to an expression, and reduces the expression to a literal.
pub fn parse_literal(string: &str) -> Result<Literal, ErrorKind> {
    let expression = parse_expression(string)?;
    Ok(Literal::try_from(&expression)?)
}
