/*!
Tokens, the units from which an [expression](crate::structures::expression) is parsed.

A token is one of the glyphs `(`, `)`, `∧`, `∨`, `¬`, or an atom.
An atom is a maximal run of alphanumeric characters, such as `A`, `A1`, or `rain`.

Tokens carry no position information, and are consumed once by the [parser](crate::parse::expression).
*/

/// The glyph for negation.
pub const NOT: char = '¬';

/// The glyph for conjunction.
pub const AND: char = '∧';

/// The glyph for disjunction.
pub const OR: char = '∨';

/// The glyph for implication.
///
/// Implication is not an operator of an expression, and is only read when splitting a rule into a premise and conclusion.
pub const IMPLIES: char = '→';

/// The glyph opening a group.
pub const LEFT_PAREN: char = '(';

/// The glyph closing a group.
pub const RIGHT_PAREN: char = ')';

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    LeftParen,
    RightParen,
    And,
    Or,
    Not,
    Atom(String),
}

impl Token {
    /// The token for a glyph, if the glyph is an operator or a parenthesis.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            LEFT_PAREN => Some(Token::LeftParen),
            RIGHT_PAREN => Some(Token::RightParen),
            AND => Some(Token::And),
            OR => Some(Token::Or),
            NOT => Some(Token::Not),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LeftParen => write!(f, "{LEFT_PAREN}"),
            Token::RightParen => write!(f, "{RIGHT_PAREN}"),
            Token::And => write!(f, "{AND}"),
            Token::Or => write!(f, "{OR}"),
            Token::Not => write!(f, "{NOT}"),
            Token::Atom(name) => write!(f, "{name}"),
        }
    }
}
