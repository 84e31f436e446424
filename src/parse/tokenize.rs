/*!
Splits a string into [tokens](crate::structures::token).

- Whitespace is skipped.
- Each operator glyph (¬, ∧, ∨) and parenthesis is a token.
- A maximal run of alphanumeric characters is an atom.

Any other character, such as punctuation or an implication glyph within a premise, is an error.

```rust
# use otter_chain::parse::tokenize::tokenize;
# use otter_chain::structures::token::Token;
let tokens = tokenize("¬(rain1 ∧ B)").unwrap();

assert_eq!(
    tokens,
    vec![
        Token::Not,
        Token::LeftParen,
        Token::Atom("rain1".to_string()),
        Token::And,
        Token::Atom("B".to_string()),
        Token::RightParen,
    ]
);

assert!(tokenize("A → B").is_err());
```
*/

use crate::{misc::log::targets, structures::token::Token, types::err::TokenizeError};

pub fn tokenize(expression: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::default();
    let mut characters = expression.chars().enumerate().peekable();

    while let Some((position, character)) = characters.next() {
        if character.is_whitespace() {
            continue;
        }

        if let Some(token) = Token::from_glyph(character) {
            tokens.push(token);
            continue;
        }

        if !character.is_alphanumeric() {
            log::trace!(target: targets::TOKENIZE, "Unexpected '{character}' in: {expression}");
            return Err(TokenizeError::UnexpectedCharacter {
                character,
                position,
            });
        }

        let mut atom = String::from(character);
        while let Some((_, next)) = characters.next_if(|(_, next)| next.is_alphanumeric()) {
            atom.push(next);
        }
        tokens.push(Token::Atom(atom));
    }

    log::trace!(target: targets::TOKENIZE, "{} tokens from: {expression}", tokens.len());
    Ok(tokens)
}
