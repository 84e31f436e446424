/*!
Literals are atoms paired with a (boolean) polarity.

Axioms, the conclusions of implication rules, and the answer of a rule base are each required to be literals.
A literal is obtained from an [expression](crate::structures::expression) which is either an atom (with polarity true) or the negation of an atom (with polarity false).
Any other expression is not a literal. For example, a conjunction or a double negation.

```rust
# use otter_chain::structures::expression::Expression;
# use otter_chain::structures::literal::Literal;
# use otter_chain::types::err::LiteralError;
let p = Expression::atom("p");
let not_p = Expression::not(p.clone());
let not_not_p = Expression::not(not_p.clone());

assert_eq!(Literal::try_from(&p), Ok(Literal::new("p", true)));
assert_eq!(Literal::try_from(&not_p), Ok(Literal::new("p", false)));
assert_eq!(Literal::try_from(&not_not_p), Err(LiteralError::NotALiteral));
```
*/

use crate::{
    structures::{expression::Expression, token::NOT},
    types::err::LiteralError,
};

/// An atom paired with the value required of it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    atom: String,
    polarity: bool,
}

impl Literal {
    pub fn new(atom: impl Into<String>, polarity: bool) -> Self {
        Literal {
            atom: atom.into(),
            polarity,
        }
    }

    pub fn atom(&self) -> &str {
        &self.atom
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }
}

impl TryFrom<&Expression> for Literal {
    type Error = LiteralError;

    fn try_from(expression: &Expression) -> Result<Self, Self::Error> {
        match expression {
            Expression::Atom(name) => Ok(Literal::new(name.as_str(), true)),

            Expression::Not(inner) => match inner.as_ref() {
                Expression::Atom(name) => Ok(Literal::new(name.as_str(), false)),
                _ => Err(LiteralError::NotALiteral),
            },

            _ => Err(LiteralError::NotALiteral),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "{NOT}{}", self.atom),
        }
    }
}
