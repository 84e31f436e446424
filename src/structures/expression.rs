/*!
Expressions, aka. formulas of propositional logic.

An expression is a tree whose leaves are atoms and whose interior nodes are negations, conjunctions, or disjunctions.
Expressions are built by the [parser](crate::parse::expression), and are not mutated after being built.

Binding strength, from strongest to weakest:
- Atoms and parenthesised groups.
- Negation (¬).
- Conjunction (∧), associating to the left.
- Disjunction (∨), associating to the left.

So, `A ∨ B ∧ C` is `A ∨ (B ∧ C)`, `¬A ∧ B` is `(¬A) ∧ B`, and `A ∧ B ∧ C` is `(A ∧ B) ∧ C`.

# Display

Expressions are displayed with as few parentheses as required to parse back to the same expression.

```rust
# use otter_chain::structures::expression::Expression;
let a = Expression::atom("A");
let b = Expression::atom("B");
let c = Expression::atom("C");

let left = Expression::and(Expression::and(a.clone(), b.clone()), c.clone());
assert_eq!(left.to_string(), "A ∧ B ∧ C");

let right = Expression::and(a.clone(), Expression::and(b.clone(), c.clone()));
assert_eq!(right.to_string(), "A ∧ (B ∧ C)");

let negated = Expression::not(Expression::or(a, b));
assert_eq!(negated.to_string(), "¬(A ∨ B)");
```
*/

use crate::structures::token::{AND, NOT, OR};

/// An expression, as a tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    /// An atom, named by some string of alphanumeric characters.
    Atom(String),

    /// The negation of an expression.
    Not(Box<Expression>),

    /// The conjunction of two expressions.
    And(Box<Expression>, Box<Expression>),

    /// The disjunction of two expressions.
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn atom(name: impl Into<String>) -> Self {
        Expression::Atom(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(expression: Expression) -> Self {
        Expression::Not(Box::new(expression))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    /// The binding strength of the top-level node, higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Expression::Or(_, _) => 1,
            Expression::And(_, _) => 2,
            Expression::Not(_) => 3,
            Expression::Atom(_) => 4,
        }
    }

    /// Writes a subexpression, parenthesised if it binds weaker than `minimum`.
    fn fmt_operand(&self, f: &mut std::fmt::Formatter<'_>, minimum: u8) -> std::fmt::Result {
        match self.precedence() < minimum {
            true => write!(f, "({self})"),
            false => write!(f, "{self}"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Atom(name) => write!(f, "{name}"),

            Expression::Not(inner) => {
                write!(f, "{NOT}")?;
                inner.fmt_operand(f, self.precedence())
            }

            // The right operand is bumped, as operators associate to the left.
            Expression::And(left, right) => {
                left.fmt_operand(f, self.precedence())?;
                write!(f, " {AND} ")?;
                right.fmt_operand(f, self.precedence() + 1)
            }

            Expression::Or(left, right) => {
                left.fmt_operand(f, self.precedence())?;
                write!(f, " {OR} ")?;
                right.fmt_operand(f, self.precedence() + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_nested_negation() {
        let expression = Expression::not(Expression::not(Expression::atom("p")));
        assert_eq!(expression.to_string(), "¬¬p");
    }

    #[test]
    fn display_mixed() {
        let expression = Expression::and(
            Expression::or(Expression::atom("p"), Expression::atom("q")),
            Expression::not(Expression::atom("r")),
        );
        assert_eq!(expression.to_string(), "(p ∨ q) ∧ ¬r");

        let expression = Expression::or(
            Expression::atom("p"),
            Expression::or(Expression::atom("q"), Expression::atom("r")),
        );
        assert_eq!(expression.to_string(), "p ∨ (q ∨ r)");
    }
}
