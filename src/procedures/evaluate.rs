/*!
Evaluates an [expression](crate::structures::expression) against a [valuation](crate::structures::facts::Valuation).

An atom without a value is read as false.
So, an atom is true only if it is known to be true, and the negation of an atom without a value is true.

```rust
# use otter_chain::parse::expression::parse_expression;
# use otter_chain::structures::facts::FactSet;
# use otter_chain::structures::literal::Literal;
let mut facts = FactSet::default();
facts.set(&Literal::new("p", true));

let expression = parse_expression("p ∧ ¬q").unwrap();
assert!(expression.evaluate(&facts));

let expression = parse_expression("q ∨ ¬p").unwrap();
assert!(!expression.evaluate(&facts));
```
*/

use crate::structures::{expression::Expression, facts::Valuation};

impl Expression {
    /// The value of the expression on the valuation, reading atoms without a value as false.
    pub fn evaluate(&self, valuation: &impl Valuation) -> bool {
        match self {
            Expression::Atom(name) => valuation.value_of(name).unwrap_or(false),
            Expression::Not(inner) => !inner.evaluate(valuation),
            Expression::And(left, right) => left.evaluate(valuation) && right.evaluate(valuation),
            Expression::Or(left, right) => left.evaluate(valuation) || right.evaluate(valuation),
        }
    }
}
