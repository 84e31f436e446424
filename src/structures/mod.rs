/*!
Abstract elements of a solve and their representation.

- [Tokens](token) are the glyphs and atoms a formula is written with.
- [Expressions](expression) are formulas of propositional logic, built from atoms with ¬, ∧, and ∨.
- [Literals](literal) are atoms paired with a polarity, the only form an axiom, the conclusion of a rule, or an answer may take.
- [Facts](facts) are a (partial) function from atoms to truth values, grown during a solve.
- [Rules](rule) pair a premise expression with a concluding literal, and a [rule base](rule::RuleBase) collects the input to a solve.
- [Steps](step) are the entries of the trace of a solve.
*/

pub mod expression;
pub mod facts;
pub mod literal;
pub mod rule;
pub mod step;
pub mod token;
