/*!
Reading strings to expressions and literals.

- [tokenize] splits a string into [tokens](crate::structures::token).
- [expression] parses a sequence of tokens to an [expression](crate::structures::expression), or a [literal](crate::structures::literal).

Most uses will only require [parse_expression](expression::parse_expression) or [parse_literal](expression::parse_literal), which do both.
*/

pub mod expression;
pub mod tokenize;
