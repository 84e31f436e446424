/*!
Procedures of a solve, each implemented as methods on a [context](crate::context).

In order of use during a [solve]:
- [axioms]: Reads each axiom, setting the value of its atom.
- [rules]: Reads each implication rule.
- [chain]: Applies rules until a fixed point is reached.
- [answer]: Checks the answer literal against the facts reached.

And, [evaluate] is used when applying a rule, to determine whether the premise of the rule holds.

Each procedure notes what happened in the trace of the context.
An axiom or rule which cannot be read is noted and skipped, and so every solve ends with some result.
*/

pub mod answer;
pub mod axioms;
pub mod chain;
pub mod evaluate;
pub mod rules;
pub mod solve;
