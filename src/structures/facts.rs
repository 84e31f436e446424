/*!
A (partial) function from atoms to truth values, grown during a solve.

Facts are written once.
An attempt to [set](FactSet::set) the value of an atom which already has a value leaves the value as it is, and returns a status noting whether the attempt agrees or conflicts with the existing value.

```rust
# use otter_chain::structures::facts::{FactSet, FactStatus};
# use otter_chain::structures::literal::Literal;
let mut facts = FactSet::default();

assert_eq!(facts.set(&Literal::new("p", true)), FactStatus::NotSet);
assert_eq!(facts.set(&Literal::new("p", true)), FactStatus::Match);
assert_eq!(facts.set(&Literal::new("p", false)), FactStatus::Conflict(true));

assert_eq!(facts.value_of("p"), Some(true));
assert_eq!(facts.value_of("q"), None);
```

Facts are stored in the order they were set, which is also the order in which they are reported.

# Valuations

Any structure from which the value of an atom may be read implements [Valuation], and expressions may be [evaluated](crate::structures::expression::Expression::evaluate) against any valuation.
*/

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{misc::log::targets, structures::literal::Literal};

/// Something from which the value of an atom may be read, if the atom has a value.
pub trait Valuation {
    /// The value of an atom, if any.
    fn value_of(&self, atom: &str) -> Option<bool>;

    /// Whether the atom of the literal has the polarity of the literal as its value.
    ///
    /// An atom without a value satisfies no literal.
    fn satisfies(&self, literal: &Literal) -> bool {
        self.value_of(literal.atom()) == Some(literal.polarity())
    }
}

impl Valuation for HashMap<String, bool> {
    fn value_of(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }
}

/// The status of an atom with respect to some literal, prior to an attempt to set the value of the atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactStatus {
    /// The atom had no value, and now has the polarity of the literal as its value.
    NotSet,

    /// The atom already had the polarity of the literal as its value.
    Match,

    /// The atom already had the opposite value, which is kept.
    Conflict(bool),
}

/// The facts of a solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FactSet {
    values: IndexMap<String, bool>,
}

impl FactSet {
    /// Sets the value of the atom of a literal to the polarity of the literal, if the atom has no value.
    pub fn set(&mut self, literal: &Literal) -> FactStatus {
        match self.values.get(literal.atom()) {
            Some(value) if *value == literal.polarity() => FactStatus::Match,

            Some(value) => FactStatus::Conflict(*value),

            None => {
                log::trace!(target: targets::FACTS, "Set: {literal}");
                self.values.insert(literal.atom().to_string(), literal.polarity());
                FactStatus::NotSet
            }
        }
    }

    /// A count of atoms with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// An iterator through all (atom, value) pairs, in the order values were set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(atom, value)| (atom.as_str(), *value))
    }

    /// The facts as literals, in the order values were set.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.iter().map(|(atom, value)| Literal::new(atom, value))
    }

    /// The facts as a string of literals, separated by spaces.
    pub fn as_display_string(&self) -> String {
        self.literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The value of an atom, if any.
    ///
    /// Also available through [Valuation], provided here to avoid an import of the trait.
    pub fn value_of(&self, atom: &str) -> Option<bool> {
        self.values.get(atom).copied()
    }
}

impl Valuation for FactSet {
    fn value_of(&self, atom: &str) -> Option<bool> {
        FactSet::value_of(self, atom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_once() {
        let mut facts = FactSet::default();
        assert_eq!(facts.set(&Literal::new("p", false)), FactStatus::NotSet);
        assert_eq!(facts.set(&Literal::new("p", true)), FactStatus::Conflict(false));
        assert_eq!(facts.value_of("p"), Some(false));
        assert_eq!(facts.len(), 1);
    }

    #[test]
    fn order_of_setting() {
        let mut facts = FactSet::default();
        facts.set(&Literal::new("z", true));
        facts.set(&Literal::new("a", false));
        facts.set(&Literal::new("m", true));

        assert_eq!(facts.as_display_string(), "z ¬a m");

        let json = serde_json::to_string(&facts).unwrap();
        assert_eq!(json, r#"{"z":true,"a":false,"m":true}"#);
    }

    #[test]
    fn satisfies() {
        let mut facts = FactSet::default();
        facts.set(&Literal::new("p", true));

        assert!(facts.satisfies(&Literal::new("p", true)));
        assert!(!facts.satisfies(&Literal::new("p", false)));
        assert!(!facts.satisfies(&Literal::new("q", true)));
        assert!(!facts.satisfies(&Literal::new("q", false)));
    }
}
