use std::fmt::Display;

use derive_more::Display;
use itertools::Itertools;

/// Marker accepted in place of the empty right-hand side.
pub const EPSILON: &str = "ε";

#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        let s = s.into();
        assert!(!s.is_empty());
        Symbol(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An ordered sequence of symbols. The empty word stands for ε.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word<S>(pub Vec<S>);

impl<S> Word<S> {
    pub fn new(symbols: impl IntoIterator<Item = S>) -> Self {
        Word(symbols.into_iter().collect())
    }

    pub fn empty() -> Self {
        Word(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn symbols(&self) -> &[S] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.0.iter()
    }
}

impl<S> FromIterator<S> for Word<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Word::new(iter)
    }
}

impl<S: Display> Display for Word<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "{EPSILON}")
        } else {
            write!(f, "{}", self.0.iter().join(" "))
        }
    }
}
