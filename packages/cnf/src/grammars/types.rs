use std::{borrow::Cow, fmt::Display, hash::Hash};

use derive_more::Display;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::language::{Symbol, Word, EPSILON};

#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Terminal(pub Symbol);

impl Terminal {
    pub fn new(name: impl Into<String>) -> Self {
        Terminal(Symbol::new(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonTerminal(pub Symbol);

impl NonTerminal {
    pub fn new(name: impl Into<String>) -> Self {
        NonTerminal(Symbol::new(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A symbol on the right-hand side of a production. The variant is fixed
/// when the grammar is built, from the declared alphabets.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductionSymbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl ProductionSymbol {
    pub fn as_str(&self) -> &str {
        match self {
            ProductionSymbol::Terminal(t) => t.as_str(),
            ProductionSymbol::NonTerminal(nt) => nt.as_str(),
        }
    }

    pub fn as_non_terminal(&self) -> Option<&NonTerminal> {
        match self {
            ProductionSymbol::NonTerminal(nt) => Some(nt),
            ProductionSymbol::Terminal(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProductionSymbol::Terminal(_))
    }
}

impl From<Terminal> for ProductionSymbol {
    fn from(t: Terminal) -> Self {
        ProductionSymbol::Terminal(t)
    }
}

impl From<NonTerminal> for ProductionSymbol {
    fn from(nt: NonTerminal) -> Self {
        ProductionSymbol::NonTerminal(nt)
    }
}

impl Word<ProductionSymbol> {
    /// `A → B` with `B` a non-terminal.
    pub fn as_unit(&self) -> Option<&NonTerminal> {
        match self.0.as_slice() {
            [symbol] => symbol.as_non_terminal(),
            _ => None,
        }
    }
}

pub trait ProductionWord: Display + Clone + Eq + Hash {
    fn to_word(&self) -> Word<ProductionSymbol>;
}

impl ProductionWord for Word<ProductionSymbol> {
    fn to_word(&self) -> Word<ProductionSymbol> {
        Word(self.0.clone())
    }
}

pub trait Grammar<R: ProductionWord> {
    fn start_symbol(&self) -> &NonTerminal;
    fn non_terminals(&self) -> &IndexSet<NonTerminal>;
    fn terminals(&self) -> &IndexSet<Terminal>;
    fn productions(&self) -> &IndexMap<NonTerminal, IndexSet<R>>;

    /// Non-terminals that have an ε production.
    fn erasing_productions(&self) -> Cow<'_, IndexSet<NonTerminal>>;

    /// Every production as a plain word, in production order.
    fn rules(&self) -> Vec<(NonTerminal, Word<ProductionSymbol>)> {
        self.productions()
            .iter()
            .flat_map(|(lhs, rhs)| rhs.iter().map(move |word| (lhs.clone(), word.to_word())))
            .collect()
    }

    fn production_count(&self) -> usize {
        self.rules().len()
    }

    /// One line per production, `LHS -> sym1 sym2`.
    fn listing(&self) -> String {
        self.rules()
            .into_iter()
            .map(|(lhs, word)| format!("{lhs} -> {word}\n"))
            .collect()
    }

    fn definition(&self) -> String {
        let start_symbol = self.start_symbol();

        let mut string_productions = IndexMap::new();
        for (lhs, word) in self.rules() {
            string_productions
                .entry(lhs.to_string())
                .or_insert_with(Vec::new)
                .push(if word.is_empty() {
                    EPSILON.to_owned()
                } else {
                    word.to_string()
                });
        }

        let mut non_terminals = self.non_terminals().clone();
        non_terminals.sort_by(|a, b| {
            if a == start_symbol {
                return std::cmp::Ordering::Less;
            }
            if b == start_symbol {
                return std::cmp::Ordering::Greater;
            }
            a.cmp(b)
        });

        let mut terminals = self.terminals().clone();
        terminals.sort();

        string_productions.sort_by(|lhs1, _, lhs2, _| lhs1.cmp(lhs2));

        let mut definition = format!(
            "G = ({{{}}}, {{{}}}, P, {})\n\n",
            non_terminals.iter().join(", "),
            terminals.iter().join(", "),
            start_symbol
        );

        definition += "P = {\n";

        for (lhs, rhs) in string_productions {
            definition += &format!("  {} → {}\n", lhs, rhs.join(" | "));
        }

        definition += "}\n";

        definition
    }
}
