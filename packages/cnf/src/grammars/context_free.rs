use std::borrow::Cow;

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::{
    grammars::{
        error::GrammarError,
        fresh::{is_fresh_name, FreshSymbols, DEFAULT_FRESH_PREFIX},
        types::{Grammar, NonTerminal, ProductionSymbol, Terminal},
    },
    language::{Word, EPSILON},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFreeGrammar {
    pub(super) start_symbol: NonTerminal,
    pub(super) non_terminals: IndexSet<NonTerminal>,
    pub(super) terminals: IndexSet<Terminal>,
    pub(super) productions: IndexMap<NonTerminal, IndexSet<Word<ProductionSymbol>>>,
    pub(super) fresh_prefix: String,
}

impl Grammar<Word<ProductionSymbol>> for ContextFreeGrammar {
    fn start_symbol(&self) -> &NonTerminal {
        &self.start_symbol
    }

    fn non_terminals(&self) -> &IndexSet<NonTerminal> {
        &self.non_terminals
    }

    fn terminals(&self) -> &IndexSet<Terminal> {
        &self.terminals
    }

    fn productions(&self) -> &IndexMap<NonTerminal, IndexSet<Word<ProductionSymbol>>> {
        &self.productions
    }

    fn erasing_productions(&self) -> Cow<'_, IndexSet<NonTerminal>> {
        Cow::Owned(
            self.productions
                .iter()
                .filter(|(_, rhs)| rhs.iter().any(Word::is_empty))
                .map(|(lhs, _)| lhs.clone())
                .collect(),
        )
    }
}

impl ContextFreeGrammar {
    pub fn builder(start_symbol: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder::new(start_symbol)
    }

    /// A factory that will not reuse any name of this grammar.
    pub fn fresh_symbols(&self) -> FreshSymbols {
        FreshSymbols::new(
            self.fresh_prefix.clone(),
            self.non_terminals
                .iter()
                .map(NonTerminal::as_str)
                .chain(self.terminals.iter().map(Terminal::as_str)),
        )
    }

    pub fn fresh_prefix(&self) -> &str {
        &self.fresh_prefix
    }

    /// Same alphabets and start symbol, different productions.
    pub(super) fn with_productions(
        &self,
        productions: IndexMap<NonTerminal, IndexSet<Word<ProductionSymbol>>>,
    ) -> Self {
        let mut non_terminals = self.non_terminals.clone();
        non_terminals.extend(productions.keys().cloned());

        ContextFreeGrammar {
            start_symbol: self.start_symbol.clone(),
            non_terminals,
            terminals: self.terminals.clone(),
            productions,
            fresh_prefix: self.fresh_prefix.clone(),
        }
    }
}

/// Collects productions by name and classifies every symbol against the
/// declared alphabets when [`GrammarBuilder::build`] is called.
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    start_symbol: String,
    non_terminals: IndexSet<String>,
    terminals: IndexSet<String>,
    productions: IndexMap<String, Vec<Vec<String>>>,
    fresh_prefix: String,
}

impl GrammarBuilder {
    pub fn new(start_symbol: impl Into<String>) -> Self {
        GrammarBuilder {
            start_symbol: start_symbol.into(),
            non_terminals: IndexSet::new(),
            terminals: IndexSet::new(),
            productions: IndexMap::new(),
            fresh_prefix: DEFAULT_FRESH_PREFIX.to_owned(),
        }
    }

    pub fn non_terminals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_terminals.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn terminals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terminals.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds `lhs → rhs`. An `ε` anywhere in `rhs` is dropped.
    pub fn production<S: AsRef<str>>(mut self, lhs: impl Into<String>, rhs: &[S]) -> Self {
        self.productions
            .entry(lhs.into())
            .or_default()
            .push(rhs.iter().map(|s| s.as_ref().to_owned()).collect());
        self
    }

    pub fn erasing_production(self, lhs: impl Into<String>) -> Self {
        self.production(lhs, &[EPSILON])
    }

    pub fn fresh_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fresh_prefix = prefix.into();
        self
    }

    pub fn build(self) -> Result<ContextFreeGrammar, GrammarError> {
        let GrammarBuilder {
            start_symbol,
            mut non_terminals,
            terminals,
            productions,
            fresh_prefix,
        } = self;

        non_terminals.extend(productions.keys().cloned());

        let declared = || non_terminals.iter().chain(terminals.iter());

        if fresh_prefix.is_empty()
            || start_symbol.is_empty()
            || declared().any(String::is_empty)
            || productions.values().flatten().flatten().any(String::is_empty)
        {
            return Err(GrammarError::EmptySymbolName);
        }

        if let Some(symbol) = terminals.iter().find(|t| non_terminals.contains(*t)) {
            return Err(GrammarError::AlphabetOverlap {
                symbol: symbol.clone(),
            });
        }

        if let Some(symbol) = declared().find(|name| is_fresh_name(&fresh_prefix, name)) {
            return Err(GrammarError::SymbolCollision {
                symbol: symbol.clone(),
                prefix: fresh_prefix,
            });
        }

        if productions.is_empty() {
            return Err(GrammarError::EmptyGrammar { start_symbol });
        }

        if !non_terminals.contains(&start_symbol) {
            return Err(GrammarError::UnknownStartSymbol { start_symbol });
        }

        let mut classified = IndexMap::with_capacity(productions.len());

        for (lhs, alternatives) in &productions {
            let mut rhs = IndexSet::with_capacity(alternatives.len());

            for alternative in alternatives {
                let word = alternative
                    .iter()
                    .filter(|name| name.as_str() != EPSILON)
                    .map(|name| {
                        if non_terminals.contains(name) {
                            Ok(ProductionSymbol::NonTerminal(NonTerminal::new(name.as_str())))
                        } else if terminals.contains(name) {
                            Ok(ProductionSymbol::Terminal(Terminal::new(name.as_str())))
                        } else {
                            Err(GrammarError::UndefinedSymbol {
                                symbol: name.clone(),
                                lhs: lhs.clone(),
                            })
                        }
                    })
                    .collect::<Result<Word<_>, _>>()?;

                rhs.insert(word);
            }

            classified.insert(NonTerminal::new(lhs.as_str()), rhs);
        }

        if !productions.contains_key(&start_symbol) {
            return Err(GrammarError::EmptyGrammar { start_symbol });
        }

        let grammar = ContextFreeGrammar {
            start_symbol: NonTerminal::new(start_symbol),
            non_terminals: non_terminals.into_iter().map(NonTerminal::new).collect(),
            terminals: terminals.into_iter().map(Terminal::new).collect(),
            productions: classified,
            fresh_prefix,
        };

        debug!(
            "built grammar with {} non-terminals, {} terminals and {} productions",
            grammar.non_terminals.len(),
            grammar.terminals.len(),
            grammar.production_count()
        );

        Ok(grammar)
    }
}
