use std::{borrow::Cow, fmt::Display};

use indexmap::{indexset, IndexMap, IndexSet};

use crate::{
    grammars::{
        context_free::ContextFreeGrammar,
        conversion::Conversion,
        error::GrammarError,
        options::ConversionOptions,
        types::{Grammar, NonTerminal, ProductionSymbol, ProductionWord, Terminal},
    },
    language::Word,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CnfWord {
    Terminal(Terminal),
    NonTerminals(NonTerminal, NonTerminal),
}

impl Display for CnfWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CnfWord::Terminal(t) => write!(f, "{t}"),
            CnfWord::NonTerminals(nt1, nt2) => write!(f, "{nt1} {nt2}"),
        }
    }
}

impl TryFrom<Word<ProductionSymbol>> for CnfWord {
    type Error = String;

    fn try_from(value: Word<ProductionSymbol>) -> Result<Self, Self::Error> {
        match value.0.as_slice() {
            [ProductionSymbol::Terminal(t)] => Ok(CnfWord::Terminal(t.clone())),
            [ProductionSymbol::NonTerminal(_)] => Err("Expected a terminal".to_string()),
            [ProductionSymbol::NonTerminal(nt1), ProductionSymbol::NonTerminal(nt2)] => {
                Ok(CnfWord::NonTerminals(nt1.clone(), nt2.clone()))
            }
            [_, _] => Err("Expected two non-terminals".to_string()),
            _ => Err(
                "CnfWord can only be created from a word with one terminal or two non-terminals"
                    .to_string(),
            ),
        }
    }
}

impl ProductionWord for CnfWord {
    fn to_word(&self) -> Word<ProductionSymbol> {
        match self {
            CnfWord::Terminal(t) => Word(vec![ProductionSymbol::Terminal(t.clone())]),
            CnfWord::NonTerminals(nt1, nt2) => Word(vec![
                ProductionSymbol::NonTerminal(nt1.clone()),
                ProductionSymbol::NonTerminal(nt2.clone()),
            ]),
        }
    }
}

/// A grammar whose productions are all `A → B C` or `A → a`, plus at most
/// `S → ε` for the start symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChomskyNormalFormGrammar {
    start_symbol: NonTerminal,
    is_start_symbol_erasable: bool,
    non_terminals: IndexSet<NonTerminal>,
    terminals: IndexSet<Terminal>,
    productions: IndexMap<NonTerminal, IndexSet<CnfWord>>,
}

impl Grammar<CnfWord> for ChomskyNormalFormGrammar {
    fn start_symbol(&self) -> &NonTerminal {
        &self.start_symbol
    }

    fn non_terminals(&self) -> &IndexSet<NonTerminal> {
        &self.non_terminals
    }

    fn terminals(&self) -> &IndexSet<Terminal> {
        &self.terminals
    }

    fn productions(&self) -> &IndexMap<NonTerminal, IndexSet<CnfWord>> {
        &self.productions
    }

    fn erasing_productions(&self) -> Cow<'_, IndexSet<NonTerminal>> {
        Cow::Owned(if self.is_start_symbol_erasable {
            indexset! {self.start_symbol.clone()}
        } else {
            IndexSet::new()
        })
    }

    fn rules(&self) -> Vec<(NonTerminal, Word<ProductionSymbol>)> {
        let mut rules = Vec::new();

        for (lhs, rhs) in &self.productions {
            rules.extend(rhs.iter().map(|word| (lhs.clone(), word.to_word())));

            if self.is_start_symbol_erasable && lhs == &self.start_symbol {
                rules.push((lhs.clone(), Word::empty()));
            }
        }

        if self.is_start_symbol_erasable && !self.productions.contains_key(&self.start_symbol) {
            rules.insert(0, (self.start_symbol.clone(), Word::empty()));
        }

        rules
    }
}

impl ChomskyNormalFormGrammar {
    pub fn from_context_free_grammar(
        cfg: &ContextFreeGrammar,
        options: &ConversionOptions,
    ) -> Result<Self, GrammarError> {
        Ok(Conversion::run(cfg, options)?.cnf)
    }

    /// Types a grammar that is already in normal form, e.g. the output of
    /// [`ContextFreeGrammar::binarized`].
    pub fn from_normalized(cfg: &ContextFreeGrammar) -> Result<Self, GrammarError> {
        let mut is_start_symbol_erasable = false;
        let mut productions = IndexMap::with_capacity(cfg.productions().len());

        for (lhs, rhs) in cfg.productions() {
            let mut cnf_words = IndexSet::with_capacity(rhs.len());

            for word in rhs {
                if word.is_empty() && lhs == cfg.start_symbol() {
                    is_start_symbol_erasable = true;
                    continue;
                }

                let cnf_word = CnfWord::try_from(word.clone()).map_err(|reason| {
                    GrammarError::NotInNormalForm {
                        lhs: lhs.to_string(),
                        word: word.to_string(),
                        reason,
                    }
                })?;

                cnf_words.insert(cnf_word);
            }

            if !cnf_words.is_empty() {
                productions.insert(lhs.clone(), cnf_words);
            }
        }

        Ok(ChomskyNormalFormGrammar {
            start_symbol: cfg.start_symbol().clone(),
            is_start_symbol_erasable,
            non_terminals: cfg.non_terminals().clone(),
            terminals: cfg.terminals().clone(),
            productions,
        })
    }

    pub fn is_start_symbol_erasable(&self) -> bool {
        self.is_start_symbol_erasable
    }
}

impl ContextFreeGrammar {
    pub fn to_chomsky_normal_form(&self) -> Result<ChomskyNormalFormGrammar, GrammarError> {
        ChomskyNormalFormGrammar::from_context_free_grammar(self, &ConversionOptions::default())
    }
}
