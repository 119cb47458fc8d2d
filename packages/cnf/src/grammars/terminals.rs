use indexmap::{indexset, IndexMap, IndexSet};
use log::{debug, trace};

use crate::{
    grammars::{
        context_free::ContextFreeGrammar,
        fresh::FreshSymbols,
        types::{NonTerminal, ProductionSymbol, Terminal},
    },
    language::Word,
};

impl ContextFreeGrammar {
    /// Replaces every terminal `t` inside a right-hand side of length two or
    /// more by a helper non-terminal with the single production `X → t`.
    ///
    /// One helper is created per terminal and shared by all productions.
    pub fn with_isolated_terminals(&self, fresh: &mut FreshSymbols) -> Self {
        let mut helpers: IndexMap<Terminal, NonTerminal> = IndexMap::new();
        let mut productions = IndexMap::with_capacity(self.productions.len());

        for (lhs, rhs) in &self.productions {
            let mut next_productions = IndexSet::with_capacity(rhs.len());

            for word in rhs {
                if word.len() < 2 {
                    next_productions.insert(word.clone());
                    continue;
                }

                let mut isolated = Vec::with_capacity(word.len());
                for symbol in word.iter() {
                    isolated.push(match symbol {
                        ProductionSymbol::Terminal(t) => {
                            let helper = helpers.entry(t.clone()).or_insert_with(|| {
                                let helper = fresh.next_non_terminal();
                                trace!("{helper} stands for terminal {t}");
                                helper
                            });

                            ProductionSymbol::NonTerminal(helper.clone())
                        }
                        ProductionSymbol::NonTerminal(_) => symbol.clone(),
                    });
                }

                next_productions.insert(Word(isolated));
            }

            productions.insert(lhs.clone(), next_productions);
        }

        debug!("isolated {} terminals", helpers.len());

        for (t, helper) in helpers {
            productions.insert(
                helper,
                indexset! {Word(vec![ProductionSymbol::Terminal(t)])},
            );
        }

        self.with_productions(productions)
    }
}
