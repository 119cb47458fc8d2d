use indexmap::{indexset, IndexMap, IndexSet};
use log::debug;

use crate::{
    grammars::{
        context_free::ContextFreeGrammar,
        fresh::FreshSymbols,
        types::{Grammar, ProductionSymbol},
    },
    language::Word,
};

impl ContextFreeGrammar {
    /// Splits every right-hand side longer than two into a right-branching
    /// chain: `A → s₁ s₂ … sₙ` becomes `A → s₁ X₁`, `X₁ → s₂ X₂`, …,
    /// `Xₙ₋₂ → sₙ₋₁ sₙ`, with `n − 2` fresh non-terminals.
    pub fn binarized(&self, fresh: &mut FreshSymbols) -> Self {
        let mut productions = IndexMap::with_capacity(self.productions.len());
        let mut chains = IndexMap::new();

        for (lhs, rhs) in &self.productions {
            let mut next_productions = IndexSet::with_capacity(rhs.len());

            for word in rhs {
                if word.len() <= 2 {
                    next_productions.insert(word.clone());
                    continue;
                }

                let mut rest = &word.symbols()[1..];
                let mut link = fresh.next_non_terminal();

                next_productions.insert(Word(vec![
                    word.symbols()[0].clone(),
                    ProductionSymbol::NonTerminal(link.clone()),
                ]));

                while rest.len() > 2 {
                    let next_link = fresh.next_non_terminal();

                    chains.insert(
                        link,
                        indexset! {Word(vec![
                            rest[0].clone(),
                            ProductionSymbol::NonTerminal(next_link.clone()),
                        ])},
                    );

                    link = next_link;
                    rest = &rest[1..];
                }

                chains.insert(link, indexset! {Word(rest.to_vec())});
            }

            productions.insert(lhs.clone(), next_productions);
        }

        debug!("binarized with {} chain non-terminals", chains.len());

        productions.extend(chains);

        let grammar = self.with_productions(productions);
        debug!("{} productions after binarization", grammar.production_count());

        grammar
    }
}
