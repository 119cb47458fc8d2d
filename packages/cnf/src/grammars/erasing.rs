//! Removal of ε productions.
//!
//! Every production `A → s₁…sₙ` is replaced by all of its variants with some
//! subset of the nullable positions deleted. A production with `k` nullable
//! positions yields up to `2^k` variants, so the result grows exponentially in
//! the length of the longest right-hand side.

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use log::{debug, trace};

use crate::{
    grammars::{
        context_free::ContextFreeGrammar,
        options::StartErasure,
        types::{Grammar, NonTerminal, ProductionSymbol},
    },
    language::Word,
};

impl ContextFreeGrammar {
    /// Non-terminals that derive the empty word.
    ///
    /// Works off a stack seeded with the left-hand sides of ε productions.
    /// Popping `B` revisits only the productions where `B` occurs, and a
    /// non-terminal is pushed once at most, when it first becomes nullable,
    /// so the loop ends after at most `|N|` pops.
    pub fn nullable_non_terminals(&self) -> IndexSet<NonTerminal> {
        let mut occurrences: IndexMap<&NonTerminal, Vec<(&NonTerminal, &Word<ProductionSymbol>)>> =
            IndexMap::new();
        let mut nullable = IndexSet::new();
        let mut work_stack = Vec::new();

        for (lhs, rhs) in &self.productions {
            for word in rhs {
                if word.is_empty() && nullable.insert(lhs) {
                    work_stack.push(lhs);
                }

                for nt in word.iter().filter_map(ProductionSymbol::as_non_terminal) {
                    occurrences.entry(nt).or_default().push((lhs, word));
                }
            }
        }

        while let Some(nt) = work_stack.pop() {
            for &(lhs, word) in occurrences.get(nt).into_iter().flatten() {
                if nullable.contains(lhs) {
                    continue;
                }

                let is_lhs_nullable = word.iter().all(|symbol| {
                    symbol
                        .as_non_terminal()
                        .is_some_and(|nt| nullable.contains(nt))
                });

                if is_lhs_nullable {
                    trace!("{lhs} is nullable through {lhs} → {word}");

                    nullable.insert(lhs);
                    work_stack.push(lhs);
                }
            }
        }

        nullable.into_iter().cloned().collect()
    }

    /// An equivalent grammar without ε productions. With
    /// [`StartErasure::Retain`] a nullable start symbol keeps one `S → ε`.
    pub fn without_erasing_productions(&self, start_erasure: StartErasure) -> Self {
        let nullable = self.nullable_non_terminals();
        let mut productions = IndexMap::with_capacity(self.productions.len());

        for (lhs, rhs) in &self.productions {
            let mut next_productions = IndexSet::new();

            for word in rhs.iter().filter(|word| !word.is_empty()) {
                let words = word
                    .iter()
                    .cloned()
                    .map(|symbol| {
                        let is_nullable = symbol
                            .as_non_terminal()
                            .is_some_and(|nt| nullable.contains(nt));

                        if is_nullable {
                            vec![Some(symbol), None]
                        } else {
                            vec![Some(symbol)]
                        }
                    })
                    .multi_cartesian_product()
                    .filter_map(|word| {
                        let word = word.into_iter().flatten().collect::<Word<_>>();
                        if word.is_empty() {
                            None
                        } else {
                            Some(word)
                        }
                    });

                next_productions.extend(words);
            }

            if lhs == &self.start_symbol
                && start_erasure == StartErasure::Retain
                && nullable.contains(lhs)
            {
                next_productions.insert(Word::empty());
            }

            if !next_productions.is_empty() {
                productions.insert(lhs.clone(), next_productions);
            }
        }

        let grammar = self.with_productions(productions);

        debug!(
            "removed ε productions: {} nullable, {} → {} productions",
            nullable.len(),
            self.production_count(),
            grammar.production_count()
        );

        grammar
    }
}
