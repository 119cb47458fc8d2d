use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::grammars::{
    context_free::ContextFreeGrammar,
    types::{Grammar, NonTerminal},
};

impl ContextFreeGrammar {
    /// Non-terminals reachable from `nt` through unit productions alone,
    /// `nt` included, in breadth-first order.
    ///
    /// Each round only expands the symbols first seen in the previous round,
    /// so cycles such as `A → B → A` end the search instead of repeating it.
    pub fn unit_closure(&self, nt: &NonTerminal) -> IndexSet<NonTerminal> {
        let mut unit_closure = IndexSet::new();
        let mut next_closure = IndexSet::from([nt.clone()]);

        loop {
            unit_closure.extend(next_closure.clone());

            let current_closure = next_closure;
            next_closure = IndexSet::new();

            for closure_nt in current_closure {
                if let Some(rhs) = self.productions.get(&closure_nt) {
                    for child_nt in rhs.iter().filter_map(|word| word.as_unit()) {
                        if !unit_closure.contains(child_nt) {
                            next_closure.insert(child_nt.clone());
                        }
                    }
                }
            }

            if next_closure.is_empty() {
                break;
            }
        }

        unit_closure
    }

    /// An equivalent grammar without productions `A → B`.
    ///
    /// `A` receives every non-unit production of every member of its unit
    /// closure. ε is not copied along: only the start symbol can still hold
    /// one, and it keeps its own.
    pub fn without_unit_productions(&self) -> Self {
        let mut productions = IndexMap::with_capacity(self.productions.len());

        for lhs in self.productions.keys() {
            let mut next_productions = IndexSet::new();

            for member in self.unit_closure(lhs) {
                let Some(rhs) = self.productions.get(&member) else {
                    continue;
                };

                next_productions.extend(
                    rhs.iter()
                        .filter(|word| word.as_unit().is_none())
                        .filter(|word| !word.is_empty() || &member == lhs)
                        .cloned(),
                );
            }

            if !next_productions.is_empty() {
                productions.insert(lhs.clone(), next_productions);
            }
        }

        let grammar = self.with_productions(productions);

        debug!(
            "removed unit productions: {} → {} productions",
            self.production_count(),
            grammar.production_count()
        );

        grammar
    }
}
