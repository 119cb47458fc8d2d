use log::debug;
use tabled::{builder::Builder, settings::Style};

use crate::grammars::{
    chomsky_normal_form::ChomskyNormalFormGrammar,
    context_free::ContextFreeGrammar,
    error::GrammarError,
    options::ConversionOptions,
    types::{Grammar, NonTerminal, ProductionWord},
};

/// One run of the normal form pipeline, with every intermediate grammar.
///
/// The passes must run in this order: unit productions are only well defined
/// once ε is gone, and terminals have to be isolated before binarization so
/// that no binary production mixes a terminal with a chain non-terminal.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub original: ContextFreeGrammar,
    pub without_erasing: ContextFreeGrammar,
    pub without_units: ContextFreeGrammar,
    pub isolated: ContextFreeGrammar,
    pub binarized: ContextFreeGrammar,
    pub cnf: ChomskyNormalFormGrammar,
    /// Non-terminals introduced by the run, in the order they were issued.
    pub fresh_symbols: Vec<NonTerminal>,
}

impl Conversion {
    pub fn run(
        cfg: &ContextFreeGrammar,
        options: &ConversionOptions,
    ) -> Result<Self, GrammarError> {
        debug!(
            "converting grammar with start symbol {} ({:?})",
            cfg.start_symbol(),
            options.start_erasure
        );

        let mut fresh = cfg.fresh_symbols();

        let without_erasing = cfg.without_erasing_productions(options.start_erasure);
        let without_units = without_erasing.without_unit_productions();
        let isolated = without_units.with_isolated_terminals(&mut fresh);
        let binarized = isolated.binarized(&mut fresh);
        let cnf = ChomskyNormalFormGrammar::from_normalized(&binarized)?;

        Ok(Conversion {
            original: cfg.clone(),
            without_erasing,
            without_units,
            isolated,
            binarized,
            cnf,
            fresh_symbols: fresh.issued().to_vec(),
        })
    }

    /// The intermediate grammars, labelled, in pipeline order.
    pub fn stages(&self) -> [(&'static str, &ContextFreeGrammar); 5] {
        [
            ("original", &self.original),
            ("without ε productions", &self.without_erasing),
            ("without unit productions", &self.without_units),
            ("isolated terminals", &self.isolated),
            ("binarized", &self.binarized),
        ]
    }

    /// A table with the size of the grammar after every stage.
    pub fn summary(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(
            ["stage", "non-terminals", "terminals", "productions"].map(String::from),
        );

        for (stage, grammar) in self.stages() {
            builder.push_record(size_record(stage, grammar));
        }
        builder.push_record(size_record("Chomsky normal form", &self.cnf));

        let mut table = builder.build();
        table.with(Style::rounded());

        table.to_string()
    }
}

fn size_record<R: ProductionWord>(stage: &str, grammar: &impl Grammar<R>) -> [String; 4] {
    [
        stage.to_owned(),
        grammar.non_terminals().len().to_string(),
        grammar.terminals().len().to_string(),
        grammar.production_count().to_string(),
    ]
}
