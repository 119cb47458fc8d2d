pub use crate::grammars::{
    chomsky_normal_form::{ChomskyNormalFormGrammar, CnfWord},
    context_free::{ContextFreeGrammar, GrammarBuilder},
    conversion::Conversion,
    error::GrammarError,
    fresh::{FreshSymbols, DEFAULT_FRESH_PREFIX},
    options::{ConversionOptions, StartErasure},
    types::{Grammar, NonTerminal, ProductionSymbol, ProductionWord, Terminal},
};
pub use crate::language::{Symbol, Word, EPSILON};
