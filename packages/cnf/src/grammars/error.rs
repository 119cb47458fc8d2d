use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[display("symbol names must not be empty")]
    EmptySymbolName,

    #[display("symbol `{symbol}` is declared both as a terminal and as a non-terminal")]
    AlphabetOverlap { symbol: String },

    #[display("symbol `{symbol}` has the shape `{prefix}<n>` reserved for introduced non-terminals")]
    SymbolCollision { symbol: String, prefix: String },

    #[display("no productions for the start symbol `{start_symbol}`")]
    EmptyGrammar { start_symbol: String },

    #[display("start symbol `{start_symbol}` is not a non-terminal of the grammar")]
    UnknownStartSymbol { start_symbol: String },

    #[display("symbol `{symbol}` in a production of `{lhs}` is neither a terminal nor a non-terminal")]
    UndefinedSymbol { symbol: String, lhs: String },

    #[display("production `{lhs} → {word}` is not in Chomsky normal form: {reason}")]
    NotInNormalForm {
        lhs: String,
        word: String,
        reason: String,
    },
}
