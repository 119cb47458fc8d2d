//! Conversion of context-free grammars to Chomsky normal form.
//!
//! A [`grammar::ContextFreeGrammar`] is built and validated with a
//! [`grammar::GrammarBuilder`], then run through four passes that each return
//! a new grammar: ε removal, unit removal, terminal isolation and
//! binarization. [`grammar::Conversion`] keeps every intermediate result.

pub mod grammar;
pub mod grammars;
pub mod language;
