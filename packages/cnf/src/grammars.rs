pub mod binarize;
pub mod chomsky_normal_form;
pub mod context_free;
pub mod conversion;
pub mod erasing;
pub mod error;
pub mod fresh;
pub mod options;
pub mod terminals;
pub mod types;
pub mod unit;
