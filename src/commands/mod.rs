//! Command implementations
//!
//! - `porcelain`: the engine operations, implemented on `Repository` one
//!   file per command
//! - `parser`: the line tokenizer and command grammar
//! - `shell`: the thin adapter that parses typed lines, drives the engine,
//!   and renders results to a writer

pub mod parser;
pub mod porcelain;
pub mod shell;
