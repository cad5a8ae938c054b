//! Parse tree and syntax definitions for Soluna.
//!
//! This crate defines the concrete parse tree produced by the parser
//! and consumed by the analysis session.

mod ast;

pub use ast::*;
