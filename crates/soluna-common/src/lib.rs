//! Common utilities and data structures for Soluna.
//!
//! This crate provides the foundational types used across the analysis
//! engine:
//! - `Position`: line/column/byte-offset source location
//! - `Span`: a half-open range between two positions

mod span;

pub use span::{Position, Span};
