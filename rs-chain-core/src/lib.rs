//! Token-level Markov chain text generation library.
//!
//! This crate provides a first-order Markov chain over lexer tokens, including:
//! - A small lexer producing typed tokens from raw text
//! - String interning so every distinct token text is one graph node
//! - Frequency accumulation followed by a one-shot freeze into
//!   cumulative-probability buckets
//! - Seedable random walks with a teleport fallback on dead ends
//!
//! The typical flow is `tokenize` -> `GraphBuilder` -> `Chain` -> walk.

/// Crate-wide error type.
pub mod error;

/// Bounded input reading.
pub mod io;

/// Lexer and token stream.
pub mod token;

/// Markov chain model: interning, graph building, freezing and walking.
pub mod model;

pub use error::{ChainError, Result};
