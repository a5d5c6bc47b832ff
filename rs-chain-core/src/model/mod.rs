//! Top-level module for the token Markov chain.
//!
//! The chain is built in two phases:
//! - `GraphBuilder` accumulates edge frequencies (`AccumulatingNode`)
//! - `GraphBuilder::freeze` turns them into cumulative buckets (`ResolvedNode`)
//!   and produces an immutable `Chain`
//!
//! Walks over a `Chain` are driven by an explicit random source.

/// Frozen, read-only Markov chain.
pub mod chain;

/// Generation parameters (length, seed, start policy, edge direction).
pub mod generation_input;

/// Edge accumulation and the one-shot freeze.
pub mod graph_builder;

/// Canonical storage of token texts.
pub mod interner;

/// Set of nodes with at least one outgoing edge.
pub mod key_index;

/// Build-phase and frozen node representations.
pub mod node;

/// Random walk over a frozen chain.
pub mod walk;
