use thiserror::Error;

use crate::model::interner::TokenId;
use crate::token::TokenKind;

/// Errors produced while reading input, building a chain or walking it.
#[derive(Debug, Error)]
pub enum ChainError {
	/// No source text was available to tokenize.
	#[error("Input is empty")]
	EmptyInput,

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// A token kind that carries no text was asked for its text.
	#[error("Token of kind {0:?} has no text")]
	UnrecognizedToken(TokenKind),

	/// A teleport was required but no node has an outgoing edge.
	#[error("No transitionable keys in the chain")]
	NoTransitionableKeys,

	/// A drawn value fell outside every bucket of a resolved node.
	#[error("Sample {0} matched no bucket")]
	UncoveredSample(f64),

	#[error("Token id {0:?} does not belong to this chain")]
	UnknownTokenId(TokenId),

	#[error("Token '{0}' is not part of this chain")]
	UnknownToken(String),

	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),
}

/// Shorthand result type used across the crate.
pub type Result<T> = std::result::Result<T, ChainError>;
