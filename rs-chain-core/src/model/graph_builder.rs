use std::collections::HashMap;

use log::{debug, info};

use super::chain::Chain;
use super::interner::{Interner, TokenId};
use super::key_index::KeyIndex;
use super::node::{AccumulatingNode, ResolvedNode};
use crate::error::Result;
use crate::token::{Token, TokenStream};

/// Which token of an adjacent pair becomes the edge source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeDirection {
	/// Earlier token -> later token (what follows what).
	#[default]
	Forward,
	/// Later token -> earlier token (what precedes what).
	Reverse,
}

/// Mutable, build-phase Markov graph.
///
/// # Responsibilities
/// - Intern every edge endpoint
/// - Accumulate outgoing edge frequencies per source token
/// - Freeze once into an immutable `Chain`
///
/// # Invariants
/// - Every key of `nodes` has recorded at least one edge
/// - Every id stored in `nodes` comes from `interner`
#[derive(Debug, Default)]
pub struct GraphBuilder {
	interner: Interner,
	nodes: HashMap<TokenId, AccumulatingNode>,
	direction: EdgeDirection,
	edges: u64,
}

impl GraphBuilder {
	/// Creates an empty graph recording edges in the `Forward` direction.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_direction(direction: EdgeDirection) -> Self {
		Self { direction, ..Self::default() }
	}

	/// Builds a graph from every adjacent pair of `stream`.
	///
	/// # Errors
	/// Returns `ChainError::UnrecognizedToken` if a paired token has no text.
	pub fn from_stream(stream: &TokenStream, direction: EdgeDirection) -> Result<Self> {
		let mut builder = Self::with_direction(direction);
		builder.add_stream(stream)?;
		Ok(builder)
	}

	pub fn direction(&self) -> EdgeDirection {
		self.direction
	}

	/// Records one occurrence of the edge `source -> target`.
	///
	/// Both texts are interned; the source node is created on first use.
	pub fn record_edge(&mut self, source: &str, target: &str) {
		let source = self.interner.intern(source);
		let target = self.interner.intern(target);
		self.nodes.entry(source).or_default().record(target);
		self.edges += 1;
	}

	/// Records the pair `(earlier, later)` according to the edge direction.
	pub fn record_pair(&mut self, earlier: &str, later: &str) {
		match self.direction {
			EdgeDirection::Forward => self.record_edge(earlier, later),
			EdgeDirection::Reverse => self.record_edge(later, earlier),
		}
	}

	/// Calls `record_pair` once for every adjacent pair of `stream`.
	///
	/// A stream of length <= 1 records nothing.
	pub fn add_stream(&mut self, stream: &TokenStream) -> Result<()> {
		if stream.len() < 2 {
			debug!("stream of {} token(s), no pair to record", stream.len());
			return Ok(());
		}

		let texts = stream.iter().map(Token::text).collect::<Result<Vec<&str>>>()?;
		for pair in texts.windows(2) {
			self.record_pair(pair[0], pair[1]);
		}

		debug!(
			"recorded {} pairs, graph now has {} nodes ({} sources)",
			texts.len() - 1,
			self.node_count(),
			self.source_count()
		);
		Ok(())
	}

	/// Number of distinct token texts seen as an edge endpoint.
	pub fn node_count(&self) -> usize {
		self.interner.len()
	}

	/// Number of tokens with at least one outgoing edge.
	pub fn source_count(&self) -> usize {
		self.nodes.len()
	}

	/// Total number of recorded edges, repeats included.
	pub fn edge_count(&self) -> u64 {
		self.edges
	}

	pub fn is_empty(&self) -> bool {
		self.interner.is_empty()
	}

	pub fn interner(&self) -> &Interner {
		&self.interner
	}

	/// Returns the accumulating node of `text`, if it is an edge source.
	pub fn node(&self, text: &str) -> Option<&AccumulatingNode> {
		let id = self.interner.get(text)?;
		self.nodes.get(&id)
	}

	/// Converts every node to its cumulative buckets and builds the key index.
	///
	/// Consumes the builder: no edge can be added after this point.
	pub fn freeze(self) -> Chain {
		let nodes: HashMap<TokenId, ResolvedNode> = self
			.nodes
			.into_iter()
			.map(|(key, node)| (key, node.resolve()))
			.collect();
		let keys = KeyIndex::build(&nodes);

		info!(
			"chain frozen: {} nodes, {} transitionable, {} edges",
			self.interner.len(),
			keys.len(),
			self.edges
		);
		Chain::new(self.interner, nodes, keys, self.edges)
	}
}
