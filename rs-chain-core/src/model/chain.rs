use std::collections::HashMap;

use log::debug;
use rand::Rng;

use super::generation_input::{GenerationInput, StartToken};
use super::interner::{Interner, TokenId};
use super::key_index::KeyIndex;
use super::node::ResolvedNode;
use super::walk;
use crate::error::{ChainError, Result};

/// Frozen first-order Markov chain.
///
/// Owns every token text (through its `Interner`), the resolved buckets of
/// each edge source and the set of transitionable keys. A `Chain` is only
/// obtained from `GraphBuilder::freeze` and offers no way to add edges.
#[derive(Debug)]
pub struct Chain {
	interner: Interner,
	nodes: HashMap<TokenId, ResolvedNode>,
	keys: KeyIndex,
	edges: u64,
}

impl Chain {
	pub(crate) fn new(interner: Interner, nodes: HashMap<TokenId, ResolvedNode>, keys: KeyIndex, edges: u64) -> Self {
		Self { interner, nodes, keys, edges }
	}

	pub fn interner(&self) -> &Interner {
		&self.interner
	}

	/// Looks up the id of a token text.
	pub fn token(&self, text: &str) -> Option<TokenId> {
		self.interner.get(text)
	}

	pub fn text(&self, id: TokenId) -> Option<&str> {
		self.interner.resolve(id)
	}

	/// Resolved node of `id`; `None` if `id` was never an edge source.
	pub fn node(&self, id: TokenId) -> Option<&ResolvedNode> {
		self.nodes.get(&id)
	}

	pub fn nodes(&self) -> impl Iterator<Item = (TokenId, &ResolvedNode)> {
		self.nodes.iter().map(|(key, node)| (*key, node))
	}

	pub fn keys(&self) -> &KeyIndex {
		&self.keys
	}

	pub fn is_transitionable(&self, id: TokenId) -> bool {
		self.keys.contains(id)
	}

	/// Number of distinct tokens seen as an edge endpoint.
	pub fn node_count(&self) -> usize {
		self.interner.len()
	}

	pub fn source_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn edge_count(&self) -> u64 {
		self.edges
	}

	/// Performs a single transition from `current`.
	pub fn next<R: Rng + ?Sized>(&self, current: TokenId, rng: &mut R) -> Result<TokenId> {
		walk::step(self, current, rng)
	}

	/// Generates a walk of `length` tokens starting at `start`.
	pub fn walk<R: Rng + ?Sized>(&self, start: TokenId, length: usize, rng: &mut R) -> Result<Vec<TokenId>> {
		walk::generate_walk(self, start, length, rng)
	}

	/// Generates a walk as text, following the parameters of `input`.
	///
	/// # Parameters
	/// - `first`: text of the first input token, used by `StartToken::First`.
	///
	/// # Errors
	/// - `ChainError::UnknownToken` if the start text is not in the chain
	/// - `ChainError::InvalidConfig` if `StartToken::First` is used without `first`
	/// - any error of `generate_walk`
	pub fn generate<R: Rng + ?Sized>(
		&self,
		input: &GenerationInput,
		first: Option<&str>,
		rng: &mut R,
	) -> Result<Vec<&str>> {
		let start = match &input.start {
			StartToken::First => {
				let text = first.ok_or_else(|| {
					ChainError::InvalidConfig("start=first needs the first input token".to_owned())
				})?;
				self.token(text).ok_or_else(|| ChainError::UnknownToken(text.to_owned()))?
			}
			StartToken::Random => self.keys.choose(rng).ok_or(ChainError::NoTransitionableKeys)?,
			StartToken::Custom(text) => self
				.token(text)
				.ok_or_else(|| ChainError::UnknownToken(text.clone()))?,
		};

		self.walk(start, input.length(), rng)?
			.into_iter()
			.map(|id| self.text(id).ok_or(ChainError::UnknownTokenId(id)))
			.collect()
	}

	/// Drops the chain and every token text it owns.
	pub fn release(self) {
		debug!("releasing chain of {} nodes", self.interner.len());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::graph_builder::{EdgeDirection, GraphBuilder};
	use crate::token::tokenize;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn chain(source: &str) -> Chain {
		GraphBuilder::from_stream(&tokenize(source), EdgeDirection::Forward)
			.unwrap()
			.freeze()
	}

	#[test]
	fn sink_tokens_have_no_node() {
		let chain = chain("the cat sat on the mat");
		let mat = chain.token("mat").unwrap();
		assert!(chain.node(mat).is_none());
		assert!(!chain.is_transitionable(mat));
		assert_eq!(chain.text(mat), Some("mat"));
	}

	#[test]
	fn generate_from_first_token() {
		let chain = chain("A B A B A B");
		let mut input = GenerationInput::new();
		input.set_length(4).unwrap();
		let mut rng = StdRng::seed_from_u64(3);
		let words = chain.generate(&input, Some("A"), &mut rng).unwrap();
		assert_eq!(words, vec!["A", "B", "A", "B"]);
	}

	#[test]
	fn generate_from_custom_token() {
		let chain = chain("A B A B A B");
		let mut input = GenerationInput::new();
		input.set_length(3).unwrap();
		input.start = StartToken::Custom("B".to_owned());
		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(chain.generate(&input, None, &mut rng).unwrap(), vec!["B", "A", "B"]);
	}

	#[test]
	fn generate_from_random_key() {
		let chain = chain("one two three");
		let mut input = GenerationInput::new();
		input.start = StartToken::Random;
		let mut rng = StdRng::seed_from_u64(11);
		let words = chain.generate(&input, None, &mut rng).unwrap();
		assert_eq!(words.len(), input.length());
		assert!(["one", "two"].contains(&words[0]));
	}

	#[test]
	fn unknown_custom_start_is_rejected() {
		let chain = chain("A B");
		let mut input = GenerationInput::new();
		input.start = StartToken::Custom("Z".to_owned());
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(
			chain.generate(&input, None, &mut rng),
			Err(ChainError::UnknownToken(text)) if text == "Z"
		));
	}

	#[test]
	fn first_start_without_first_token_is_rejected() {
		let chain = chain("A B");
		let input = GenerationInput::new();
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(
			chain.generate(&input, None, &mut rng),
			Err(ChainError::InvalidConfig(_))
		));
	}
}
