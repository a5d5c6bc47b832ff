use rand::Rng;
use rand::seq::IndexedRandom;

use super::interner::TokenId;
use super::node::ResolvedNode;

/// Set of transitionable keys: nodes with at least one outgoing edge.
///
/// Built once right after freezing. Keys are sorted by id, which makes
/// a seeded uniform pick reproducible regardless of hash map ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyIndex {
	keys: Vec<TokenId>,
}

impl KeyIndex {
	/// Collects every key whose resolved node has at least one bucket.
	pub fn build<'a, I>(nodes: I) -> Self
	where
		I: IntoIterator<Item = (&'a TokenId, &'a ResolvedNode)>,
	{
		let mut keys: Vec<TokenId> = nodes
			.into_iter()
			.filter(|(_, node)| !node.is_empty())
			.map(|(key, _)| *key)
			.collect();
		keys.sort_unstable();
		Self { keys }
	}

	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// O(1) indexed access.
	pub fn get(&self, index: usize) -> Option<TokenId> {
		self.keys.get(index).copied()
	}

	pub fn contains(&self, key: TokenId) -> bool {
		self.keys.binary_search(&key).is_ok()
	}

	pub fn iter(&self) -> impl Iterator<Item = TokenId> + '_ {
		self.keys.iter().copied()
	}

	/// Picks a key uniformly at random, or `None` if the index is empty.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<TokenId> {
		self.keys.choose(rng).copied()
	}
}
