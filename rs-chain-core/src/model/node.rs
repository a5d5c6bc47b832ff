use std::collections::HashMap;

use super::interner::TokenId;

/// Build-phase node: running frequency counts of outgoing edges.
///
/// Neighbours are kept in first-seen order so that the bucket layout
/// produced by `resolve` is fixed for a given input.
///
/// ## Invariants
/// - Each neighbour appears once in `neighbours`
/// - Every count is >= 1 once `record` returns
/// - `total` equals the sum of all counts
#[derive(Clone, Debug, Default)]
pub struct AccumulatingNode {
	neighbours: Vec<(TokenId, u32)>,
	positions: HashMap<TokenId, usize>,
	total: u64,
}

impl AccumulatingNode {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of the edge toward `target`.
	///
	/// A new neighbour is inserted with a count of 0 before being incremented,
	/// so the distinct-neighbour count grows once per new neighbour while the
	/// total grows on every call.
	pub fn record(&mut self, target: TokenId) {
		let position = match self.positions.get(&target) {
			Some(position) => *position,
			None => {
				self.neighbours.push((target, 0));
				let position = self.neighbours.len() - 1;
				self.positions.insert(target, position);
				position
			}
		};
		self.neighbours[position].1 += 1;
		self.total += 1;
	}

	/// Total number of recorded outgoing edges, repeats included.
	pub fn total(&self) -> u64 {
		self.total
	}

	/// Number of distinct neighbours.
	pub fn unique(&self) -> usize {
		self.neighbours.len()
	}

	/// Observed count of the edge toward `target` (0 if never seen).
	pub fn frequency(&self, target: TokenId) -> u32 {
		self.positions
			.get(&target)
			.map_or(0, |position| self.neighbours[*position].1)
	}

	/// Freezes the counts into cumulative-probability buckets.
	///
	/// Consumes the node: the frequency map does not outlive the conversion.
	pub fn resolve(self) -> ResolvedNode {
		let total = self.total as f64;
		let mut sum: u64 = 0;

		let mut buckets: Vec<Bucket> = self
			.neighbours
			.into_iter()
			.map(|(neighbour, frequency)| {
				let lower = sum as f64 / total;
				sum += u64::from(frequency);
				let upper = sum as f64 / total;
				Bucket { lower, upper, neighbour }
			})
			.collect();

		// Absorb summation drift so every r in [0, 1) hits a bucket
		if let Some(last) = buckets.last_mut() {
			last.upper = last.upper.max(1.0);
		}

		ResolvedNode { buckets: buckets.into_boxed_slice() }
	}
}

/// A sub-interval `[lower, upper)` of `[0, 1)` mapped to one neighbour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bucket {
	lower: f64,
	upper: f64,
	neighbour: TokenId,
}

impl Bucket {
	pub fn lower(&self) -> f64 {
		self.lower
	}

	pub fn upper(&self) -> f64 {
		self.upper
	}

	pub fn width(&self) -> f64 {
		self.upper - self.lower
	}

	pub fn neighbour(&self) -> TokenId {
		self.neighbour
	}
}

/// Frozen node: immutable buckets sorted by lower bound.
///
/// ## Invariants
/// - Buckets are contiguous: `buckets[i].upper == buckets[i + 1].lower`
/// - The first lower bound is 0.0 and the last upper bound is >= 1.0
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedNode {
	buckets: Box<[Bucket]>,
}

impl ResolvedNode {
	pub fn buckets(&self) -> &[Bucket] {
		&self.buckets
	}

	pub fn len(&self) -> usize {
		self.buckets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}

	/// Returns the neighbour whose bucket contains `r`.
	///
	/// Uses a binary search with an inclusive upper bound: a value equal
	/// to some bucket's upper bound selects that bucket.
	/// Returns `None` only if the node has no bucket or `r` is above 1.0.
	pub fn select(&self, r: f64) -> Option<TokenId> {
		let position = self.buckets.partition_point(|bucket| bucket.upper < r);
		self.buckets.get(position).map(Bucket::neighbour)
	}
}
