use log::{trace, warn};
use rand::Rng;

use super::chain::Chain;
use super::interner::TokenId;
use crate::error::{ChainError, Result};

/// Moves from `current` to its next state.
///
/// - If `current` has outgoing edges, a uniform `r` in `[0, 1)` selects
///   the neighbour whose bucket contains it.
/// - Otherwise the walk teleports to a uniformly chosen transitionable key.
///
/// The next state depends on `current` only.
///
/// # Errors
/// - `ChainError::NoTransitionableKeys` if a teleport is needed on a chain without edges
/// - `ChainError::UncoveredSample` if the drawn value matches no bucket
pub fn step<R: Rng + ?Sized>(chain: &Chain, current: TokenId, rng: &mut R) -> Result<TokenId> {
	match chain.node(current) {
		Some(node) if !node.is_empty() => {
			let r: f64 = rng.random();
			node.select(r).ok_or(ChainError::UncoveredSample(r))
		}
		_ => {
			trace!("dead end at {}, teleporting", current);
			chain.keys().choose(rng).ok_or(ChainError::NoTransitionableKeys)
		}
	}
}

/// Generates a random walk of exactly `length` tokens starting at `start`.
///
/// `start` is always the first element. A dead-end start is accepted and
/// left through the teleport fallback, as is every later dead end, so the
/// walk never stops early.
///
/// # Errors
/// - `ChainError::UnknownTokenId` if `start` is not a token of `chain`
/// - any error of `step`
pub fn generate_walk<R: Rng + ?Sized>(chain: &Chain, start: TokenId, length: usize, rng: &mut R) -> Result<Vec<TokenId>> {
	if length == 0 {
		return Ok(Vec::new());
	}
	if !chain.interner().contains(start) {
		return Err(ChainError::UnknownTokenId(start));
	}
	if !chain.is_transitionable(start) {
		warn!("walk starts on dead end {:?}", chain.text(start).unwrap_or_default());
	}

	let mut walk = Vec::with_capacity(length);
	let mut current = start;
	walk.push(current);
	for _ in 1..length {
		current = step(chain, current, rng)?;
		walk.push(current);
	}
	Ok(walk)
}

/// Renders a walk as whitespace-joined text ending with a line break.
pub fn render<S: AsRef<str>>(words: &[S]) -> String {
	let mut text = words.iter().map(|word| word.as_ref()).collect::<Vec<&str>>().join(" ");
	text.push('\n');
	text
}
