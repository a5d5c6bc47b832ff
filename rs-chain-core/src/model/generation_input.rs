use rand::SeedableRng;
use rand::rngs::StdRng;

use super::graph_builder::EdgeDirection;
use crate::error::{ChainError, Result};

/// Default number of tokens in a generated walk.
pub const DEFAULT_LENGTH: usize = 50;

/// Upper bound accepted for the walk length.
pub const MAX_LENGTH: usize = 1_000_000;

/// Strategy used to select the first token of a walk.
///
/// # Variants
/// - `First`: the first token of the input text.
/// - `Random`: a uniformly chosen transitionable key.
/// - `Custom(String)`: the given token text, which must be part of the chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StartToken {
	#[default]
	First,
	Random,
	Custom(String),
}

/// Parameters for building a chain and generating a walk from it.
///
/// # Invariants
/// - `length` is in `1..=MAX_LENGTH`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Number of tokens to generate.
	length: usize,

	/// Seed of the random source; `None` draws one from the OS.
	pub seed: Option<u64>,

	/// How the walk starts.
	pub start: StartToken,

	/// Edge direction used while building the chain.
	pub direction: EdgeDirection,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			seed: None,
			start: StartToken::First,
			direction: EdgeDirection::Forward,
		}
	}
}

impl GenerationInput {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn length(&self) -> usize {
		self.length
	}

	/// Sets the walk length.
	///
	/// # Errors
	/// Returns an error if `length` is 0 or above `MAX_LENGTH`.
	pub fn set_length(&mut self, length: usize) -> Result<()> {
		if !(1..=MAX_LENGTH).contains(&length) {
			return Err(ChainError::InvalidConfig(format!(
				"length must be between 1 and {}, got {}",
				MAX_LENGTH, length
			)));
		}
		self.length = length;
		Ok(())
	}

	/// Parses a start policy: `first`, `random` or `custom:<text>`.
	pub fn set_start(&mut self, value: &str) -> Result<()> {
		const PREFIX: &str = "custom:";
		self.start = match value {
			s if s.eq_ignore_ascii_case("first") => StartToken::First,
			s if s.eq_ignore_ascii_case("random") => StartToken::Random,
			s if s.get(..PREFIX.len()).is_some_and(|p| p.eq_ignore_ascii_case(PREFIX)) => {
				let text = &s[PREFIX.len()..];
				if text.is_empty() {
					return Err(ChainError::InvalidConfig("custom start cannot be empty".to_owned()));
				}
				StartToken::Custom(text.to_owned())
			}
			_ => {
				return Err(ChainError::InvalidConfig(
					"start must be 'first', 'random' or 'custom:<token>'".to_owned(),
				));
			}
		};
		Ok(())
	}

	/// Parses an edge direction: `forward` or `reverse`.
	pub fn set_direction(&mut self, value: &str) -> Result<()> {
		self.direction = match value.to_lowercase().as_str() {
			"forward" => EdgeDirection::Forward,
			"reverse" => EdgeDirection::Reverse,
			_ => {
				return Err(ChainError::InvalidConfig(
					"direction must be 'forward' or 'reverse'".to_owned(),
				));
			}
		};
		Ok(())
	}

	/// Applies one `key=value` argument.
	///
	/// Recognized keys: `length`, `seed`, `start`, `direction`.
	pub fn apply_arg(&mut self, arg: &str) -> Result<()> {
		let (key, value) = arg
			.split_once('=')
			.ok_or_else(|| ChainError::InvalidConfig(format!("expected key=value, got '{}'", arg)))?;

		match key {
			"length" => {
				let length = value
					.parse::<usize>()
					.map_err(|_| ChainError::InvalidConfig(format!("length must be an integer, got '{}'", value)))?;
				self.set_length(length)
			}
			"seed" => {
				let seed = value
					.parse::<u64>()
					.map_err(|_| ChainError::InvalidConfig(format!("seed must be an integer, got '{}'", value)))?;
				self.seed = Some(seed);
				Ok(())
			}
			"start" => self.set_start(value),
			"direction" => self.set_direction(value),
			_ => Err(ChainError::InvalidConfig(format!("unknown option '{}'", key))),
		}
	}

	/// Builds the random source: seeded if `seed` is set, from OS entropy otherwise.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}
