use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::error::{ChainError, Result};

/// Maximum number of bytes read from any input source.
pub const INPUT_CEILING: usize = 555_000;

/// Reads at most `ceiling` bytes from `reader` and returns them as text.
///
/// - Bytes beyond the ceiling are ignored (a warning is logged)
/// - Invalid UTF-8 sequences are replaced, never rejected
///
/// # Errors
/// - `ChainError::EmptyInput` if no byte could be read
/// - `ChainError::Io` if the underlying reader fails
pub fn read_bounded<R: Read>(reader: R, ceiling: usize) -> Result<String> {
	let mut bytes = Vec::with_capacity(ceiling.min(64 * 1024));
	// One extra byte tells a full input apart from a truncated one
	reader.take(ceiling as u64 + 1).read_to_end(&mut bytes)?;

	if bytes.len() > ceiling {
		warn!("input exceeds {} bytes, the rest is ignored", ceiling);
		bytes.truncate(ceiling);
	}
	if bytes.is_empty() {
		return Err(ChainError::EmptyInput);
	}

	debug!("read {} bytes of input", bytes.len());
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads a text file, bounded by `INPUT_CEILING`.
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<String> {
	read_bounded(File::open(filename)?, INPUT_CEILING)
}
