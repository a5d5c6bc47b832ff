use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Handle to an interned token text.
///
/// Two `TokenId`s from the same `Interner` are equal if and only if
/// their texts are equal. The id is only meaningful for the interner
/// that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(u32);

impl TokenId {
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

impl fmt::Display for TokenId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Owning store of canonical token texts.
///
/// Each distinct text is allocated exactly once; the lookup table and
/// the id table share that single allocation.
///
/// ## Invariants
/// - `texts[id.index()]` is the text of `id`
/// - `lookup[text]` is the id whose text is `text`
#[derive(Debug, Default)]
pub struct Interner {
	texts: Vec<Rc<str>>,
	lookup: HashMap<Rc<str>, TokenId>,
}

impl Interner {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the canonical id for `text`, storing it on first sight.
	pub fn intern(&mut self, text: &str) -> TokenId {
		if let Some(id) = self.lookup.get(text) {
			return *id;
		}

		let id = TokenId(u32::try_from(self.texts.len()).expect("interner exceeded u32::MAX entries"));
		let canonical: Rc<str> = Rc::from(text);
		self.texts.push(Rc::clone(&canonical));
		self.lookup.insert(canonical, id);
		id
	}

	/// Returns the id of an already interned text.
	pub fn get(&self, text: &str) -> Option<TokenId> {
		self.lookup.get(text).copied()
	}

	/// Returns the text behind `id`, or `None` if `id` is not from this interner.
	pub fn resolve(&self, id: TokenId) -> Option<&str> {
		self.texts.get(id.index()).map(|text| &**text)
	}

	pub fn contains(&self, id: TokenId) -> bool {
		id.index() < self.texts.len()
	}

	pub fn len(&self) -> usize {
		self.texts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.texts.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_text_same_id() {
		let mut interner = Interner::new();
		let a = interner.intern("the");
		let b = interner.intern("cat");
		let c = interner.intern("the");
		assert_eq!(a, c);
		assert_ne!(a, b);
		assert_eq!(interner.len(), 2);
	}

	#[test]
	fn single_allocation_per_text() {
		let mut interner = Interner::new();
		let id = interner.intern("mat");
		interner.intern("mat");
		// One handle in `texts`, one in `lookup`
		assert_eq!(Rc::strong_count(&interner.texts[id.index()]), 2);
	}

	#[test]
	fn resolve_round_trips_and_rejects_foreign_ids() {
		let mut interner = Interner::new();
		let id = interner.intern("on");
		assert_eq!(interner.resolve(id), Some("on"));
		assert_eq!(interner.get("on"), Some(id));
		assert_eq!(interner.get("off"), None);
		assert_eq!(interner.resolve(TokenId(7)), None);
		assert!(!interner.contains(TokenId(7)));
	}
}
