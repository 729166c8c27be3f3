use std::borrow::Borrow;
use std::fmt;

/// Fixed-length character context used as a model key.
///
/// A `Window` is created once and never mutated. Equality and hashing are
/// structural over the characters, and the hash matches the one of the
/// underlying `[char]`, so a model keyed by `Window` can be probed with a
/// plain slice (see the `Borrow` impl) without building a key.
///
/// # Invariants
/// - The length is fixed at creation
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Window(Box<[char]>);

impl Window {
	/// Creates a window holding a copy of `chars`.
	pub fn new(chars: &[char]) -> Self {
		Self(chars.into())
	}

	/// Returns the trailing `len` characters of `text` as a window.
	///
	/// Returns `None` if `text` has fewer than `len` characters.
	/// UTF-8 safe: counts characters, not bytes.
	pub fn trailing(text: &str, len: usize) -> Option<Self> {
		let chars: Vec<char> = text.chars().collect();
		if chars.len() < len {
			return None;
		}
		Some(Self::new(&chars[chars.len() - len..]))
	}

	/// Number of characters in the window.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_slice(&self) -> &[char] {
		&self.0
	}
}

impl Borrow<[char]> for Window {
	fn borrow(&self) -> &[char] {
		&self.0
	}
}

impl fmt::Display for Window {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for c in self.0.iter() {
			write!(f, "{c}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	#[test]
	fn test_trailing_takes_last_chars() {
		let window = Window::trailing("héllo", 3).unwrap();
		assert_eq!(window.as_slice(), &['l', 'l', 'o']);
		assert_eq!(window.to_string(), "llo");
	}

	#[test]
	fn test_trailing_too_short() {
		assert!(Window::trailing("ab", 3).is_none());
	}

	#[test]
	fn test_lookup_by_slice() {
		let mut map = HashMap::new();
		map.insert(Window::new(&['a', 'b']), 1);
		assert_eq!(map.get(&['a', 'b'][..]), Some(&1));
		assert_eq!(map.get(&['b', 'a'][..]), None);
	}
}
