use std::fmt;

use serde::Serialize;

/// Character returned by [`Distribution::sample`] when no entry's cumulative
/// probability exceeds the random draw (floating-point rounding near 1.0).
pub const FALLBACK_CHAR: char = ' ';

/// Raw next-character counts observed after one window.
///
/// This is the training half of the two-phase per-window data: counts are
/// accumulated here, then turned into a [`Distribution`] by [`Self::finalize`].
///
/// ## Invariants
/// - Entries keep first-seen order (sampling tie-breaks depend on it)
/// - Each character appears at most once
/// - Each count is strictly positive
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	/// Example: [('e', 42), ('a', 3)]
	counts: Vec<(char, usize)>,
}

impl FrequencyTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self { counts: Vec::new() }
	}

	/// Records one occurrence of `next_char`.
	///
	/// - If the character was already seen, its count is increased.
	/// - Otherwise it is appended with a count of 1.
	pub fn record(&mut self, next_char: char) {
		match self.counts.iter_mut().find(|(c, _)| *c == next_char) {
			Some((_, count)) => *count += 1,
			None => self.counts.push((next_char, 1)),
		}
	}

	/// Occurrence count of `next_char`, 0 if never seen.
	pub fn count(&self, next_char: char) -> usize {
		self.counts
			.iter()
			.find(|(c, _)| *c == next_char)
			.map_or(0, |(_, count)| *count)
	}

	/// Sum of all counts, i.e. how many times the window was followed by a character.
	pub fn total(&self) -> usize {
		self.counts.iter().map(|(_, count)| count).sum()
	}

	/// Number of distinct characters seen after the window.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Computes `p = count / total` and the running `cp` for each entry,
	/// in first-seen order.
	pub fn finalize(&self) -> Distribution {
		let total = self.total();
		if total == 0 {
			return Distribution { entries: Vec::new() };
		}

		let mut cp = 0.0;
		let entries = self
			.counts
			.iter()
			.map(|&(chr, count)| {
				let p = count as f64 / total as f64;
				cp += p;
				CharCount { chr, count, p, cp }
			})
			.collect();

		Distribution { entries }
	}
}

/// One finalized entry of a [`Distribution`].
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct CharCount {
	pub chr: char,
	pub count: usize,
	/// Probability of `chr` after the window.
	pub p: f64,
	/// Cumulative probability up to and including this entry.
	pub cp: f64,
}

impl fmt::Display for CharCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", self.chr, self.count, self.p, self.cp)
	}
}

/// Finalized probability view of a [`FrequencyTable`].
///
/// Only built by [`FrequencyTable::finalize`], so `p` and `cp` are always
/// consistent with the counts they were computed from.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Distribution {
	entries: Vec<CharCount>,
}

impl Distribution {
	/// Entries in first-seen order.
	pub fn entries(&self) -> &[CharCount] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Selects a character for a uniform draw `r` in [0, 1).
	///
	/// Returns the first entry, in first-seen order, whose `cp > r`.
	/// Falls back to [`FALLBACK_CHAR`] if none does.
	pub fn sample(&self, r: f64) -> char {
		match self.entries.iter().find(|entry| entry.cp > r) {
			Some(entry) => entry.chr,
			None => {
				log::warn!("no cumulative probability above {r}, using fallback character");
				FALLBACK_CHAR
			}
		}
	}
}

impl fmt::Display for Distribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{entry}")?;
		}
		write!(f, ")")
	}
}
