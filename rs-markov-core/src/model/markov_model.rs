use std::collections::HashMap;
use std::fmt;

use crate::error::{ModelError, Result};

use super::frequency_table::{Distribution, FrequencyTable};
use super::window::Window;

/// Fixed-order character-level Markov model.
///
/// The `MarkovModel` maps every window of `window_length` characters seen
/// during training to the characters that followed it.
///
/// # Responsibilities
/// - Accumulate raw transition counts per window
/// - Turn the counts into finalized distributions on demand
/// - Serve distributions to the generator
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every key in `tables` and `distributions` has exactly `window_length` characters
/// - `distributions` mirrors `tables` whenever `finalized` is true
#[derive(Clone, Debug)]
pub struct MarkovModel {
	window_length: usize,

	/// Training phase: raw counts.
	tables: HashMap<Window, FrequencyTable>,

	/// Generation phase: finalized probabilities.
	distributions: HashMap<Window, Distribution>,

	/// False as soon as a count changes after the last finalization.
	finalized: bool,
}

impl MarkovModel {
	/// Creates an empty model with contexts of `window_length` characters.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength(window_length));
		}
		Ok(Self {
			window_length,
			tables: HashMap::new(),
			distributions: HashMap::new(),
			finalized: true,
		})
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct windows seen.
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	/// True when the distributions are up to date with the counts.
	pub fn is_finalized(&self) -> bool {
		self.finalized
	}

	/// Records that `window` was followed by `next_char`.
	///
	/// Creates the window entry and the character entry if needed,
	/// preserving first-seen order, then increments the count.
	///
	/// # Errors
	/// Returns `WindowLengthMismatch` if `window` has the wrong length.
	pub fn record_transition(&mut self, window: &[char], next_char: char) -> Result<()> {
		if window.len() != self.window_length {
			return Err(ModelError::WindowLengthMismatch {
				expected: self.window_length,
				got: window.len(),
			});
		}

		// Probe with the slice first, only allocate a key for new windows
		match self.tables.get_mut(window) {
			Some(table) => table.record(next_char),
			None => {
				let mut table = FrequencyTable::new();
				table.record(next_char);
				self.tables.insert(Window::new(window), table);
			}
		}
		self.finalized = false;
		Ok(())
	}

	/// Recomputes the distribution of every window from its counts.
	///
	/// Each window is handled independently. Calling this again without
	/// new counts yields the same values.
	pub fn finalize_probabilities(&mut self) {
		self.distributions = self
			.tables
			.iter()
			.map(|(window, table)| (window.clone(), table.finalize()))
			.collect();
		self.finalized = true;
		log::debug!("finalized {} distributions", self.distributions.len());
	}

	/// Drops all counts and distributions, keeping the window length.
	pub fn reset(&mut self) {
		self.tables.clear();
		self.distributions.clear();
		self.finalized = true;
	}

	/// Raw counts recorded after `window`.
	pub fn frequency_table(&self, window: &[char]) -> Option<&FrequencyTable> {
		self.tables.get(window)
	}

	/// Finalized distribution of `window`.
	///
	/// Returns `None` if the window is unknown. The result may be stale
	/// if [`Self::is_finalized`] is false.
	pub fn distribution(&self, window: &[char]) -> Option<&Distribution> {
		self.distributions.get(window)
	}

	/// Iterates over all known windows, in no particular order.
	pub fn windows(&self) -> impl Iterator<Item = &Window> {
		self.tables.keys()
	}
}

impl fmt::Display for MarkovModel {
	/// One line per finalized window, sorted by window for stable output:
	/// `abc : ((d 2 0.5 0.5) (e 2 0.5 1))`
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut windows: Vec<&Window> = self.distributions.keys().collect();
		windows.sort();
		for window in windows {
			writeln!(f, "{} : {}", window, self.distributions[window])?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_rejects_zero_window() {
		assert!(matches!(MarkovModel::new(0), Err(ModelError::InvalidWindowLength(0))));
	}

	#[test]
	fn test_record_transition() {
		let mut model = MarkovModel::new(2).unwrap();
		model.record_transition(&['a', 'b'], 'c').unwrap();
		model.record_transition(&['a', 'b'], 'c').unwrap();
		model.record_transition(&['a', 'b'], 'd').unwrap();

		assert_eq!(model.len(), 1);
		let table = model.frequency_table(&['a', 'b']).unwrap();
		assert_eq!(table.count('c'), 2);
		assert_eq!(table.count('d'), 1);
		assert!(!model.is_finalized());
		assert!(model.distribution(&['a', 'b']).is_none());
	}

	#[test]
	fn test_record_transition_wrong_length() {
		let mut model = MarkovModel::new(3).unwrap();
		let err = model.record_transition(&['a', 'b'], 'c').unwrap_err();
		assert!(matches!(err, ModelError::WindowLengthMismatch { expected: 3, got: 2 }));
		assert!(model.is_empty());
	}

	#[test]
	fn test_finalize_then_record_marks_stale() {
		let mut model = MarkovModel::new(1).unwrap();
		model.record_transition(&['a'], 'b').unwrap();
		model.finalize_probabilities();
		assert!(model.is_finalized());

		model.record_transition(&['a'], 'c').unwrap();
		assert!(!model.is_finalized());
		// Stale view until finalized again
		assert_eq!(model.distribution(&['a']).unwrap().len(), 1);

		model.finalize_probabilities();
		assert_eq!(model.distribution(&['a']).unwrap().len(), 2);
	}

	#[test]
	fn test_reset() {
		let mut model = MarkovModel::new(1).unwrap();
		model.record_transition(&['a'], 'b').unwrap();
		model.finalize_probabilities();
		model.reset();
		assert!(model.is_empty());
		assert!(model.distribution(&['a']).is_none());
		assert_eq!(model.window_length(), 1);
	}

	#[test]
	fn test_display() {
		let mut model = MarkovModel::new(1).unwrap();
		model.record_transition(&['b'], 'a').unwrap();
		model.record_transition(&['a'], 'b').unwrap();
		model.finalize_probabilities();
		assert_eq!(model.to_string(), "a : ((b 1 1 1))\nb : ((a 1 1 1))\n");
	}
}
