use std::collections::VecDeque;
use std::path::Path;

use crate::error::{ModelError, Result};
use crate::io::read_corpus;

use super::markov_model::MarkovModel;

/// Counters describing one training pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingSummary {
	/// Characters consumed from the corpus.
	pub characters: usize,
	/// Transitions recorded (`characters - window_length`).
	pub transitions: usize,
	/// Distinct windows in the trained model.
	pub windows: usize,
}

/// Trains `model` from a character stream.
///
/// A window of the first `window_length` characters slides over the
/// corpus. For each following character `c`, the transition
/// `window -> c` is recorded, then `c` enters the window and its oldest
/// character leaves. Probabilities are finalized once at the end.
///
/// # Errors
/// Returns `InsufficientData` if the corpus has fewer than
/// `window_length + 1` characters.
///
/// # Notes
/// - The model is reset before training: counts from a previous call do
///   not accumulate.
/// - The length check happens before the reset, so a failed call leaves
///   the previous model untouched.
pub fn train<I>(model: &mut MarkovModel, corpus: I) -> Result<TrainingSummary>
where
	I: IntoIterator<Item = char>,
{
	let window_length = model.window_length();
	let mut chars = corpus.into_iter().peekable();

	let mut window: VecDeque<char> = chars.by_ref().take(window_length).collect();
	if window.len() < window_length || chars.peek().is_none() {
		return Err(ModelError::InsufficientData {
			required: window_length + 1,
			available: window.len(),
		});
	}

	model.reset();

	let mut transitions = 0;
	for c in chars {
		model.record_transition(window.make_contiguous(), c)?;
		window.pop_front();
		window.push_back(c);
		transitions += 1;
	}

	model.finalize_probabilities();

	let summary = TrainingSummary {
		characters: window_length + transitions,
		transitions,
		windows: model.len(),
	};
	log::info!(
		"trained model (window {}): {} characters, {} transitions, {} windows",
		window_length,
		summary.characters,
		summary.transitions,
		summary.windows
	);
	Ok(summary)
}

/// Reads the corpus at `path` and trains `model` from it.
///
/// # Errors
/// Returns `Io` if the file cannot be read, or any error of [`train`].
pub fn train_file<P: AsRef<Path>>(model: &mut MarkovModel, path: P) -> Result<TrainingSummary> {
	let corpus = read_corpus(&path)?;
	log::debug!("read corpus {}", path.as_ref().display());
	train(model, corpus.chars())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_train_counts() {
		let mut model = MarkovModel::new(2).unwrap();
		let summary = train(&mut model, "abab".chars()).unwrap();

		assert_eq!(summary, TrainingSummary { characters: 4, transitions: 2, windows: 2 });
		assert_eq!(model.frequency_table(&['a', 'b']).unwrap().count('a'), 1);
		assert_eq!(model.frequency_table(&['b', 'a']).unwrap().count('b'), 1);
		assert!(model.is_finalized());
	}

	#[test]
	fn test_exact_minimum_corpus() {
		let mut model = MarkovModel::new(3).unwrap();
		let summary = train(&mut model, "abcd".chars()).unwrap();
		assert_eq!(summary.transitions, 1);
		assert_eq!(model.len(), 1);
	}

	#[test]
	fn test_corpus_equal_to_window_is_insufficient() {
		let mut model = MarkovModel::new(3).unwrap();
		let err = train(&mut model, "abc".chars()).unwrap_err();
		assert!(matches!(err, ModelError::InsufficientData { required: 4, available: 3 }));
	}

	#[test]
	fn test_train_file_missing() {
		let mut model = MarkovModel::new(3).unwrap();
		let err = train_file(&mut model, "./does/not/exist.txt").unwrap_err();
		assert!(matches!(err, ModelError::Io(_)));
	}
}
