use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ModelError, Result};

use super::markov_model::MarkovModel;
use super::window::Window;

/// Walks a trained [`MarkovModel`] to produce new text.
///
/// The random source is owned by the generator, not the model, so the same
/// model can back several generators with independent (or reproducible)
/// randomness.
///
/// # Responsibilities
/// - Start from the trailing window of a seed text
/// - Repeatedly sample the next character from the current window's distribution
/// - Stop at the requested length or at the first unseen window
#[derive(Debug)]
pub struct Generator<'m, R: Rng> {
	model: &'m MarkovModel,
	rng: R,
}

impl<'m, R: Rng> Generator<'m, R> {
	/// Creates a generator drawing from `rng`.
	pub fn with_rng(model: &'m MarkovModel, rng: R) -> Self {
		Self { model, rng }
	}

	/// Generates up to `target_length` characters after `seed_text`.
	///
	/// # Returns
	/// - `seed_text` unchanged if it is shorter than the window length
	/// - `seed_text` followed by the generated characters otherwise; fewer than
	///   `target_length` are appended if an unseen window is reached
	///
	/// # Errors
	/// Returns `NotFinalized` if the model changed since its last finalization.
	///
	/// # Notes
	/// - UTF-8 safe: lengths are in characters.
	pub fn generate(&mut self, seed_text: &str, target_length: usize) -> Result<String> {
		let Some(start) = Window::trailing(seed_text, self.model.window_length()) else {
			return Ok(seed_text.to_owned());
		};
		if !self.model.is_finalized() {
			return Err(ModelError::NotFinalized);
		}

		// No reservation from target_length: generation may stop at the first unseen window
		let mut window: VecDeque<char> = start.as_slice().iter().copied().collect();
		let mut output = String::from(seed_text);

		let mut generated = 0;
		while generated < target_length {
			let Some(distribution) = self.model.distribution(window.make_contiguous()) else {
				log::debug!("unseen window after {generated} of {target_length} characters");
				break;
			};

			let next_char = distribution.sample(self.rng.random::<f64>());
			output.push(next_char);
			window.pop_front();
			window.push_back(next_char);
			generated += 1;
		}

		Ok(output)
	}
}

impl<'m> Generator<'m, StdRng> {
	/// Creates a reproducible generator: same seed, same model, same output.
	pub fn seeded(model: &'m MarkovModel, seed: u64) -> Self {
		Self::with_rng(model, StdRng::seed_from_u64(seed))
	}

	/// Creates a generator seeded from the operating system.
	pub fn from_os_rng(model: &'m MarkovModel) -> Self {
		Self::with_rng(model, StdRng::from_os_rng())
	}
}

#[cfg(test)]
mod tests {
	use rand::RngCore;

	use super::*;
	use crate::model::trainer::train;

	/// Random source replaying fixed `u64` values.
	struct Scripted(Vec<u64>, usize);

	impl RngCore for Scripted {
		fn next_u32(&mut self) -> u32 {
			self.next_u64() as u32
		}

		fn next_u64(&mut self) -> u64 {
			let value = self.0[self.1 % self.0.len()];
			self.1 += 1;
			value
		}

		fn fill_bytes(&mut self, dst: &mut [u8]) {
			for byte in dst {
				*byte = self.next_u64() as u8;
			}
		}
	}

	fn trained(corpus: &str, window_length: usize) -> MarkovModel {
		let mut model = MarkovModel::new(window_length).unwrap();
		train(&mut model, corpus.chars()).unwrap();
		model
	}

	#[test]
	fn test_low_draw_picks_first_seen() {
		// "a" -> 'x' first, then 'y'
		let model = trained("axay", 1);
		let mut generator = Generator::with_rng(&model, Scripted(vec![0], 0));
		assert_eq!(generator.generate("a", 1).unwrap(), "ax");
	}

	#[test]
	fn test_high_draw_picks_last_seen() {
		let model = trained("axay", 1);
		let mut generator = Generator::with_rng(&model, Scripted(vec![u64::MAX], 0));
		assert_eq!(generator.generate("a", 1).unwrap(), "ay");
	}

	#[test]
	fn test_zero_target_length() {
		let model = trained("abcabc", 2);
		let mut generator = Generator::seeded(&model, 1);
		assert_eq!(generator.generate("xab", 0).unwrap(), "xab");
	}

	#[test]
	fn test_huge_target_length_stops_at_dead_end() {
		// "ab" -> 'c', "bc" -> 'd', "cd" is unseen
		let model = trained("abcd", 2);
		let mut generator = Generator::seeded(&model, 1);
		assert_eq!(generator.generate("ab", usize::MAX).unwrap(), "abcd");
		assert_eq!(generator.generate("ab", 1 << 46).unwrap(), "abcd");
	}

	#[test]
	fn test_not_finalized() {
		let mut model = trained("abcabc", 2);
		model.record_transition(&['a', 'b'], 'z').unwrap();
		let mut generator = Generator::seeded(&model, 1);
		assert!(matches!(generator.generate("ab", 3), Err(ModelError::NotFinalized)));
	}
}
