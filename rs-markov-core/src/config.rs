use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::generator::Generator;
use crate::model::markov_model::MarkovModel;

/// Parameters needed to build a model and its generator.
///
/// Missing fields fall back to [`ModelConfig::default`] when deserialized,
/// so a query string like `window_length=6` is a valid config.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ModelConfig {
	/// Number of context characters (>= 1).
	pub window_length: usize,

	/// Fixed sampling seed for reproducible output, `None` for OS randomness.
	pub seed: Option<u64>,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self { window_length: 4, seed: None }
	}
}

impl ModelConfig {
	/// Builds an empty model with the configured window length.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if `window_length` is 0.
	pub fn build_model(&self) -> Result<MarkovModel> {
		MarkovModel::new(self.window_length)
	}

	/// Builds a generator over `model`, seeded if `seed` is set.
	pub fn generator<'m>(&self, model: &'m MarkovModel) -> Generator<'m, StdRng> {
		match self.seed {
			Some(seed) => Generator::seeded(model, seed),
			None => Generator::from_os_rng(model),
		}
	}
}
