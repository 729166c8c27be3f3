//! Character-level Markov text generation library.
//!
//! This crate provides a fixed-order Markov model over characters:
//! - Training from a corpus with a sliding context window
//! - Finalized per-window probability distributions
//! - Weighted random generation with an injectable random source
//! - Small I/O helpers to load corpora from disk
//!
//! ```
//! use rs_markov_core::config::ModelConfig;
//! use rs_markov_core::model::trainer::train;
//!
//! # fn main() -> rs_markov_core::error::Result<()> {
//! let config = ModelConfig { window_length: 3, seed: Some(42) };
//! let mut model = config.build_model()?;
//! train(&mut model, "abcabcabcabc".chars())?;
//! let text = config.generator(&model).generate("abc", 6)?;
//! assert_eq!(text, "abcabcabc");
//! # Ok(())
//! # }
//! ```

/// Markov model, training and generation.
pub mod model;

/// Model and generator parameters.
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (corpus loading, file listing).
pub mod io;
