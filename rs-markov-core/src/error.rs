use thiserror::Error;

/// Errors raised while building, training or sampling a Markov model.
///
/// Only structural problems are errors. Unseen contexts during generation
/// and seeds shorter than the window are absorbed by the generator.
#[derive(Error, Debug)]
pub enum ModelError {
	#[error("window length must be >= 1, got {0}")]
	InvalidWindowLength(usize),

	#[error("insufficient data: corpus needs at least {required} characters, got {available}")]
	InsufficientData { required: usize, available: usize },

	#[error("window length mismatch: expected {expected}, got {got}")]
	WindowLengthMismatch { expected: usize, got: usize },

	#[error("model has pending counts, call finalize_probabilities() before generating")]
	NotFinalized,

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
