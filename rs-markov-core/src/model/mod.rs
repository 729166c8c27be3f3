//! Top-level module for the character-level Markov model.
//!
//! This module provides:
//! - Fixed-length context keys (`Window`)
//! - Per-window counts and their finalized probabilities (`FrequencyTable`, `Distribution`)
//! - The window-to-distribution model (`MarkovModel`)
//! - Corpus ingestion (`trainer`)
//! - Weighted random text generation (`Generator`)

/// Weighted random walk over a trained model.
///
/// Owns the random source, so output is reproducible with a fixed seed.
pub mod generator;

/// Window-to-distribution mapping with explicit finalization.
pub mod markov_model;

/// Raw next-character counts and the finalized distribution built from them.
///
/// Also holds the inverse-CDF sampling and its fallback character.
pub mod frequency_table;

/// Sliding-window training over a character stream.
pub mod trainer;

/// Immutable fixed-length character context.
pub mod window;
