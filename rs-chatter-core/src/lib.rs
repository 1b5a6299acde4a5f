//! Word-adjacency text generation library.
//!
//! This crate builds a statistical model of word/n-gram adjacency from
//! ingested text and uses it to produce chatbot-like responses:
//! - Incremental n-gram adjacency model construction (seeding)
//! - Frequency-weighted random traversal (next, prev, forward, backward, fill)
//! - Paragraph splitting for stream ingestion
//! - Sentence shaping for display (capitalization, terminal punctuation)
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core adjacency model and traversal logic.
///
/// This module exposes the model and its traversal interface while keeping
/// internal node bookkeeping constrained to increment-only operations.
pub mod model;

/// Paragraph reader (blank-line-delimited splitting of a character source).
///
/// External collaborator consumed by stream seeding; exposed so callers can
/// pre-split their own input.
pub mod io;

/// Response assembler (capitalization, punctuation, terminal mark).
///
/// External collaborator consuming the model's output sequences.
pub mod sentence;

/// Weighted/uniform random selection helpers.
///
/// Not exposed
pub(crate) mod pick;

/// Token normalization (canonical keys and surface forms).
///
/// Not exposed
pub(crate) mod token;
