//! Top-level module for the word-adjacency generation system.
//!
//! This module provides the n-gram adjacency model and its traversal
//! operations, including:
//! - The canonical-key adjacency model (`MarkovModel`)
//! - Per-key statistics (`Node`)
//! - Weighted-random traversal (`walker`: next, prev, forward, backward,
//!   fill, word, respond)

/// The adjacency model: construction, seeding (text and streams), search,
/// and node access.
pub mod markov_model;

/// Per-key aggregated statistics (occurrence count, surface forms,
/// successor/predecessor frequency tables).
///
/// Nodes are handed out read-only; mutation happens only through seeding.
pub mod node;

/// Traversal engine layered on the model.
///
/// Single steps (`next`/`prev`), bounded walks (`forward`/`backward`),
/// bidirectional expansion (`fill`), and the high-level `respond`.
pub mod walker;
