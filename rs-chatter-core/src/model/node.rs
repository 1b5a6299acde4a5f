use std::collections::HashMap;

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::pick;

/// Aggregated statistics for one canonical n-gram key.
///
/// A `Node` is a position in the adjacency model: it counts how often the
/// key was observed, which literal surface forms produced it, and which
/// canonical keys were seen immediately after and before it.
///
/// Conceptually, this is a node in a Markov chain where outgoing and
/// incoming edges are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate observation counts during seeding
/// - Select surface forms and neighbor keys using weighted random sampling
///
/// ## Invariants
/// - Tables only ever grow; counts are never decremented
/// - The empty-string key in `next` means "end of input observed here",
///   in `prev` it means "start of input observed here"
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Node {
	/// Times this key was observed as a model position.
	count: usize,
	/// Literal, case-preserving n-gram text, by occurrence count.
	forms: HashMap<String, usize>,
	/// Canonical key of the following n-gram, by co-occurrence count.
	next: HashMap<String, usize>,
	/// Canonical key of the preceding n-gram, by co-occurrence count.
	prev: HashMap<String, usize>,
}

impl Node {
	/// Creates the node for a key first seen in trailing position.
	///
	/// Starts at `count = 1` with the end-of-input sentinel present at
	/// weight zero; the seeding pass increments the sentinel right after.
	pub(crate) fn trailing() -> Self {
		Self {
			count: 1,
			forms: HashMap::new(),
			next: HashMap::from([(String::new(), 0)]),
			prev: HashMap::new(),
		}
	}

	/// Records one observation of this key as a model position.
	pub(crate) fn mark_seen(&mut self) {
		self.count += 1;
	}

	/// Records an occurrence of a literal surface form for this key.
	pub(crate) fn record_form(&mut self, form: &str) {
		*self.forms.entry(form.to_owned()).or_insert(0) += 1;
	}

	/// Records a co-occurrence with the following key (`""` = end of input).
	pub(crate) fn record_next(&mut self, key: &str) {
		*self.next.entry(key.to_owned()).or_insert(0) += 1;
	}

	/// Records a co-occurrence with the preceding key (`""` = start of input).
	pub(crate) fn record_prev(&mut self, key: &str) {
		*self.prev.entry(key.to_owned()).or_insert(0) += 1;
	}

	/// Total number of times this key was observed as a model position.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Surface-form frequency table.
	pub fn forms(&self) -> &HashMap<String, usize> {
		&self.forms
	}

	/// Successor-key frequency table.
	pub fn successors(&self) -> &HashMap<String, usize> {
		&self.next
	}

	/// Predecessor-key frequency table.
	pub fn predecessors(&self) -> &HashMap<String, usize> {
		&self.prev
	}

	/// Weighted pick of one surface form; `None` if none were recorded.
	pub fn pick_form(&self, rng: &mut impl Rng) -> Option<&str> {
		pick::weighted(rng, &self.forms).map(String::as_str)
	}

	/// Weighted pick of one successor key, sentinel included.
	pub(crate) fn pick_next(&self, rng: &mut impl Rng) -> Option<&str> {
		pick::weighted(rng, &self.next).map(String::as_str)
	}

	/// Weighted pick of one predecessor key, sentinel included.
	pub(crate) fn pick_prev(&self, rng: &mut impl Rng) -> Option<&str> {
		pick::weighted(rng, &self.prev).map(String::as_str)
	}
}
