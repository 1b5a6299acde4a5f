use std::collections::HashMap;
use std::io::Read;

use log::debug;
use rand::Rng;

use serde::{Deserialize, Serialize};

use super::node::Node;
use crate::{io, pick, token};

/// Represents an adjacency model for sequences of word n-grams.
///
/// The `MarkovModel` maps canonical n-gram keys to nodes aggregating
/// occurrence counts, surface forms, and successor/predecessor frequency
/// tables, and allows probabilistic traversal of observed adjacencies.
///
/// # Responsibilities
/// - Build the model from seeded text units or whole character streams
/// - Accumulate adjacency counts for each canonical key
/// - Locate a starting key matching an input phrase (`search`)
/// - Hand out nodes to the traversal operations
///
/// # Invariants
/// - `order` is always >= 1
/// - Each node corresponds to a unique canonical key
/// - Every nonempty key found in a successor table owns a node
/// - Nodes are never deleted and counts never decrease
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MarkovModel {
	/// Number of whitespace-delimited tokens per n-gram window.
	order: usize, // must be >= 1

	/// Mapping from canonical key to its node.
	nodes: HashMap<String, Node>,
}

impl Default for MarkovModel {
	fn default() -> Self {
		Self { order: 1, nodes: HashMap::new() }
	}
}

impl MarkovModel {
	/// Creates a new adjacency model of order `order`.
	///
	/// # Errors
	/// Returns an error if `order < 1`.
	pub fn new(order: usize) -> Result<Self, String> {
		if order < 1 {
			return Err("order must be >= 1".to_owned());
		}
		Ok(Self { order, nodes: HashMap::new() })
	}

	/// Returns the configured n-gram order.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct canonical keys currently in the model.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the model holds no keys at all.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Returns the node for a canonical key, if it exists.
	pub fn node(&self, key: &str) -> Option<&Node> {
		self.nodes.get(key)
	}

	/// Ingests one unit of text into the model.
	///
	/// Splits the text on whitespace, strips markup from each token to get
	/// surface forms, groups them into non-overlapping `order`-sized windows
	/// joined by single spaces, and records every consecutive window pair
	/// as an adjacency. A unit producing at most one window carries no
	/// adjacency information and is silently ignored.
	///
	/// # Notes
	/// - Interior positions record their surface form lowercased; the
	///   trailing window records it case-preserved.
	/// - The trailing window gets a node of its own with the end-of-input
	///   sentinel incremented, even though it never appears as a "current"
	///   position.
	pub fn seed(&mut self, text: &str) {
		let forms: Vec<String> = text.split_whitespace().map(token::strip_markup).collect();
		let links: Vec<String> = forms.chunks(self.order).map(|window| window.join(" ")).collect();

		if links.len() <= 1 {
			// A single n-gram alone carries no adjacency information
			return;
		}

		for i in 1..links.len() {
			let word = links[i - 1].to_lowercase();
			let cword = token::normalize(&word);
			let cnext = token::normalize(&links[i]);

			let node = self.nodes.entry(cword).or_default();
			node.mark_seen();
			node.record_form(&word);
			node.record_next(&cnext);
			if i > 1 {
				node.record_prev(&token::normalize(&links[i - 2]));
			} else {
				// Legitimate sequence start
				node.record_prev("");
			}
		}

		// The final window never appears as a "current" position; make sure
		// it still owns a node and mark the end of this unit on it.
		let last = &links[links.len() - 1];
		let clast = token::normalize(last);
		let cprev = token::normalize(&links[links.len() - 2]);

		let node = self.nodes.entry(clast).or_insert_with(Node::trailing);
		node.record_form(last);
		node.record_prev(&cprev);
		node.record_next("");
	}

	/// Ingests a whole character stream, paragraph by paragraph.
	///
	/// The stream is buffered to exhaustion, split into blank-line-delimited
	/// paragraphs, and each paragraph whose trimmed length exceeds one
	/// character is seeded independently. Returns once everything has been
	/// ingested.
	///
	/// # Errors
	/// Propagates I/O errors from the source; ingestion itself cannot fail.
	pub fn seed_reader<R: Read>(&mut self, source: R) -> std::io::Result<()> {
		let paragraphs = io::read_paragraphs(source)?;
		let total = paragraphs.len();

		let mut seeded = 0;
		for paragraph in &paragraphs {
			if paragraph.trim().len() > 1 {
				self.seed(paragraph);
				seeded += 1;
			}
		}
		debug!("seeded {seeded}/{total} paragraphs, {} keys in model", self.nodes.len());
		Ok(())
	}

	/// Locates a starting key matching an input phrase.
	///
	/// Windows the input exactly like seeding does, normalizes each window,
	/// and weighted-picks among the windows present in the model using the
	/// node's total observation count as weight (biasing toward more
	/// frequent positions). Returns `None` if no window matches.
	pub fn search(&self, text: &str, rng: &mut impl Rng) -> Option<String> {
		let words: Vec<&str> = text.split_whitespace().collect();

		let mut groups: HashMap<String, usize> = HashMap::new();
		for window in words.chunks(self.order) {
			let key = token::normalize(&window.join(" "));
			if let Some(node) = self.nodes.get(&key) {
				groups.insert(key, node.count());
			}
		}

		pick::weighted(rng, &groups).cloned()
	}

	/// Returns a uniformly random key from the model.
	///
	/// Useful for starting a traversal when `search` found nothing.
	/// Returns `None` if the model is empty.
	pub fn pick(&self, rng: &mut impl Rng) -> Option<String> {
		pick::uniform(rng, self.nodes.keys()).cloned()
	}
}
