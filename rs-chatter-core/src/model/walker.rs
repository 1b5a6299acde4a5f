use std::collections::VecDeque;

use rand::Rng;

use super::markov_model::MarkovModel;

/// One step of traversal: the key moved to and the surface form chosen
/// for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
	pub key: String,
	pub word: String,
}

/// Weighted-random traversal over the adjacency model.
///
/// All operations degrade gracefully: absent keys, exhausted tables, and
/// the end/start-of-input sentinels yield `None` or empty sequences, never
/// errors.
impl MarkovModel {
	/// Takes one weighted step forward from `key`.
	///
	/// Picks a successor key (sentinel included, weights are co-occurrence
	/// counts); the empty-string sentinel means no further forward motion.
	/// On success also picks a surface form from the successor's node.
	pub fn next(&self, key: &str, rng: &mut impl Rng) -> Option<Step> {
		let node = self.node(key)?;
		let next_key = node.pick_next(rng)?.to_owned();
		if next_key.is_empty() {
			return None;
		}
		let word = self.node(&next_key)?.pick_form(rng)?.to_owned();
		Some(Step { key: next_key, word })
	}

	/// Takes one weighted step backward from `key`; symmetric to [`Self::next`].
	pub fn prev(&self, key: &str, rng: &mut impl Rng) -> Option<Step> {
		let node = self.node(key)?;
		let prev_key = node.pick_prev(rng)?.to_owned();
		if prev_key.is_empty() {
			return None;
		}
		let word = self.node(&prev_key)?.pick_form(rng)?.to_owned();
		Some(Step { key: prev_key, word })
	}

	/// Walks forward from `key`, collecting surface forms.
	///
	/// Stops when `next` fails or the result reaches `limit`
	/// (`limit == 0` means unbounded).
	pub fn forward(&self, key: &str, limit: usize, rng: &mut impl Rng) -> Vec<String> {
		let mut res = Vec::new();
		let mut cur = key.to_owned();
		while limit == 0 || res.len() < limit {
			match self.next(&cur, rng) {
				Some(step) => {
					cur = step.key;
					res.push(step.word);
				}
				None => break,
			}
		}
		res
	}

	/// Walks backward from `key`, collecting surface forms.
	///
	/// The returned sequence reads in forward chronological order.
	pub fn backward(&self, key: &str, limit: usize, rng: &mut impl Rng) -> Vec<String> {
		let mut res = VecDeque::new();
		let mut cur = key.to_owned();
		while limit == 0 || res.len() < limit {
			match self.prev(&cur, rng) {
				Some(step) => {
					cur = step.key;
					res.push_front(step.word);
				}
				None => break,
			}
		}
		res.into()
	}

	/// Bidirectional expansion from `key` up to `limit` surface forms.
	///
	/// Starts with one weighted surface form for the anchor key, then
	/// alternates one backward and one forward step, prepending/appending
	/// on success, until both directions are exhausted or the limit is hit.
	/// Empty if the key is absent or has no surface forms.
	pub fn fill(&self, key: &str, limit: usize, rng: &mut impl Rng) -> Vec<String> {
		let Some(node) = self.node(key) else {
			return Vec::new();
		};
		let Some(anchor) = node.pick_form(rng) else {
			return Vec::new();
		};

		let mut res = VecDeque::new();
		res.push_back(anchor.to_owned());
		if limit != 0 && res.len() >= limit {
			return res.into();
		}

		let mut back_cursor = Some(key.to_owned());
		let mut front_cursor = Some(key.to_owned());

		while back_cursor.is_some() || front_cursor.is_some() {
			if let Some(cur) = back_cursor.take() {
				if let Some(step) = self.prev(&cur, rng) {
					back_cursor = Some(step.key);
					res.push_front(step.word);
					if limit != 0 && res.len() >= limit {
						break;
					}
				}
			}

			if let Some(cur) = front_cursor.take() {
				if let Some(step) = self.next(&cur, rng) {
					front_cursor = Some(step.key);
					res.push_back(step.word);
					if limit != 0 && res.len() >= limit {
						break;
					}
				}
			}
		}

		res.into()
	}

	/// Weighted pick of a surface form for `key`; `None` if no node.
	pub fn word(&self, key: &str, rng: &mut impl Rng) -> Option<String> {
		self.node(key)?.pick_form(rng).map(str::to_owned)
	}

	/// Produces a response to an input phrase.
	///
	/// Anchors on `search(text)`, falling back to a uniformly random key,
	/// fills around the anchor up to `limit`, and reduces each n-gram to a
	/// single token (the second whitespace-separated token when the window
	/// holds more than one, the first otherwise).
	pub fn respond(&self, text: &str, limit: usize, rng: &mut impl Rng) -> Vec<String> {
		let Some(cur) = self.search(text, rng).or_else(|| self.pick(rng)) else {
			return Vec::new();
		};

		self.fill(&cur, limit, rng)
			.into_iter()
			.map(|value| {
				let mut pair = value.split_whitespace();
				let first = pair.next().unwrap_or_default();
				pair.next().unwrap_or(first).to_owned()
			})
			.collect()
	}
}
