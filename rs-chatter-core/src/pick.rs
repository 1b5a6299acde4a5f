use std::collections::HashMap;

use rand::Rng;
use rand::prelude::IteratorRandom;

/// Selects one key from a weight table with probability proportional to
/// its weight.
///
/// This method performs:
/// - an O(n) scan over the entries
/// - a cumulative subtraction to select a bucket
///
/// Returns `None` if the table is empty or every weight is zero.
pub(crate) fn weighted<'a, K, R: Rng>(rng: &mut R, weights: &'a HashMap<K, usize>) -> Option<&'a K> {
	let total: usize = weights.values().sum();
	if total == 0 {
		return None;
	}

	let mut r = rng.random_range(0..total);

	let mut fallback: Option<&K> = None;
	for (item, weight) in weights {
		if r < *weight {
			return Some(item);
		}
		r -= weight;
		fallback = Some(item);
	}

	// Fallback: should not happen, but kept for safety.
	fallback
}

/// Uniformly random selection from any iterator; `None` if empty.
pub(crate) fn uniform<T, R: Rng>(rng: &mut R, items: impl Iterator<Item = T>) -> Option<T> {
	items.choose(rng)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(42)
	}

	#[test]
	fn weighted_empty_returns_none() {
		let weights: HashMap<String, usize> = HashMap::new();
		assert_eq!(weighted(&mut rng(), &weights), None);
	}

	#[test]
	fn weighted_all_zero_returns_none() {
		let weights = HashMap::from([("a".to_owned(), 0), ("b".to_owned(), 0)]);
		assert_eq!(weighted(&mut rng(), &weights), None);
	}

	#[test]
	fn weighted_single_entry_always_selected() {
		let weights = HashMap::from([("only".to_owned(), 3)]);
		let mut rng = rng();
		for _ in 0..20 {
			assert_eq!(weighted(&mut rng, &weights), Some(&"only".to_owned()));
		}
	}

	#[test]
	fn weighted_never_selects_zero_weight() {
		let weights = HashMap::from([
			("heavy".to_owned(), 5),
			("zero".to_owned(), 0),
			("light".to_owned(), 1),
		]);
		let mut rng = rng();
		for _ in 0..200 {
			let picked = weighted(&mut rng, &weights).unwrap();
			assert_ne!(picked, "zero");
		}
	}

	#[test]
	fn weighted_reaches_every_nonzero_entry() {
		let weights = HashMap::from([("a".to_owned(), 1), ("b".to_owned(), 1)]);
		let mut rng = rng();
		let mut seen_a = false;
		let mut seen_b = false;
		for _ in 0..200 {
			match weighted(&mut rng, &weights).unwrap().as_str() {
				"a" => seen_a = true,
				"b" => seen_b = true,
				other => panic!("unexpected pick {other}"),
			}
		}
		assert!(seen_a && seen_b);
	}

	#[test]
	fn uniform_empty_returns_none() {
		let items: Vec<u32> = Vec::new();
		assert_eq!(uniform(&mut rng(), items.into_iter()), None);
	}

	#[test]
	fn uniform_single_item() {
		assert_eq!(uniform(&mut rng(), std::iter::once(7)), Some(7));
	}
}
