use rand::Rng;

/// Marks that end a sentence.
const SENTENCE_END: &[char] = &['.', '!', '?'];

/// Light punctuation trimmed from the end of an assembled line.
const LIGHT_PUNCTUATION: &[char] = &['-', ',', ';', ':'];

/// Forms that stay capitalized wherever they appear.
const ALWAYS_CAPITALIZED: &[&str] = &["i", "i'll", "i'm", "i'd"];

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
		None => String::new(),
	}
}

/// Lowercases a word unless it is one of the always-capitalized forms.
fn maybe_downcase(word: &str) -> String {
	if ALWAYS_CAPITALIZED.contains(&word.to_lowercase().as_str()) {
		capitalize(word)
	} else {
		word.to_lowercase()
	}
}

/// Assembles a sequence of surface forms into a displayable sentence.
///
/// - Capitalizes the first word and any word following one that ends in a
///   sentence mark (`.`, `!`, `?`); every other word is lowercased, except
///   the pronoun/contraction forms "i", "i'll", "i'm", "i'd" which are
///   always capitalized.
/// - Strips the trailing run of light punctuation (`-`, `,`, `;`, `:`).
/// - Appends a random terminal mark from `.!?` if none is present.
pub fn sentencify(words: &[String], rng: &mut impl Rng) -> String {
	let shaped: Vec<String> = words
		.iter()
		.enumerate()
		.map(|(i, word)| {
			let wants_caps = i == 0 || words[i - 1].ends_with(SENTENCE_END);
			if wants_caps { capitalize(word) } else { maybe_downcase(word) }
		})
		.collect();

	let mut line = shaped.join(" ");
	while line.ends_with(LIGHT_PUNCTUATION) {
		line.pop();
	}

	if !line.ends_with(SENTENCE_END) {
		line.push(SENTENCE_END[rng.random_range(0..SENTENCE_END.len())]);
	}
	line
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(7)
	}

	fn words(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn capitalizes_first_word() {
		let line = sentencify(&words(&["hello", "there."]), &mut rng());
		assert_eq!(line, "Hello there.");
	}

	#[test]
	fn capitalizes_after_sentence_mark() {
		let line = sentencify(&words(&["fine.", "thanks."]), &mut rng());
		assert_eq!(line, "Fine. Thanks.");
	}

	#[test]
	fn lowercases_interior_words() {
		let line = sentencify(&words(&["The", "CAT", "Sat."]), &mut rng());
		assert_eq!(line, "The cat sat.");
	}

	#[test]
	fn pronoun_contractions_stay_capitalized() {
		let line = sentencify(&words(&["well", "i'll", "see."]), &mut rng());
		assert_eq!(line, "Well I'll see.");
		let line = sentencify(&words(&["so", "i", "went."]), &mut rng());
		assert_eq!(line, "So I went.");
	}

	#[test]
	fn strips_trailing_light_punctuation() {
		let line = sentencify(&words(&["wait", "here,"]), &mut rng());
		assert!(line.starts_with("Wait here"));
		assert!(!line.contains(','));
	}

	#[test]
	fn appends_terminal_mark_when_missing() {
		let line = sentencify(&words(&["no", "ending"]), &mut rng());
		let last = line.chars().last().unwrap();
		assert!(SENTENCE_END.contains(&last));
	}

	#[test]
	fn keeps_existing_terminal_mark() {
		let line = sentencify(&words(&["done!"]), &mut rng());
		assert_eq!(line, "Done!");
	}
}
