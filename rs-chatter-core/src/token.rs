/// Characters eliminated from raw tokens before they become surface forms.
const MARKUP_CHARS: &[char] = &[']', '[', '_', '*', '"', ')', '('];

/// Strips markup characters from a whitespace-split raw token.
///
/// Removes every occurrence of `] [ _ * " ) (`, then trims any trailing
/// run of `-`. The result is the *surface form*: the case-preserving text
/// recorded for display, as opposed to the canonical lookup key.
pub(crate) fn strip_markup(token: &str) -> String {
	let cleaned: String = token.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect();
	cleaned.trim_end_matches('-').to_owned()
}

/// Normalizes an n-gram into its canonical lookup key.
///
/// Steps, in order:
/// 1. Lowercase.
/// 2. Drop one trailing sentence-ending mark (`.`, `!`, `?`).
/// 3. Drop one trailing light-punctuation mark (`-`, `,`, `;`, `:`).
/// 4. Collapse every maximal run of characters outside `[a-z0-9']` into a
///    single space (boundary runs become a boundary space).
/// 5. Drop one leading and one trailing underscore if present.
///
/// Total and idempotent; two distinct surface forms may share a key
/// (e.g. "Hello," and "hello").
pub(crate) fn normalize(text: &str) -> String {
	let mut s = text.to_lowercase();
	if s.ends_with(['.', '!', '?']) {
		s.pop();
	}
	if s.ends_with(['-', ',', ';', ':']) {
		s.pop();
	}

	let mut out = String::with_capacity(s.len());
	let mut in_gap = false;
	for c in s.chars() {
		if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\'' {
			out.push(c);
			in_gap = false;
		} else if !in_gap {
			out.push(' ');
			in_gap = true;
		}
	}

	// Underscores are already collapsed to spaces above; this guards tokens
	// handed in by callers that skipped the collapse.
	if out.starts_with('_') {
		out.remove(0);
	}
	if out.ends_with('_') {
		out.pop();
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalize_lowercases() {
		assert_eq!(normalize("Hello"), "hello");
	}

	#[test]
	fn normalize_strips_one_sentence_mark() {
		assert_eq!(normalize("sat."), "sat");
		assert_eq!(normalize("ran!"), "ran");
		assert_eq!(normalize("what?"), "what");
	}

	#[test]
	fn normalize_strips_one_light_punctuation_mark() {
		assert_eq!(normalize("well,"), "well");
		assert_eq!(normalize("so;"), "so");
	}

	#[test]
	fn normalize_sentence_mark_then_punctuation() {
		// Both strips apply, in order: "hm,." loses '.' then ','.
		assert_eq!(normalize("hm,."), "hm");
	}

	#[test]
	fn normalize_keeps_apostrophes_and_digits() {
		assert_eq!(normalize("Don't"), "don't");
		assert_eq!(normalize("route66"), "route66");
	}

	#[test]
	fn normalize_collapses_runs_to_single_space() {
		assert_eq!(normalize("a--b"), "a b");
		assert_eq!(normalize("cat & dog"), "cat dog");
	}

	#[test]
	fn normalize_keeps_boundary_spaces() {
		// A leading run collapses to a leading space, it is not trimmed.
		assert_eq!(normalize("(hello"), " hello");
	}

	#[test]
	fn normalize_is_idempotent() {
		for s in ["Hello,", "sat.", "(hello", "a--b", "", "Don't!", "hi!?"] {
			let once = normalize(s);
			assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
		}
	}

	#[test]
	fn normalize_empty() {
		assert_eq!(normalize(""), "");
	}

	#[test]
	fn strip_markup_removes_bracket_chars() {
		assert_eq!(strip_markup("[hello]"), "hello");
		assert_eq!(strip_markup("*word*"), "word");
		assert_eq!(strip_markup("\"(quoted)\""), "quoted");
	}

	#[test]
	fn strip_markup_trims_trailing_dashes() {
		assert_eq!(strip_markup("word--"), "word");
		assert_eq!(strip_markup("-word"), "-word");
	}

	#[test]
	fn strip_markup_preserves_case() {
		assert_eq!(strip_markup("Hello,"), "Hello,");
	}
}
