use std::io::{BufReader, Read};

/// Splits text into paragraphs delimited by blank lines.
///
/// State machine over the characters:
/// - a single newline toggles into an "after newline" state; the next
///   ordinary character is appended with a joining space (the newline
///   collapses into a space rather than a break)
/// - a second consecutive newline finalizes the accumulated text as one
///   paragraph (runs of blank lines therefore emit empty paragraphs)
/// - any non-empty remainder is emitted as a final paragraph
pub fn split_paragraphs(text: &str) -> Vec<String> {
	let mut paragraphs = Vec::new();
	let mut accumulator = String::new();
	let mut after_newline = false;

	for ch in text.chars() {
		if after_newline {
			if ch == '\n' {
				paragraphs.push(std::mem::take(&mut accumulator));
			} else {
				accumulator.push(' ');
				accumulator.push(ch);
			}
			after_newline = false;
		} else if ch == '\n' {
			after_newline = true;
		} else {
			accumulator.push(ch);
		}
	}

	if !accumulator.is_empty() {
		paragraphs.push(accumulator);
	}
	paragraphs
}

/// Reads a character source to exhaustion and splits it into paragraphs.
///
/// The source is buffered in full before splitting; paragraphs are only
/// available once the stream terminates.
///
/// # Errors
/// Propagates I/O errors from the underlying source.
pub fn read_paragraphs<R: Read>(source: R) -> std::io::Result<Vec<String>> {
	let mut text = String::new();
	BufReader::new(source).read_to_string(&mut text)?;
	Ok(split_paragraphs(&text))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_line_separates_paragraphs() {
		let paragraphs = split_paragraphs("first one\n\nsecond one");
		assert_eq!(paragraphs, vec!["first one", "second one"]);
	}

	#[test]
	fn single_newline_joins_with_space() {
		let paragraphs = split_paragraphs("line a\nline b");
		assert_eq!(paragraphs, vec!["line a line b"]);
	}

	#[test]
	fn trailing_text_becomes_final_paragraph() {
		let paragraphs = split_paragraphs("alpha\n\nbeta\n");
		assert_eq!(paragraphs, vec!["alpha", "beta"]);
	}

	#[test]
	fn run_of_blank_lines_emits_empty_paragraphs() {
		// Every second newline in a run flushes; the odd trailing newline
		// re-arms the state and prefixes the next character with a space.
		let paragraphs = split_paragraphs("a\n\n\nb");
		assert_eq!(paragraphs, vec!["a", " b"]);

		let paragraphs = split_paragraphs("a\n\n\n\nb");
		assert_eq!(paragraphs, vec!["a", "", "b"]);
	}

	#[test]
	fn empty_input_yields_no_paragraphs() {
		assert!(split_paragraphs("").is_empty());
		assert!(split_paragraphs("\n\n").len() == 1); // one empty paragraph
	}

	#[test]
	fn read_paragraphs_from_reader() {
		let source = "one\ntwo\n\nthree".as_bytes();
		let paragraphs = read_paragraphs(source).unwrap();
		assert_eq!(paragraphs, vec!["one two", "three"]);
	}
}
