//! String helpers for the parse buffer.
//!
//! The buffer is always lowercase with single spaces between words; every
//! helper that removes text re-collapses whitespace before returning.

/// Collapse runs of whitespace to single spaces and trim both ends.
pub fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove `len` bytes at `start`.
pub fn remove_span(text: &str, start: usize, len: usize) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push(' ');
    out.push_str(&text[start + len..]);
    collapse(&out)
}

/// Remove the first occurrence of `needle`, wherever it sits.
pub fn strip_first(text: &str, needle: &str) -> Option<String> {
    text.find(needle)
        .map(|start| remove_span(text, start, needle.len()))
}

/// Remove the first whole-word occurrence of `word`.
pub fn strip_word(text: &str, word: &str) -> Option<String> {
    find_word(text, word).map(|start| remove_span(text, start, word.len()))
}

/// Remove `word` from the start of `text` if it is a whole word there.
pub fn strip_leading_word(text: &str, word: &str) -> Option<String> {
    if text.starts_with(word) && is_boundary_after(text, word.len(), word) {
        Some(collapse(&text[word.len()..]))
    } else {
        None
    }
}

/// Byte offset of the first whole-word occurrence of `word`.
pub fn find_word(text: &str, word: &str) -> Option<usize> {
    find_word_from(text, word, 0)
}

/// Like [`find_word`], starting the search at byte offset `from`.
pub fn find_word_from(text: &str, word: &str, from: usize) -> Option<usize> {
    if word.is_empty() || from > text.len() {
        return None;
    }
    text[from..]
        .match_indices(word)
        .map(|(offset, _)| from + offset)
        .find(|&start| {
            is_boundary_before(text, start, word) && is_boundary_after(text, start + word.len(), word)
        })
}

/// All whole-word occurrences of `word`, as `(start, end)` byte ranges.
pub fn word_spans(text: &str, word: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut from = 0;
    while let Some(start) = find_word_from(text, word, from) {
        spans.push((start, start + word.len()));
        from = start + word.len();
    }
    spans
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

// A word that itself begins or ends with punctuation ("taunt:", "forever!")
// needs no boundary on that side.
fn is_boundary_before(text: &str, start: usize, word: &str) -> bool {
    let edge_is_word = word.chars().next().is_some_and(is_word_char);
    !edge_is_word || !text[..start].chars().next_back().is_some_and(is_word_char)
}

fn is_boundary_after(text: &str, end: usize, word: &str) -> bool {
    let edge_is_word = word.chars().next_back().is_some_and(is_word_char);
    !edge_is_word || !text[end..].chars().next().is_some_and(is_word_char)
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
