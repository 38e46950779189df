/// Minimum character count for a piece to count as a sentence.
const NOISE_THRESHOLD: usize = 5;

/// Split raw material into trimmed sentence strings.
///
/// Line breaks are collapsed to single spaces first, then the text is cut
/// immediately after `.`, `!`, or `?` followed by whitespace; the punctuation
/// stays attached to the preceding sentence. Pieces of five characters or
/// fewer are discarded as noise.
///
/// No abbreviation handling: a period inside "e.g." terminates a sentence.
/// Known heuristic limitation, accepted for compatibility.
pub fn split_sentences(text: &str) -> Vec<String> {
    let collapsed = collapse_line_breaks(text);

    let mut sentences = Vec::new();
    let mut current = String::new();

    let mut chars = collapsed.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            flush(&mut sentences, &mut current);
        }
    }
    flush(&mut sentences, &mut current);

    sentences
}

fn flush(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if trimmed.chars().count() > NOISE_THRESHOLD {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Replace each run of line breaks with a single space.
fn collapse_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if c == '\n' || c == '\r' {
            in_break = true;
        } else {
            if in_break {
                out.push(' ');
                in_break = false;
            }
            out.push(c);
        }
    }
    out
}
