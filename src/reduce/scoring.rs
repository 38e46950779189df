use std::collections::BTreeSet;

/// Marker vocabularies are fixed for output compatibility; entries are
/// matched as substrings of the lowercased sentence, so markers containing
/// uppercase (`O(`, `Θ(`, `Ω(`) never match. Do not edit without versioning
/// the output format.
pub const DEFINITION_MARKERS: [&str; 12] = [
    "is defined as",
    "refers to",
    "is a",
    "is the",
    "are called",
    "is known as",
    "can be defined",
    "definition",
    "means that",
    "is characterized by",
    "is described as",
    "represents",
];

pub const FORMULA_MARKERS: [&str; 15] = [
    "=", "formula", "equation", "calculate", "f(", "O(", "Θ(", "Ω(", "log", "sum", "∑", "∫",
    "π", "^", "sqrt",
];

pub const IMPORTANT_MARKERS: [&str; 25] = [
    "important",
    "key",
    "note",
    "remember",
    "crucial",
    "essential",
    "significant",
    "critical",
    "fundamental",
    "primary",
    "main",
    "advantage",
    "disadvantage",
    "difference",
    "example",
    "types of",
    "properties",
    "characteristics",
    "features",
    "applications",
    "steps",
    "process",
    "method",
    "algorithm",
    "theorem",
];

const KEYWORD_HIT: i32 = 3;
const POSITION_BONUS: i32 = 2;
const DEFINITION_BONUS: i32 = 5;
const FORMULA_BONUS: i32 = 4;
const IMPORTANCE_BONUS: i32 = 3;
const SHORT_PENALTY: i32 = 2;
const LONG_PENALTY: i32 = 1;

/// Internal: a sentence with its relevance score and category flags.
/// The importance-marker signal contributes to `score` only; grouping is
/// decided by the definition and formula flags alone.
#[derive(Debug, Clone)]
pub(crate) struct ScoredSentence {
    pub text: String,
    pub score: i32,
    pub is_def: bool,
    pub is_formula: bool,
}

/// Deduplicated, lowercased tokens (length > 2) from the topic names and the
/// chapter name. Drives the keyword-density signal.
pub(crate) fn keyword_set(topics: &[&str], chapter_name: &str) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();
    for source in topics.iter().copied().chain(std::iter::once(chapter_name)) {
        for word in source.to_lowercase().split_whitespace() {
            if word.chars().count() > 2 {
                keywords.insert(word.to_string());
            }
        }
    }
    keywords
}

/// Score one sentence. `index` and `total` locate it within the chapter's
/// whole sentence sequence; the position bonus applies to the global first
/// and last sentence only.
pub(crate) fn score_sentence(
    sentence: &str,
    index: usize,
    total: usize,
    keywords: &BTreeSet<String>,
) -> ScoredSentence {
    let lower = sentence.to_lowercase();
    let mut score = 0;

    // Keyword density: each distinct keyword counts once per sentence.
    let keyword_hits = keywords.iter().filter(|kw| lower.contains(kw.as_str())).count();
    score += keyword_hits as i32 * KEYWORD_HIT;

    if index == 0 || index + 1 == total {
        score += POSITION_BONUS;
    }

    let is_def = DEFINITION_MARKERS.iter().any(|m| lower.contains(m));
    if is_def {
        score += DEFINITION_BONUS;
    }

    let is_formula = FORMULA_MARKERS.iter().any(|m| lower.contains(m));
    if is_formula {
        score += FORMULA_BONUS;
    }

    let is_important = IMPORTANT_MARKERS.iter().any(|m| lower.contains(m));
    if is_important {
        score += IMPORTANCE_BONUS;
    }

    let word_count = sentence.split_whitespace().count();
    if word_count < 4 {
        score -= SHORT_PENALTY;
    }
    if word_count > 50 {
        score -= LONG_PENALTY;
    }

    ScoredSentence {
        text: sentence.to_string(),
        score,
        is_def,
        is_formula,
    }
}
