//! Content reduction: condense raw chapter material into categorized notes.

pub mod scoring;
pub mod segment;

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use tracing::debug;

use crate::types::chapter::Chapter;
use crate::types::identifiers::{ChapterId, MaterialVersion};
use crate::types::notes::{CondensedNotes, Section, SectionKind};

use scoring::ScoredSentence;

pub use segment::split_sentences;

/// Fraction of sentences kept by the selection pass.
const KEEP_RATIO: f64 = 0.4;
/// Selection keeps at least this many sentences when the chapter has them.
const KEEP_FLOOR: usize = 5;
/// Length of the quick-revision list.
const QUICK_REVISION_LEN: usize = 5;

/// Lexical content reducer.
///
/// Scoring is a pure function of the input: identical material, topics, and
/// chapter name always produce identical notes. Chapters are reduced
/// independently, with no cross-chapter interaction.
#[derive(Debug, Default)]
pub struct ContentReducer;

impl ContentReducer {
    pub fn new() -> Self {
        ContentReducer
    }

    /// Reduce every chapter, keyed by its id. Rebuilds the whole mapping;
    /// there is no incremental update.
    pub fn reduce_all(&self, chapters: &[Chapter]) -> BTreeMap<ChapterId, CondensedNotes> {
        debug!(chapters = chapters.len(), "reducing chapter material");

        chapters
            .iter()
            .enumerate()
            .map(|(idx, chapter)| {
                let id = ChapterId::new(idx);
                (id, self.reduce_chapter(id, chapter))
            })
            .collect()
    }

    pub fn reduce_chapter(&self, id: ChapterId, chapter: &Chapter) -> CondensedNotes {
        self.reduce(id, &chapter.material, &chapter.topic_lines(), &chapter.name)
    }

    /// Reduce one chapter's material into condensed notes.
    ///
    /// Empty or whitespace-only material yields the "No material provided."
    /// sentinel rather than an error.
    pub fn reduce(
        &self,
        id: ChapterId,
        material: &str,
        topics: &[&str],
        chapter_name: &str,
    ) -> CondensedNotes {
        let source_version = MaterialVersion::from_content(material);

        if material.trim().is_empty() {
            return CondensedNotes::no_material(id, source_version);
        }

        let sentences = segment::split_sentences(material);
        let keywords = scoring::keyword_set(topics, chapter_name);

        // 1. Scoring Phase
        let scored: Vec<ScoredSentence> = sentences
            .iter()
            .enumerate()
            .map(|(idx, s)| scoring::score_sentence(s, idx, sentences.len(), &keywords))
            .collect();

        // 2. Selection Phase
        // Rank indices by (score desc, original order asc); the stable sort
        // supplies the first-seen tie-break.
        let mut ranked: Vec<usize> = (0..scored.len()).collect();
        ranked.sort_by_key(|&i| std::cmp::Reverse(scored[i].score));

        let keep_count = keep_count(scored.len());
        let kept: BTreeSet<usize> = ranked.iter().copied().take(keep_count).collect();

        // 3. Grouping Phase
        // Kept sentences regain original chapter order; a sentence matching
        // both definition and formula markers files under definitions only.
        let sections = group_sections(&scored, &kept);

        let quick_revision: Vec<String> = ranked
            .iter()
            .take(QUICK_REVISION_LEN)
            .map(|&i| scored[i].text.clone())
            .collect();

        let total = sentences.len();
        let reduction_percent = reduction_percent(kept.len(), total);

        CondensedNotes {
            chapter: id,
            source_version,
            sections,
            quick_revision,
            total_sentences: total,
            kept_sentences: kept.len(),
            reduction_percent,
            note: None,
        }
    }
}

/// `max(5, ceil(0.4 N))`, capped at N.
fn keep_count(total: usize) -> usize {
    let ratio = (total as f64 * KEEP_RATIO).ceil() as usize;
    ratio.max(KEEP_FLOOR).min(total)
}

fn reduction_percent(kept: usize, total: usize) -> u8 {
    let total = total.max(1);
    ((1.0 - kept as f64 / total as f64) * 100.0).round() as u8
}

fn group_sections(scored: &[ScoredSentence], kept: &BTreeSet<usize>) -> Vec<Section> {
    let mut sections = Vec::new();

    for kind in [SectionKind::Definition, SectionKind::Formula, SectionKind::Point] {
        let items: Vec<String> = kept
            .iter()
            .map(|&i| &scored[i])
            .filter(|s| match kind {
                SectionKind::Definition => s.is_def,
                SectionKind::Formula => s.is_formula && !s.is_def,
                SectionKind::Point => !s.is_def && !s.is_formula,
            })
            .map(|s| s.text.clone())
            .collect();

        if !items.is_empty() {
            sections.push(Section {
                title: kind.title().to_string(),
                kind,
                items,
            });
        }
    }

    sections
}
