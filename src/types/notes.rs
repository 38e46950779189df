use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ChapterId, MaterialVersion};

/// Category of a notes section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Definition,
    Formula,
    Point,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Definition => "Key Definitions",
            SectionKind::Formula => "Key Formulas & Technical Points",
            SectionKind::Point => "Important Points",
        }
    }
}

/// One labeled group of kept sentences, in original chapter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub kind: SectionKind,
    pub items: Vec<String>,
}

/// The reduced, categorized output of the content reducer for one chapter.
///
/// Fully self-contained and serializable; `source_version` hashes the
/// material the notes were derived from so the calling layer can detect
/// stale notes after a chapter edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondensedNotes {
    pub chapter: ChapterId,
    pub source_version: MaterialVersion,

    pub sections: Vec<Section>,
    /// Top five sentences overall by raw score, in score order.
    pub quick_revision: Vec<String>,

    pub total_sentences: usize,
    pub kept_sentences: usize,
    pub reduction_percent: u8,

    /// Sentinel for chapters with no usable material; `None` on the normal path.
    pub note: Option<String>,
}

impl CondensedNotes {
    /// Result for a chapter whose material is empty or whitespace-only.
    pub fn no_material(chapter: ChapterId, source_version: MaterialVersion) -> Self {
        CondensedNotes {
            chapter,
            source_version,
            sections: Vec::new(),
            quick_revision: Vec::new(),
            total_sentences: 0,
            kept_sentences: 0,
            reduction_percent: 0,
            note: Some("No material provided.".to_string()),
        }
    }
}
