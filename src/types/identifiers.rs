use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Position of a chapter within the session's ordered chapter list.
///
/// The original index is kept as an explicit identifier type so the notes
/// mapping and topic records never rely on a bare positional convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(usize);

impl ChapterId {
    pub fn new(index: usize) -> Self {
        ChapterId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Identifier for a single planner topic, stable across one planning run.
///
/// Formatted as `"{chapter_index}-{topic_index}"` so the calling layer can
/// key completion tracking on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    pub fn new(chapter: ChapterId, topic_index: usize) -> Self {
        TopicId(format!("{}-{}", chapter.index(), topic_index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Content hash of a chapter's raw material.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialVersion(String);

impl MaterialVersion {
    pub fn from_content(content: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        MaterialVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
