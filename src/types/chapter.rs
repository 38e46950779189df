use serde::{Deserialize, Deserializer, Serialize};

/// Importance tier assigned to a chapter by the syllabus input.
///
/// Deserialization is total: a missing or unrecognized value degrades to
/// `Medium` rather than failing, so malformed syllabus input can never
/// make planning partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    #[default]
    Medium,
    Low,
}

impl<'de> Deserialize<'de> for Importance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "high" => Importance::High,
            "low" => Importance::Low,
            _ => Importance::Medium,
        })
    }
}

impl Importance {
    /// Base weight used by the planner's priority score.
    pub fn weight(&self) -> u32 {
        match self {
            Importance::High => 3,
            Importance::Medium => 2,
            Importance::Low => 1,
        }
    }
}

/// A named unit of syllabus content.
///
/// `topics` is kept in its raw newline-delimited form, exactly as entered;
/// [`Chapter::topic_lines`] is the single parse point shared by the reducer
/// and the planner. Chapters are immutable snapshots from the core's point
/// of view: every reduction or planning run rebuilds its output wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,
    #[serde(default)]
    pub importance: Importance,
    pub topics: String,
    pub material: String,
}

impl Chapter {
    pub fn new(
        name: impl Into<String>,
        importance: Importance,
        topics: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Chapter {
            name: name.into(),
            importance,
            topics: topics.into(),
            material: material.into(),
        }
    }

    /// Topic names: one per line, trimmed, empties dropped.
    pub fn topic_lines(&self) -> Vec<&str> {
        self.topics
            .lines()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}
