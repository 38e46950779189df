use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::chapter::Importance;
use crate::types::identifiers::{ChapterId, TopicId};

/// Allocation status of a planner topic.
///
/// `Pending` is the pre-allocation default and is never observed externally:
/// every topic resolves to `Study` or `Skip` before a plan is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    Pending,
    Study,
    Skip,
}

/// A single revisable unit derived from a chapter's topic list.
///
/// Invariants after allocation: `allocated_minutes <= estimated_minutes`;
/// `Skip` implies `allocated_minutes == 0`; `Study` implies
/// `allocated_minutes >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub chapter: String,
    pub chapter_id: ChapterId,
    pub importance: Importance,

    /// Composite ranking score, rounded to one decimal place.
    pub priority: f64,
    pub estimated_minutes: u32,
    pub allocated_minutes: u32,
    pub status: TopicStatus,
}

/// Derived display counts for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub study_count: usize,
    pub skip_count: usize,
}

/// The outcome of one planning run: topics in descending priority order.
///
/// A new `StudyPlan` replaces any previous one wholesale; the calling layer
/// must discard completion tracking keyed by the previous plan's topic ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub topics: Vec<Topic>,

    pub available_minutes: u32,
    /// Informational only: the "now" timestamp the plan was built against.
    pub built_at: DateTime<Utc>,

    pub summary: PlanSummary,
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("reading speed must be at least 1 word per minute, got {0}")]
    InvalidReadingSpeed(u32),
}
