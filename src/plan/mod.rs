//! Study planning: expand chapters into topics, rank them, and allocate a
//! finite time budget.

pub mod allocation;
pub mod priority;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::chapter::Chapter;
use crate::types::identifiers::{ChapterId, TopicId};
use crate::types::plan::{PlanError, PlanSummary, StudyPlan, Topic, TopicStatus};

pub use priority::{InsertionOrder, RandomJitter, TieBreak};

/// Share of the time to the deadline that is actually scheduled; the rest
/// models breaks and buffer.
const SCHEDULABLE_SHARE: f64 = 0.85;
/// Active studying runs at this fraction of raw reading speed.
const STUDY_SPEED_FACTOR: f64 = 0.6;
/// Every topic is estimated at no less than this many minutes.
const MIN_TOPIC_MINUTES: u32 = 2;

/// Builds a [`StudyPlan`] from chapter snapshots, a deadline, and a
/// calibrated reading speed.
///
/// The tie-break strategy is injected; [`InsertionOrder`] makes planning
/// fully deterministic, [`RandomJitter`] produces a randomized spread
/// among near-equal priorities.
#[derive(Debug)]
pub struct StudyPlanner<T: TieBreak> {
    tie_break: T,
}

impl Default for StudyPlanner<InsertionOrder> {
    fn default() -> Self {
        StudyPlanner {
            tie_break: InsertionOrder,
        }
    }
}

impl<T: TieBreak> StudyPlanner<T> {
    pub fn new(tie_break: T) -> Self {
        StudyPlanner { tie_break }
    }

    /// Build a fresh plan, replacing any previous one.
    ///
    /// A deadline at or before `now` is not an error: the budget is zero
    /// and every topic is skipped. A reading speed of zero is rejected.
    pub fn build_plan(
        &mut self,
        chapters: &[Chapter],
        exam_at: DateTime<Utc>,
        now: DateTime<Utc>,
        wpm: u32,
    ) -> Result<StudyPlan, PlanError> {
        if wpm == 0 {
            return Err(PlanError::InvalidReadingSpeed(wpm));
        }

        // 1. Time budget
        let available_minutes = available_minutes(exam_at, now);

        // 2. Topic expansion + per-topic estimates and priorities
        let mut topics = self.expand_topics(chapters, wpm);

        // 3. Ordering Phase
        // Sort by priority descending; the sort is stable, so equal
        // priorities keep insertion order.
        topics.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(Ordering::Equal));

        debug_assert!(topics.windows(2).all(|w| w[0].priority >= w[1].priority));

        // 4. Budgeting Phase
        let allocation::AllocationResult {
            topics,
            minutes_allocated,
            study_count,
            skip_count,
        } = allocation::allocate(topics, available_minutes);

        debug_assert!(minutes_allocated <= available_minutes);

        debug!(
            study = study_count,
            skip = skip_count,
            available_minutes,
            wpm,
            "study plan built"
        );

        Ok(StudyPlan {
            topics,
            available_minutes,
            built_at: now,
            summary: PlanSummary {
                study_count,
                skip_count,
            },
        })
    }

    fn expand_topics(&mut self, chapters: &[Chapter], wpm: u32) -> Vec<Topic> {
        let mut topics = Vec::new();

        for (idx, chapter) in chapters.iter().enumerate() {
            let chapter_id = ChapterId::new(idx);

            // A chapter with no listed topics becomes a single topic named
            // after the chapter itself.
            let mut names = chapter.topic_lines();
            if names.is_empty() {
                names.push(chapter.name.as_str());
            }

            let material_words = chapter.material.split_whitespace().count();
            // Material is split evenly across the chapter's topics; no
            // content-aware weighting.
            let estimated_words = material_words.div_ceil(names.len());
            let estimated_minutes = study_minutes(estimated_words, wpm);

            for (topic_idx, name) in names.iter().enumerate() {
                let base = priority::base_priority(chapter.importance, name);
                let priority = priority::round_priority(base + self.tie_break.jitter());

                topics.push(Topic {
                    id: TopicId::new(chapter_id, topic_idx),
                    name: (*name).to_string(),
                    chapter: chapter.name.clone(),
                    chapter_id,
                    importance: chapter.importance,
                    priority,
                    estimated_minutes,
                    allocated_minutes: 0,
                    status: TopicStatus::Pending,
                });
            }
        }

        topics
    }
}

/// `floor(ms × 0.85 / 60000)`, clamped at zero for past deadlines.
fn available_minutes(exam_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let ms = (exam_at - now).num_milliseconds();
    if ms <= 0 {
        return 0;
    }
    (ms as f64 * SCHEDULABLE_SHARE / 60_000.0).floor() as u32
}

/// `max(2, ceil(words / (wpm × 0.6)))`.
fn study_minutes(estimated_words: usize, wpm: u32) -> u32 {
    let minutes = (estimated_words as f64 / (f64::from(wpm) * STUDY_SPEED_FACTOR)).ceil() as u32;
    minutes.max(MIN_TOPIC_MINUTES)
}
