//! Deterministic content-reduction and study-planning engine for exam revision.
//!
//! `cram-core` condenses free-form chapter material into categorized revision
//! notes (lexical sentence scoring, no language model) and turns chapters into
//! a priority-ranked, time-boxed study plan under a hard minute budget. Both
//! operations are pure: they take immutable snapshots of chapter data and
//! return fresh derived structures, so identical inputs always produce
//! identical outputs unless a randomized tie-break is explicitly requested.
//!
//! Presentation concerns (forms, timers, PDF export) live outside this crate;
//! it consumes [`Chapter`](types::Chapter) records and produces
//! [`CondensedNotes`](types::CondensedNotes) and a
//! [`StudyPlan`](types::StudyPlan) for the calling layer to render.

pub mod plan;
pub mod reduce;
pub mod types;

pub use plan::{InsertionOrder, RandomJitter, StudyPlanner, TieBreak};
pub use reduce::ContentReducer;
pub use types::{
    Chapter, ChapterId, CondensedNotes, Importance, MaterialVersion, PlanError, PlanSummary,
    Section, SectionKind, StudyPlan, Topic, TopicId, TopicStatus,
};
