pub mod chapter;
pub mod identifiers;
pub mod notes;
pub mod plan;

pub use chapter::{Chapter, Importance};
pub use identifiers::{ChapterId, MaterialVersion, TopicId};
pub use notes::{CondensedNotes, Section, SectionKind};
pub use plan::{PlanError, PlanSummary, StudyPlan, Topic, TopicStatus};
