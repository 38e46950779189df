use crate::types::plan::{Topic, TopicStatus};

/// A topic receiving less than this many remaining minutes is skipped
/// instead of partially covered.
const PARTIAL_FLOOR: u32 = 2;

pub struct AllocationResult {
    pub topics: Vec<Topic>,
    pub minutes_allocated: u32,
    pub study_count: usize,
    pub skip_count: usize,
}

/// Single greedy pass over topics already sorted by descending priority.
///
/// Each topic gets its full estimate while the budget lasts; the first
/// topic the remainder cannot cover gets everything left (if at least two
/// minutes remain), and every topic after that is skipped. Not globally
/// optimal, but the highest-priority topics are always served first.
pub fn allocate(topics: Vec<Topic>, available_minutes: u32) -> AllocationResult {
    let mut remaining = available_minutes;
    let mut study_count = 0;
    let mut skip_count = 0;

    let topics: Vec<Topic> = topics
        .into_iter()
        .map(|mut topic| {
            if remaining >= topic.estimated_minutes {
                topic.allocated_minutes = topic.estimated_minutes;
                topic.status = TopicStatus::Study;
                remaining -= topic.estimated_minutes;
                study_count += 1;
            } else if remaining >= PARTIAL_FLOOR {
                // Partial coverage: hand over whatever is left.
                topic.allocated_minutes = remaining;
                topic.status = TopicStatus::Study;
                remaining = 0;
                study_count += 1;
            } else {
                topic.allocated_minutes = 0;
                topic.status = TopicStatus::Skip;
                skip_count += 1;
            }
            topic
        })
        .collect();

    debug_assert!(topics.iter().all(|t| t.status != TopicStatus::Pending));
    debug_assert!(topics.iter().all(|t| t.allocated_minutes <= t.estimated_minutes));

    AllocationResult {
        topics,
        minutes_allocated: available_minutes - remaining,
        study_count,
        skip_count,
    }
}
