use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::chapter::Importance;

/// Topic-name substrings that each add a boost to the priority score.
pub const BOOST_MARKERS: [&str; 7] = [
    "theorem",
    "formula",
    "definition",
    "algorithm",
    "key",
    "important",
    "types",
];

const IMPORTANCE_SCALE: f64 = 10.0;
const BOOST: f64 = 5.0;
/// Jitter values must stay in `[0, 2)` so they can reorder near-equal
/// priorities but never outweigh an importance tier or a boost marker.
pub const JITTER_SPAN: f64 = 2.0;

/// Tie-break strategy for topics with equal base priority.
///
/// The jitter is added to the base priority before the final sort, so any
/// implementation must return values in `[0, JITTER_SPAN)`.
pub trait TieBreak {
    fn jitter(&mut self) -> f64;
}

/// Deterministic tie-break: zero jitter, letting the planner's stable sort
/// fall back to topic insertion order. The default, and the one tests
/// should rely on.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionOrder;

impl TieBreak for InsertionOrder {
    fn jitter(&mut self) -> f64 {
        0.0
    }
}

/// Randomized tie-break, spreading near-equal priorities apart. Seedable,
/// so jittered runs stay reproducible under test.
#[derive(Debug)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    pub fn seeded(seed: u64) -> Self {
        RandomJitter {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_entropy() -> Self {
        RandomJitter {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl TieBreak for RandomJitter {
    fn jitter(&mut self) -> f64 {
        self.rng.random_range(0.0..JITTER_SPAN)
    }
}

/// Priority before jitter: `importance weight × 10`, plus 5 per boost
/// marker found in the lowercased topic name (each marker counts at most
/// once, but a name can match several markers).
pub fn base_priority(importance: Importance, topic_name: &str) -> f64 {
    let lower = topic_name.to_lowercase();
    let boosts = BOOST_MARKERS.iter().filter(|m| lower.contains(*m)).count();

    f64::from(importance.weight()) * IMPORTANCE_SCALE + boosts as f64 * BOOST
}

/// Final priority is rounded to one decimal place.
pub fn round_priority(priority: f64) -> f64 {
    (priority * 10.0).round() / 10.0
}
