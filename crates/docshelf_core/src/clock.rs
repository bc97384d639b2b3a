//! Time and identity abstractions.
//!
//! # Responsibility
//! - Decouple the lifecycle engine from wall-clock time and id generation
//!   so every policy decision is deterministic under test.
//!
//! # Invariants
//! - `IdGenerator` implementations never return a previously issued id.

use crate::model::document::DocumentId;
use chrono::{DateTime, Utc};

/// Source of the current time for lifecycle timestamps and policy sweeps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock production implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of unique document ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> DocumentId;
}

/// Epoch-millisecond-derived id generator.
///
/// Bumps past the last issued value when two ids fall in the same
/// millisecond, so ids stay strictly increasing within a process.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last_issued: i64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> DocumentId {
        let candidate = Utc::now().timestamp_millis();
        self.last_issued = if candidate > self.last_issued {
            candidate
        } else {
            self.last_issued + 1
        };
        self.last_issued
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, TimestampIdGenerator};

    #[test]
    fn ids_are_strictly_increasing() {
        let mut ids = TimestampIdGenerator::new();
        let mut previous = ids.next_id();
        for _ in 0..100 {
            let next = ids.next_id();
            assert!(next > previous);
            previous = next;
        }
    }
}
