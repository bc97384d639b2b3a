#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use docshelf_core::{Clock, DocumentEngine, DocumentId, DocumentStatus, IdGenerator, NewDocument};
use std::cell::Cell;
use std::rc::Rc;

/// Manually advanced clock. Clones share the same instant, so a test can
/// keep a handle while the engine owns another.
#[derive(Clone)]
pub struct FixedClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn at_start() -> Self {
        let start = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance_days(&self, days: i64) {
        self.advance(Duration::days(days));
    }

    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    pub fn current(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Deterministic id source counting up from 1.
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> DocumentId {
        let id = self.next;
        self.next += 1;
        id
    }
}

pub fn engine() -> (DocumentEngine<FixedClock, SequentialIds>, FixedClock) {
    let clock = FixedClock::at_start();
    let engine = DocumentEngine::new(clock.clone(), SequentialIds::new());
    (engine, clock)
}

pub fn new_doc(title: &str, content: &str, status: DocumentStatus) -> NewDocument {
    NewDocument {
        title: title.to_string(),
        content: content.to_string(),
        status,
    }
}
