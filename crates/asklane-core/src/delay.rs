//! Simulated load latency.
//!
//! Opening a question "loads" it after a short pause. The pause goes through
//! [`Delay`] so tests and `--no-delay` can skip or observe it.

use std::cell::RefCell;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::model::{Question, QuestionId};
use crate::store::FixtureStore;

/// Pause before a question is shown.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(300);

/// A one-shot wait.
pub trait Delay {
    fn wait(&self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) {}
}

/// Returns immediately and remembers every requested duration.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    waits: RefCell<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, oldest first.
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.borrow().clone()
    }
}

impl Delay for RecordingDelay {
    fn wait(&self, duration: Duration) {
        self.waits.borrow_mut().push(duration);
    }
}

/// Wait once, then look the question up.
pub fn load_question(
    store: &FixtureStore,
    id: &QuestionId,
    delay: &dyn Delay,
    duration: Duration,
) -> Option<Question> {
    debug!(question = %id, delay_ms = duration.as_millis() as u64, "loading question");
    delay.wait(duration);
    store.query().find_question_by_id(id)
}
