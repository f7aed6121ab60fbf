//! One-shot startup sequence: four system messages, then `welcome`.

use std::time::{Duration, Instant};

/// Messages printed before the welcome banner, in order.
pub const BOOT_MESSAGES: [&str; 4] = [
    "Initializing terminal...",
    "Loading system modules... ✓",
    "Establishing connection... ✓",
    "Loading user profile... ✓",
];

/// A single step of the boot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    /// Append a system message.
    Message(&'static str),
    /// Run the `welcome` command as a regular history entry.
    Welcome,
}

const STEP_COUNT: usize = BOOT_MESSAGES.len() + 1;

fn step(index: usize) -> BootStep {
    BOOT_MESSAGES
        .get(index)
        .map_or(BootStep::Welcome, |msg| BootStep::Message(*msg))
}

/// Timer-driven boot sequence. Step `i` is due `i * delay` after `start`.
#[derive(Debug, Clone)]
pub struct BootSequence {
    delay: Duration,
    started_at: Option<Instant>,
    next: usize,
}

impl BootSequence {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started_at: None,
            next: 0,
        }
    }

    /// Start the sequence. Returns `false` (and does nothing) if it was
    /// already started.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.next >= STEP_COUNT
    }

    /// Steps that have become due since the last poll, in order.
    pub fn poll(&mut self, now: Instant) -> Vec<BootStep> {
        let Some(started_at) = self.started_at else {
            return Vec::new();
        };
        let mut due = Vec::new();
        while self.next < STEP_COUNT {
            let at = started_at + self.delay * self.next as u32;
            if at > now {
                break;
            }
            due.push(step(self.next));
            self.next += 1;
        }
        due
    }

    /// When the next step becomes due, if any remain.
    pub fn next_due(&self) -> Option<Instant> {
        let started_at = self.started_at?;
        (!self.is_finished()).then(|| started_at + self.delay * self.next as u32)
    }
}
