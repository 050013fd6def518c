//! Single-slot command queue between the input-capture thread and the
//! frame pipeline.

use std::sync::{Arc, Mutex, PoisonError};

use crate::selector::Command;

/// Lock-guarded single command slot.
///
/// The input-capture thread writes with `post`; the pipeline drains with
/// `take` exactly once per frame, so a command is consumed at most once and
/// duplicate delivery before the next capture has no further effect. A new
/// command posted before the previous one was consumed replaces it.
///
/// The mutex is held only for the slot read or write, never across I/O.
/// This slot and the commands in it are the only state shared between the
/// two threads.
#[derive(Debug, Clone, Default)]
pub struct CommandSlot {
    slot: Arc<Mutex<Option<Command>>>,
}

impl CommandSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a command, replacing any unconsumed one.
    pub fn post(&self, command: Command) {
        *self.lock() = Some(command);
    }

    /// Drain the pending command, if any.
    pub fn take(&self) -> Option<Command> {
        self.lock().take()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Command>> {
        // A poisoned slot only ever holds a plain enum; keep going.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
