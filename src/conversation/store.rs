use std::sync::{Mutex, MutexGuard, PoisonError};

use super::types::Message;

/// In-memory, append-only conversation log.
///
/// Append order is chronological order is display order; nothing is ever
/// mutated or removed, and the log dies with the process. The interior mutex
/// serializes appends so the ordering holds under concurrent senders too.
pub struct ConversationStore {
    messages: Mutex<Vec<Message>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Append a message. Infallible: a poisoned lock is recovered, since the
    /// log itself cannot be left in a torn state by a panicked appender.
    pub fn append(&self, message: Message) {
        self.lock().push(message);
    }

    /// Snapshot of the full log in append order.
    pub fn snapshot(&self) -> Vec<Message> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
