//! Domain event recording.
//!
//! Aggregates embed an [`EventRecorder`] and expose its drain through their
//! own `pull_domain_events` method. Recording is a pure in-memory buffer:
//! nothing here delivers events anywhere.

/// Ordered buffer of events recorded by an aggregate and not yet drained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecorder<E> {
    pending: Vec<E>,
}

impl<E> EventRecorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Appends an event to the pending buffer.
    pub fn record(&mut self, event: E) {
        self.pending.push(event);
    }

    /// Returns every pending event in recorded order and clears the buffer.
    #[must_use]
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }

    /// Returns the pending events without draining them.
    #[must_use]
    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    /// Returns `true` when no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for EventRecorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an application command: the command output together with the
/// events the aggregate recorded while handling it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome<T, E> {
    /// Value produced by the command.
    pub output: T,
    /// Events drained from the aggregate after it was saved.
    pub events: Vec<E>,
}

impl<T, E> CommandOutcome<T, E> {
    /// Bundles a command output with its drained events.
    #[must_use]
    pub const fn new(output: T, events: Vec<E>) -> Self {
        Self { output, events }
    }
}
