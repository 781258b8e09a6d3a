//! Debounced, cancellable scheduling for suggestion lookups.
//!
//! Each keystroke begins a new ticket and invalidates every earlier one via
//! a shared generation counter. A ticket waits out the debounce delay and
//! only reports ready if it is still the latest; callers check again before
//! applying a response, which discards out-of-order results for the field.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Delay of input inactivity before a lookup fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Generation-counter debouncer, one per input field.
#[derive(Debug)]
pub struct LookupDebouncer {
    generation: Arc<AtomicU64>,
    delay: Duration,
}

impl LookupDebouncer {
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    /// Begin a new lookup attempt, superseding any earlier ticket.
    pub fn begin(&self) -> LookupTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LookupTicket {
            generation,
            latest: Arc::clone(&self.generation),
            delay: self.delay,
        }
    }

    /// Invalidate all outstanding tickets without starting a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for LookupDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// One scheduled lookup attempt.
#[derive(Debug)]
pub struct LookupTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
    delay: Duration,
}

impl LookupTicket {
    /// Wait out the debounce delay. Returns whether this ticket is still
    /// the latest and the lookup should fire.
    pub async fn wait(&self) -> bool {
        sleep(self.delay).await;
        self.is_current()
    }

    /// Whether no newer ticket has been begun since this one.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_lone_ticket_fires_after_the_delay() {
        let debouncer = LookupDebouncer::new();
        let ticket = debouncer.begin();
        assert!(ticket.wait().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_input_supersedes_pending_ticket() {
        let debouncer = LookupDebouncer::new();
        let first = debouncer.begin();
        let second = debouncer.begin();

        assert!(!first.wait().await);
        assert!(second.wait().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_response_for_stale_ticket_is_discarded() {
        let debouncer = LookupDebouncer::new();
        let ticket = debouncer.begin();
        assert!(ticket.wait().await);

        // input changed while the response was in flight
        let newer = debouncer.begin();
        assert!(!ticket.is_current());
        assert!(newer.is_current());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_invalidates_without_replacement() {
        let debouncer = LookupDebouncer::new();
        let ticket = debouncer.begin();
        debouncer.cancel();
        assert!(!ticket.wait().await);
    }
}
