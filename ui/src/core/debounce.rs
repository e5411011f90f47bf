//! Trailing-edge debounce for bursty UI events (window resize).
//!
//! Every [`Debouncer::trigger`] hands out a ticket and invalidates the ones
//! before it. The caller sleeps for the delay and then only acts if its ticket
//! is still current, so a burst collapses into one call after the last event.

use std::cell::Cell;
use std::rc::Rc;

use super::{platform, timing};

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
    wait_ms: u64,
}

impl Debouncer {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            generation: Rc::new(Cell::new(0)),
            wait_ms,
        }
    }

    pub fn trigger(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }

    /// Schedule `action` to run after the delay unless another call supersedes it.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + 'static,
    {
        let ticket = self.trigger();
        let this = self.clone();
        platform::spawn_future(async move {
            timing::sleep_ms(this.wait_ms).await;
            if this.is_current(ticket) {
                action();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_ticket_in_a_burst_is_current() {
        let debouncer = Debouncer::new(300);
        let first = debouncer.trigger();
        let second = debouncer.trigger();
        let third = debouncer.trigger();
        assert!(!debouncer.is_current(first));
        assert!(!debouncer.is_current(second));
        assert!(debouncer.is_current(third));
    }

    #[test]
    fn clones_share_generation() {
        let debouncer = Debouncer::new(10);
        let ticket = debouncer.trigger();
        debouncer.clone().trigger();
        assert!(!debouncer.is_current(ticket));
    }
}
