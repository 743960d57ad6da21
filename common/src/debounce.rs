//! Trailing debounce, independent of how the timer is driven.
//!
//! [`Debouncer::push`] stores a value and hands out a [`DebounceTicket`]. The
//! caller arms one timer for [`Debouncer::delay`] and, when it fires, redeems
//! the ticket with [`Debouncer::fire`]. Only the newest ticket yields a value;
//! every earlier ticket was cancelled by the push that replaced it.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, generation: 0, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value and restarts the wait.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// The pending value, if `ticket` is still the newest one.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending value; outstanding tickets yield nothing afterwards.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
