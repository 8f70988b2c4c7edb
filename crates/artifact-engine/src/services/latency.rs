use crate::api::types::Ticket;
use crate::core::time::Countdown;

/// A result held back until its simulated latency has elapsed.
#[derive(Debug, Clone)]
struct Delayed<T> {
    ticket: Ticket,
    timer: Countdown,
    value: T,
}

/// Queue of ticketed results that mature after a fixed delay each.
/// Stand-in for a promise resolved by `setTimeout`.
#[derive(Debug, Clone)]
pub struct LatencyQueue<T> {
    items: Vec<Delayed<T>>,
}

impl<T> LatencyQueue<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Schedule `value` to be handed back under `ticket` after `delay` seconds.
    pub fn push(&mut self, ticket: Ticket, delay: f32, value: T) {
        self.items.push(Delayed {
            ticket,
            timer: Countdown::new(delay),
            value,
        });
    }

    /// Advance time; returns the results that matured, in scheduling order.
    pub fn tick(&mut self, dt: f32) -> Vec<(Ticket, T)> {
        let mut ready = Vec::new();
        let mut waiting = Vec::with_capacity(self.items.len());
        for mut item in self.items.drain(..) {
            if item.timer.tick(dt) {
                ready.push((item.ticket, item.value));
            } else {
                waiting.push(item);
            }
        }
        self.items = waiting;
        ready
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for LatencyQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
