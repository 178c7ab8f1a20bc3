use std::time::Instant;

/// Fire-once actions scheduled during a presentation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Start the slide-in after the layout settles
    Reveal,
    /// Begin the exit sequence on its own
    AutoDismiss,
    /// Clear the slot and run the dismiss callback
    Finish,
}

/// Armed timers, each kind at most once. Cancelling a timer drops it before
/// it can fire.
#[derive(Debug, Default)]
pub struct Timers {
    armed: Vec<(Timer, Instant)>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `timer` for `deadline`, replacing any earlier arming of the same kind
    pub fn arm(&mut self, timer: Timer, deadline: Instant) {
        self.cancel(timer);
        self.armed.push((timer, deadline));
    }

    pub fn cancel(&mut self, timer: Timer) {
        self.armed.retain(|(armed, _)| *armed != timer);
    }

    pub fn cancel_all(&mut self) {
        self.armed.clear();
    }

    pub fn is_armed(&self, timer: Timer) -> bool {
        self.armed.iter().any(|(armed, _)| *armed == timer)
    }

    pub fn deadline(&self, timer: Timer) -> Option<Instant> {
        self.armed
            .iter()
            .find(|(armed, _)| *armed == timer)
            .map(|(_, deadline)| *deadline)
    }

    /// Earliest deadline among the armed timers
    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.iter().map(|(_, deadline)| *deadline).min()
    }

    /// Remove and return the earliest timer due at `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<(Timer, Instant)> {
        let index = self
            .armed
            .iter()
            .enumerate()
            .filter(|(_, (_, deadline))| *deadline <= now)
            .min_by_key(|(_, (_, deadline))| *deadline)
            .map(|(index, _)| index)?;

        Some(self.armed.remove(index))
    }
}

#[cfg(test)]
#[path = "timers_tests.rs"]
mod timers_tests;
