use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::animation::{Animation, Curve};
use super::options::ToastOptions;
use super::timers::{Timer, Timers};
use crate::toast::{Toast, ToastEdge};

/// Wait before sliding in, so the host layout settles first
pub const PRESENT_DELAY: Duration = Duration::from_millis(300);
/// Length of the slide-out, and the wait before the slot is cleared
pub const DISMISS_DURATION: Duration = Duration::from_millis(800);

/// Where the current presentation cycle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    /// Nothing shown
    #[default]
    Hidden,
    /// Waiting to slide in, or sliding in
    Entering,
    /// At rest on screen
    Presented,
    /// Sliding out; the slot clears when this ends
    Exiting,
}

/// Owns the toast slot and drives the show/dismiss cycle.
///
/// The presenter never reads the clock on its own inside the `_at` methods:
/// the host passes `now`, usually once per loop iteration. Call
/// [`ToastPresenter::tick_at`] before drawing so due timers fire.
pub struct ToastPresenter {
    pub(crate) options: ToastOptions,
    slot: Option<Toast>,
    phase: ToastPhase,
    is_presented: bool,
    animation: Option<Animation>,
    timers: Timers,
    /// Visible part of the row from the last draw, for hit testing
    pub(crate) row_area: Option<Rect>,
}

impl ToastPresenter {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            options,
            slot: None,
            phase: ToastPhase::Hidden,
            is_presented: false,
            animation: None,
            timers: Timers::new(),
            row_area: None,
        }
    }

    pub fn options(&self) -> &ToastOptions {
        &self.options
    }

    pub fn edge(&self) -> ToastEdge {
        self.options.edge
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// True once the slide-in has started, false again once the slide-out has
    pub fn is_presented(&self) -> bool {
        self.is_presented
    }

    /// The toast in the slot, if any
    pub fn toast(&self) -> Option<&Toast> {
        self.slot.as_ref()
    }

    /// Visible part of the row as of the last draw
    pub fn row_area(&self) -> Option<Rect> {
        self.row_area
    }

    pub fn present(&mut self, toast: Toast) {
        self.present_at(toast, Instant::now());
    }

    /// Put `toast` in the slot. Starts a cycle only if the slot was empty.
    pub fn present_at(&mut self, toast: Toast, now: Instant) {
        self.set_toast_at(Some(toast), now);
    }

    pub fn set_toast(&mut self, toast: Option<Toast>) {
        self.set_toast_at(toast, Instant::now());
    }

    /// Assign the slot directly.
    ///
    /// An empty → filled edge starts a cycle. Replacing a toast that is
    /// already up swaps the content only: the animation keeps going and the
    /// auto-dismiss deadline stays where it was. Emptying the slot hides the
    /// row at once, cancels every timer, and skips the dismiss callback.
    pub fn set_toast_at(&mut self, toast: Option<Toast>, now: Instant) {
        match (self.slot.is_some(), toast) {
            (false, Some(toast)) => {
                log::debug!("Presenting toast: {}", toast.message());
                self.slot = Some(toast);
                self.begin_cycle(now);
            }
            (true, Some(toast)) => {
                log::debug!("Replacing visible toast with: {}", toast.message());
                self.slot = Some(toast);
            }
            (true, None) => {
                log::debug!("Toast slot cleared by host");
                self.reset();
            }
            (false, None) => {}
        }
    }

    pub fn dismiss(&mut self) -> bool {
        self.dismiss_at(Instant::now())
    }

    /// Start the exit sequence. Returns false when there is nothing to dismiss
    /// or the toast is already leaving.
    pub fn dismiss_at(&mut self, now: Instant) -> bool {
        if !matches!(self.phase, ToastPhase::Entering | ToastPhase::Presented) {
            return false;
        }

        self.begin_exit(now);
        true
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Fire every timer due at `now`, in deadline order. Returns true when the
    /// visible state changed.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut changed = false;

        while let Some((timer, due)) = self.timers.pop_due(now) {
            changed = true;
            match timer {
                Timer::Reveal => self.reveal(due),
                Timer::AutoDismiss => {
                    log::debug!("Auto-dismiss timer fired");
                    self.begin_exit(due);
                }
                Timer::Finish => self.finish(),
            }
        }

        if self.phase == ToastPhase::Entering
            && self.is_presented
            && self.animation.is_none_or(|animation| animation.is_finished(now))
        {
            self.phase = ToastPhase::Presented;
            self.animation = None;
            changed = true;
        }

        changed
    }

    /// Row offset from its resting place at `now`, in rows
    pub fn offset_at(&self, now: Instant) -> f32 {
        match &self.animation {
            Some(animation) => animation.value_at(now),
            None if self.is_presented => 0.0,
            None => self.options.edge.travel(),
        }
    }

    /// True while the host should keep redrawing every frame
    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self.phase, ToastPhase::Entering | ToastPhase::Exiting)
            && self
                .animation
                .is_some_and(|animation| !animation.is_finished(now))
    }

    /// When the toast will start leaving on its own, if it will
    pub fn auto_dismiss_deadline(&self) -> Option<Instant> {
        self.timers.deadline(Timer::AutoDismiss)
    }

    /// Earliest moment `tick_at` has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn begin_cycle(&mut self, now: Instant) {
        self.phase = ToastPhase::Entering;
        self.is_presented = false;
        self.animation = None;
        self.timers.arm(Timer::Reveal, now + PRESENT_DELAY);

        if self.options.auto_dismissible {
            match now.checked_add(self.options.length.duration()) {
                Some(deadline) => self.timers.arm(Timer::AutoDismiss, deadline),
                None => log::debug!("Toast length out of range, auto-dismiss left unarmed"),
            }
        }
    }

    fn reveal(&mut self, at: Instant) {
        log::debug!("Revealing toast");
        self.is_presented = true;
        self.animation = Some(Animation::new(
            self.options.edge.travel(),
            0.0,
            Curve::Spring,
            at,
        ));
    }

    fn begin_exit(&mut self, at: Instant) {
        log::debug!("Dismissing toast");
        let from = self.offset_at(at);

        if self.timers.is_armed(Timer::AutoDismiss) {
            log::debug!("Cancelling pending auto-dismiss");
        }
        self.timers.cancel(Timer::Reveal);
        self.timers.cancel(Timer::AutoDismiss);

        self.phase = ToastPhase::Exiting;
        self.is_presented = false;
        self.animation = Some(Animation::new(
            from,
            self.options.edge.travel(),
            Curve::EaseOut(DISMISS_DURATION),
            at,
        ));
        self.timers.arm(Timer::Finish, at + DISMISS_DURATION);
    }

    fn finish(&mut self) {
        log::debug!("Toast dismissed");
        self.reset();
        (self.options.on_dismiss)();
    }

    fn reset(&mut self) {
        self.timers.cancel_all();
        self.slot = None;
        self.phase = ToastPhase::Hidden;
        self.is_presented = false;
        self.animation = None;
        self.row_area = None;
    }
}

#[cfg(test)]
#[path = "presenter_state_tests.rs"]
mod presenter_state_tests;
