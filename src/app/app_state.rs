use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::text::Line;

use crate::config::Config;
use crate::presenter::{ToastOptions, ToastPresenter};
use crate::toast::style::trailing_button;
use crate::toast::{Toast, ToastKind};

/// Message of the toast that carries the "Update" button
pub const UPDATE_MESSAGE: &str = "A software update is available.";

/// Redraw interval while the row is moving
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Longest wait for input when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub presenter: ToastPresenter,
    pub dismissed: Rc<Cell<u32>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let dismissed = Rc::new(Cell::new(0));
        let counter = Rc::clone(&dismissed);

        let options = ToastOptions::from_config(&config.toast)
            .on_dismiss(move || {
                counter.set(counter.get() + 1);
                log::debug!("Dismissed {} toasts so far", counter.get());
            })
            .trailing(|toast| {
                if toast.message() == UPDATE_MESSAGE {
                    trailing_button("Update", toast.color(), false)
                } else {
                    Line::default()
                }
            });

        Self {
            presenter: ToastPresenter::new(options),
            dismissed,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dismissed_count(&self) -> u32 {
        self.dismissed.get()
    }

    /// Surface a startup problem (bad config, unreadable bundle) as a toast
    pub fn show_warning_at(&mut self, message: impl Into<String>, now: Instant) {
        self.presenter.present_at(Toast::warning(message), now);
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.presenter.is_animating(now) {
            return FRAME_INTERVAL;
        }

        self.presenter
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).min(IDLE_POLL))
            .unwrap_or(IDLE_POLL)
    }
}

/// Demo toast for each category
pub fn sample_toast(kind: ToastKind) -> Toast {
    let message = match kind {
        ToastKind::Debug => "Line 32 in `main.rs` executed.",
        ToastKind::Error => "Network Error!",
        ToastKind::Info => "Something informational for the user.",
        ToastKind::Notice => "Maintenance starts at 22:00.",
        ToastKind::Success => "Successfully did the thing!",
        ToastKind::Warning => "Something went wrong!",
    };
    kind.toast(message)
}

pub fn update_toast() -> Toast {
    Toast::notice(UPDATE_MESSAGE)
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
