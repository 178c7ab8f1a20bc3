//! Presenter module
//!
//! Owns the single toast slot and runs the presentation cycle: a short delay,
//! a spring slide-in from the configured edge, an optional auto-dismiss, and
//! an ease-out slide-back before the slot is cleared. All timing is driven by
//! the host event loop; nothing here spawns threads.

mod animation;
mod gesture;
mod options;
mod overlay;
mod presenter_state;
mod timers;

pub use animation::{Animation, Curve};
pub use gesture::is_dismiss_gesture;
pub use options::{LineFactory, ToastOptions};
pub use overlay::{ToastExt, Toasted, render_toast};
pub use presenter_state::{DISMISS_DURATION, PRESENT_DELAY, ToastPhase, ToastPresenter};
