//! Transient, auto-dismissing toast banners for ratatui applications.
//!
//! A [`Toast`] describes one message. A [`ToastPresenter`] owns the single
//! toast slot, animates the row in from the configured edge, schedules the
//! auto-dismiss, and clears the slot once the exit animation has run. Any
//! widget can be decorated with the toast overlay through [`ToastExt`].

pub mod app;
pub mod config;
pub mod error;
pub mod presenter;
pub mod toast;
pub mod widgets;

mod test_utils;

pub use error::ToastError;
pub use presenter::{ToastExt, ToastOptions, ToastPhase, ToastPresenter, Toasted, render_toast};
pub use toast::{Bundle, Content, Icon, Toast, ToastEdge, ToastKind, ToastLength, ToastRow};
