//! Interactive demo application
//!
//! A full-screen host that shows each toast category on a key press and
//! dismisses on `x` or on a click/drag over the row.

mod app_events;
mod app_render;
mod app_state;

pub use app_events::kind_for_key;
pub use app_state::{App, UPDATE_MESSAGE, sample_toast, update_toast};
