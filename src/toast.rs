//! Toast module
//!
//! The toast value itself, the message bundles it resolves text against,
//! and the row widget that draws it.

mod bundle;
mod model;
pub mod row;
pub mod style;

pub use bundle::Bundle;
pub use model::{Icon, Toast, ToastEdge, ToastKind, ToastLength};
pub use row::{Background, Content, ToastRow};
