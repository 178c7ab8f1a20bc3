//! Layout helpers shared by the toast overlay

pub mod popup;
