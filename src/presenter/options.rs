use ratatui::{buffer::Buffer, layout::Rect, style::Color, text::Line};

use crate::config::ToastConfig;
use crate::toast::{Background, Content, Toast, ToastEdge, ToastLength};

/// Builds the trailing or message line for the toast being shown
pub type LineFactory = Box<dyn Fn(&Toast) -> Line<'static>>;

/// Everything a host can configure when attaching a toast to a screen
pub struct ToastOptions {
    pub(crate) edge: ToastEdge,
    pub(crate) length: ToastLength,
    pub(crate) auto_dismissible: bool,
    pub(crate) on_dismiss: Box<dyn FnMut()>,
    pub(crate) background_color: Option<Color>,
    pub(crate) text_color: Option<Color>,
    pub(crate) trailing: Content<LineFactory>,
    pub(crate) message: Content<LineFactory>,
    pub(crate) background: Content<Box<Background>>,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            edge: ToastEdge::Top,
            length: ToastLength::Short,
            auto_dismissible: true,
            on_dismiss: Box::new(|| {}),
            background_color: None,
            text_color: None,
            trailing: Content::Default,
            message: Content::Default,
            background: Content::Default,
        }
    }
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options matching a `[toast]` configuration section
    pub fn from_config(config: &ToastConfig) -> Self {
        Self::default()
            .edge(config.edge)
            .length(config.length)
            .auto_dismissible(config.auto_dismiss)
            .background_color(config.background_color)
            .text_color(config.text_color)
    }

    pub fn edge(mut self, edge: ToastEdge) -> Self {
        self.edge = edge;
        self
    }

    pub fn length(mut self, length: impl Into<ToastLength>) -> Self {
        self.length = length.into();
        self
    }

    /// When false, only pointer input on the row dismisses the toast
    pub fn auto_dismissible(mut self, auto_dismissible: bool) -> Self {
        self.auto_dismissible = auto_dismissible;
        self
    }

    /// Called once each time a dismissal completes
    pub fn on_dismiss(mut self, on_dismiss: impl FnMut() + 'static) -> Self {
        self.on_dismiss = Box::new(on_dismiss);
        self
    }

    pub fn background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    pub fn text_color(mut self, color: Option<Color>) -> Self {
        self.text_color = color;
        self
    }

    pub fn trailing(mut self, trailing: impl Fn(&Toast) -> Line<'static> + 'static) -> Self {
        self.trailing = Content::Custom(Box::new(trailing));
        self
    }

    pub fn message(mut self, message: impl Fn(&Toast) -> Line<'static> + 'static) -> Self {
        self.message = Content::Custom(Box::new(message));
        self
    }

    pub fn background(
        mut self,
        background: impl Fn(&Toast, Rect, &mut Buffer) + 'static,
    ) -> Self {
        self.background = Content::Custom(Box::new(background));
        self
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
