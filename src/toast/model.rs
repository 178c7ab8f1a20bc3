use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use super::bundle::Bundle;
use crate::error::ToastError;

/// Rows the row travels while sliding in or out
const EDGE_TRAVEL: f32 = 200.0;

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Glyph drawn at the start of a toast row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon(Cow<'static, str>);

impl Icon {
    pub fn new(glyph: impl Into<Cow<'static, str>>) -> Self {
        Self(glyph.into())
    }

    pub fn glyph(&self) -> &str {
        &self.0
    }

    /// Display width in terminal columns
    pub fn width(&self) -> u16 {
        self.0.width() as u16
    }
}

/// A single notification.
///
/// Equality and hashing only look at the color and the message, so two
/// toasts with different icons or bundles still compare equal.
#[derive(Debug, Clone)]
pub struct Toast {
    icon: Icon,
    color: Color,
    message: String,
    bundle: Option<Arc<Bundle>>,
}

impl Toast {
    pub fn new(icon: Icon, color: Color, message: impl Into<String>) -> Self {
        Self {
            icon,
            color,
            message: message.into(),
            bundle: None,
        }
    }

    /// Resolve the message against `bundle` instead of the main bundle
    pub fn with_bundle(mut self, bundle: Arc<Bundle>) -> Self {
        self.bundle = Some(bundle);
        self
    }

    pub fn debug(message: impl Into<String>) -> Self {
        ToastKind::Debug.toast(message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToastKind::Error.toast(message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        ToastKind::Info.toast(message)
    }

    pub fn notice(message: impl Into<String>) -> Self {
        ToastKind::Notice.toast(message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        ToastKind::Success.toast(message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        ToastKind::Warning.toast(message)
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The raw message, which may be a bundle key
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn bundle(&self) -> Option<&Bundle> {
        self.bundle.as_deref()
    }

    /// Message text after bundle lookup. Unknown keys come back verbatim.
    pub fn resolved_message(&self) -> &str {
        match &self.bundle {
            Some(bundle) => bundle.localize(&self.message),
            None => Bundle::main().localize(&self.message),
        }
    }
}

impl PartialEq for Toast {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.message == other.message
    }
}

impl Eq for Toast {}

impl Hash for Toast {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.message.hash(state);
    }
}

/// Built-in toast categories with a fixed icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Debug,
    Error,
    Info,
    Notice,
    Success,
    Warning,
}

impl ToastKind {
    pub const ALL: [ToastKind; 6] = [
        ToastKind::Debug,
        ToastKind::Error,
        ToastKind::Info,
        ToastKind::Notice,
        ToastKind::Success,
        ToastKind::Warning,
    ];

    pub fn icon(self) -> Icon {
        let glyph = match self {
            ToastKind::Debug => "⚙",
            ToastKind::Error => "✖",
            ToastKind::Info => "ℹ",
            ToastKind::Notice => "✱",
            ToastKind::Success => "✔",
            ToastKind::Warning => "⚠",
        };
        Icon::new(glyph)
    }

    pub fn color(self) -> Color {
        match self {
            ToastKind::Debug => Color::Magenta,
            ToastKind::Error => Color::Red,
            ToastKind::Info => Color::Blue,
            ToastKind::Notice => ORANGE,
            ToastKind::Success => Color::Green,
            ToastKind::Warning => Color::Yellow,
        }
    }

    pub fn toast(self, message: impl Into<String>) -> Toast {
        Toast::new(self.icon(), self.color(), message)
    }
}

/// How long a toast stays up before dismissing itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(try_from = "LengthRepr", into = "LengthRepr")]
pub enum ToastLength {
    #[default]
    Short,
    Long,
    Custom(Duration),
}

impl ToastLength {
    pub fn duration(self) -> Duration {
        match self {
            ToastLength::Short => Duration::from_secs(3),
            ToastLength::Long => Duration::from_secs(5),
            ToastLength::Custom(duration) => duration,
        }
    }
}

impl From<Duration> for ToastLength {
    fn from(duration: Duration) -> Self {
        ToastLength::Custom(duration)
    }
}

impl FromStr for ToastLength {
    type Err = ToastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(ToastLength::Short),
            "long" => Ok(ToastLength::Long),
            other => {
                let secs: f64 = other.parse().map_err(|_| {
                    ToastError::InvalidConfig(format!(
                        "toast length must be 'short', 'long' or seconds, got '{}'",
                        s
                    ))
                })?;
                seconds_to_length(secs)
            }
        }
    }
}

impl fmt::Display for ToastLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastLength::Short => write!(f, "short"),
            ToastLength::Long => write!(f, "long"),
            ToastLength::Custom(duration) => write!(f, "{}", duration.as_secs_f64()),
        }
    }
}

fn seconds_to_length(secs: f64) -> Result<ToastLength, ToastError> {
    Duration::try_from_secs_f64(secs)
        .map(ToastLength::Custom)
        .map_err(|_| {
            ToastError::InvalidConfig(format!(
                "toast length must be a non-negative number of seconds, got {}",
                secs
            ))
        })
}

/// Serialized form of [`ToastLength`]: a name or a number of seconds
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum LengthRepr {
    Named(String),
    Whole(u64),
    Seconds(f64),
}

impl TryFrom<LengthRepr> for ToastLength {
    type Error = ToastError;

    fn try_from(repr: LengthRepr) -> Result<Self, Self::Error> {
        match repr {
            LengthRepr::Named(name) => name.parse(),
            LengthRepr::Whole(secs) => Ok(ToastLength::Custom(Duration::from_secs(secs))),
            LengthRepr::Seconds(secs) => seconds_to_length(secs),
        }
    }
}

impl From<ToastLength> for LengthRepr {
    fn from(length: ToastLength) -> Self {
        match length {
            ToastLength::Short => LengthRepr::Named("short".to_string()),
            ToastLength::Long => LengthRepr::Named("long".to_string()),
            ToastLength::Custom(duration) => LengthRepr::Seconds(duration.as_secs_f64()),
        }
    }
}

/// Screen edge the toast is anchored to and slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastEdge {
    #[default]
    Top,
    Bottom,
}

impl ToastEdge {
    /// Vertical offset of the hidden row, in rows. Negative is above the anchor.
    pub fn travel(self) -> f32 {
        match self {
            ToastEdge::Top => -EDGE_TRAVEL,
            ToastEdge::Bottom => EDGE_TRAVEL,
        }
    }
}

impl FromStr for ToastEdge {
    type Err = ToastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(ToastEdge::Top),
            "bottom" => Ok(ToastEdge::Bottom),
            _ => Err(ToastError::InvalidConfig(format!(
                "toast edge must be 'top' or 'bottom', got '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
