//! SVG styling primitives: theme color tokens and text anchoring.

use std::fmt;

/// Color tokens declared by the report stylesheet.
///
/// Embedded SVG carries no colors of its own beyond the entry tokens; every
/// structural element resolves through a `var(--color-*)` custom property
/// from the HTML header so charts pick up the page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    /// Card background, fills the donut hole.
    Card,
    /// Hairline borders and the no-data placeholder circle.
    Border,
    /// Primary text, used for the center total.
    Text,
    /// Secondary text: captions and placeholder labels.
    TextMuted,
}

impl ThemeColor {
    const fn token(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Border => "border",
            Self::Text => "text",
            Self::TextMuted => "text-muted",
        }
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var(--color-{})", self.token())
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
