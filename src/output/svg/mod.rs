//! SVG rendering primitives for dashboard reports.
//!
//! Provides the proportion chart embedded in HTML reports and its helpers:
//! viewBox-based scaling, theme color tokens, and `<title>` elements for
//! hover tooltips.

mod format;
mod pie;
mod style;

pub use pie::ProportionChart;
pub use style::{TextAnchor, ThemeColor};

pub(crate) use format::html_escape;

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
