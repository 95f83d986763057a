mod html;
mod json;
pub mod svg;
mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::model::Dashboard;

/// Trait for formatting a dashboard into various output formats.
pub trait DashboardFormatter {
    /// Format the dashboard into a string.
    ///
    /// # Errors
    /// Returns an error if chart computation or serialization fails.
    fn format(&self, board: &Dashboard) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
