use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{IntakeBoardError, Result};
use crate::model::Dashboard;
use crate::output::OutputFormat;

/// Default configuration file name, discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = ".intake-board.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Report identity shown in the page header and footer.
    #[serde(default)]
    pub report: ReportConfig,

    /// Output defaults, overridable per invocation on the command line.
    #[serde(default)]
    pub output: OutputConfig,

    /// Chart color overrides keyed by entry label. File order is preserved
    /// but has no meaning beyond readability.
    #[serde(default)]
    pub palette: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Check semantic constraints that TOML parsing cannot express.
    ///
    /// # Errors
    /// [`IntakeBoardError::Config`] on an unknown output format or an empty
    /// palette label/color token.
    pub fn validate(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            format
                .parse::<OutputFormat>()
                .map_err(IntakeBoardError::Config)?;
        }

        for (label, color) in &self.palette {
            if label.trim().is_empty() {
                return Err(IntakeBoardError::Config(
                    "Palette entry has an empty label".to_string(),
                ));
            }
            if color.trim().is_empty() {
                return Err(IntakeBoardError::Config(format!(
                    "Palette entry {label:?} has an empty color token"
                )));
            }
        }

        Ok(())
    }

    /// Default output format, falling back to [`OutputFormat::Text`].
    ///
    /// Call [`Config::validate`] first; an invalid format string falls back
    /// to the default here instead of erroring.
    #[must_use]
    pub fn default_format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(|format| format.parse().ok())
            .unwrap_or_default()
    }

    /// Apply report identity and palette overrides to a dashboard.
    pub fn apply(&self, board: &mut Dashboard) {
        if let Some(title) = &self.report.title {
            board.title.clone_from(title);
        }
        if let Some(subtitle) = &self.report.subtitle {
            board.subtitle.clone_from(subtitle);
        }
        if let Some(owner) = &self.report.owner {
            board.owner.clone_from(owner);
        }

        for panel in &mut board.charts {
            for entry in &mut panel.entries {
                if let Some(color) = self.palette.get(&entry.label) {
                    entry.color.clone_from(color);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
