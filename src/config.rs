// src/config.rs

//! Render configuration and report format selection.

use crate::core::layout_constants::DEFAULT_MAX_WIDTH;
use crate::core::{CollapseError, Palette, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and colorization options controlling the text report.
///
/// Nothing here persists between render calls; the renderer only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Total character budget for a report line.
    #[serde(default = "default_max_width")]
    pub max_width: usize,
    /// Wrap each structural piece in ANSI styling.
    #[serde(default = "default_colorful")]
    pub colorful: bool,
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}

fn default_colorful() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            colorful: default_colorful(),
        }
    }
}

impl RenderConfig {
    /// Creates a configuration with an explicit width and color choice.
    pub fn new(max_width: usize, colorful: bool) -> Self {
        Self { max_width, colorful }
    }

    /// Returns this configuration with a different line width.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Returns this configuration with colorization switched on or off.
    pub fn with_colorful(mut self, colorful: bool) -> Self {
        self.colorful = colorful;
        self
    }

    /// The styling table matching `colorful`.
    pub fn palette(&self) -> Palette {
        if self.colorful { Palette::ANSI } else { Palette::PLAIN }
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    /// * `CollapseError::Serialization` if the text is not a valid configuration object.
    /// * `CollapseError::InvalidConfig` if the parsed values fail [`RenderConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self> {
        let config: RenderConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values a caller should not hand to the renderer.
    ///
    /// The renderer itself tolerates any width (bars shrink to nothing), so this
    /// is for front ends that want to reject nonsense input up front.
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            return Err(CollapseError::invalid_config("max_width must be greater than zero"));
        }
        Ok(())
    }
}

/// The representation a caller wants back from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// The formatted histogram table.
    #[default]
    Text,
    /// The structured frequency summary, as JSON.
    Json,
}

impl FromStr for ReportFormat {
    type Err = CollapseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(CollapseError::invalid_config(format!(
                "unknown report format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.max_width, 80);
        assert!(config.colorful);
        assert_eq!(config.palette(), Palette::ANSI);
        assert_eq!(config.with_colorful(false).palette(), Palette::PLAIN);
    }

    #[test]
    fn from_json_fills_missing_fields() -> Result<()> {
        let config = RenderConfig::from_json(r#"{"colorful": false}"#)?;
        assert_eq!(config, RenderConfig::new(80, false));

        let config = RenderConfig::from_json(r#"{"max_width": 120}"#)?;
        assert_eq!(config, RenderConfig::new(120, true));
        Ok(())
    }

    #[test]
    fn from_json_rejects_zero_width() {
        let err = RenderConfig::from_json(r#"{"max_width": 0}"#).unwrap_err();
        assert!(matches!(err, CollapseError::InvalidConfig { .. }));
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        let err = RenderConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, CollapseError::Serialization(_)));
    }

    #[test]
    fn report_format_parsing() -> Result<()> {
        assert_eq!("text".parse::<ReportFormat>()?, ReportFormat::Text);
        assert_eq!(" JSON ".parse::<ReportFormat>()?, ReportFormat::Json);
        assert!("csv".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Json.to_string(), "json");
        Ok(())
    }
}
