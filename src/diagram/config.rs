use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flow direction of the generated chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Top to bottom (`TD`).
    #[default]
    #[serde(rename = "TD", alias = "TB", alias = "td", alias = "tb")]
    TopDown,
    /// Left to right (`LR`).
    #[serde(rename = "LR", alias = "lr")]
    LeftRight,
}

impl Orientation {
    /// The direction keyword used in the chart header.
    pub fn keyword(self) -> &'static str {
        match self {
            Orientation::TopDown => "TD",
            Orientation::LeftRight => "LR",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TD" | "TB" => Ok(Orientation::TopDown),
            "LR" => Ok(Orientation::LeftRight),
            other => Err(format!(
                "Unknown orientation '{}', expected TD, TB or LR",
                other
            )),
        }
    }
}

pub const DEFAULT_TERMINAL_STYLE: &str = "fill:#e8f5e9,stroke:#2e7d32,stroke-width:2px";
pub const DEFAULT_TITLE_STYLE: &str = "fill:none,stroke:none,font-weight:bold,font-size:18px";

/// Cosmetic settings for diagram generation. None of them affect graph topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiagramConfig {
    pub orientation: Orientation,
    /// Emit a `%%` comment line summarizing name, goal and trigger.
    pub header_comment: bool,
    pub terminal_style: String,
    pub title_style: String,
    /// Prefix for nodes nested inside a lane block.
    pub indent: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::TopDown,
            header_comment: true,
            terminal_style: DEFAULT_TERMINAL_STYLE.to_string(),
            title_style: DEFAULT_TITLE_STYLE.to_string(),
            indent: "  ".to_string(),
        }
    }
}

impl DiagramConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))
    }
}
