use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How numbers are written when a matrix is rendered as text.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Fixed,
    Scientific,
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Notation::Fixed),
            "scientific" | "sci" => Ok(Notation::Scientific),
            _ => Err(format!(
                "Unknown notation: {}. Expected one of `fixed` or `scientific`",
                s
            )),
        }
    }
}

/// Rendering options for [`Matrix::display_with`](crate::math::Matrix::display_with).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FormatConfig {
    /// Digits after the decimal point.
    pub precision: usize,

    #[serde(default)]
    pub notation: Notation,

    /// Rows shown before eliding the rest. `None` shows all.
    #[serde(default)]
    pub max_rows: Option<usize>,

    #[serde(default)]
    pub max_cols: Option<usize>,
}

impl FormatConfig {
    pub fn new(precision: usize, notation: Notation) -> Self {
        Self {
            precision,
            notation,
            max_rows: None,
            max_cols: None,
        }
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn with_max_cols(mut self, max_cols: usize) -> Self {
        self.max_cols = Some(max_cols);
        self
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new(4, Notation::Fixed)
    }
}
