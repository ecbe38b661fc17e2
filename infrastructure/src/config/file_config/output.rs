//! `[output]` section: how experiment reports are rendered

use canvass_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Report format; `None` leaves the choice to the CLI default (summary)
    pub format: Option<OutputFormat>,
    /// Colour the console report
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
