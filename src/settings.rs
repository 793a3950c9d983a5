use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::context::{EditingContext, ImageHandlingMode};
use crate::errors::SettingsError;

/// Editor preferences that shape a conversion, as stored in a JSON settings file:
///
/// ```json
/// { "toc_visible": true, "toc_levels": 3, "image_handling_mode": "relative-paths" }
/// ```
#[derive(Deserialize, PartialEq, Default, Clone, Debug)]
#[serde(default)]
pub struct PreviewSettings {
    pub no_footer: bool,
    pub toc_visible: bool,
    pub toc_levels: i32,
    pub image_handling_mode: ImageHandlingMode,
}

impl PreviewSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Copies these preferences onto a context
    pub fn apply(&self, context: &mut EditingContext) {
        context.no_footer = self.no_footer;
        context.toc_visible = self.toc_visible;
        context.toc_levels = self.toc_levels;
        context.image_handling_mode = self.image_handling_mode;
    }
}
