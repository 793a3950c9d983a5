use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::attributes::Attributes;

/// Safety level the engine runs at; the editor always runs unrestricted, as the user owns
/// the documents being previewed
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SafeMode {
    #[default]
    Unsafe,
}

/// The complete set of options for one conversion. Serializes with the option names the
/// engine expects, attributes nested under `attributes`.
#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct ResolvedOptions {
    #[serde(rename = "toDir")]
    pub to_dir: PathBuf,
    pub safe: SafeMode,
    pub backend: String,
    #[serde(rename = "headerFooter")]
    pub header_footer: bool,
    pub attributes: Attributes,
    pub sourcemap: String,
    #[serde(rename = "baseDir")]
    pub base_dir: PathBuf,
}

impl ResolvedOptions {
    /// The `imagesdir` attribute, if an image policy set one
    pub fn images_dir(&self) -> Option<&str> {
        self.attributes.text("imagesdir")
    }

    pub fn images_out_dir(&self) -> Option<&str> {
        self.attributes.text("imagesoutdir")
    }

    /// The options as a single JSON object
    pub fn as_map(&self) -> Value {
        // plain data with string keys; serialization cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// The options as JSON text, keys in engine order
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        match pretty {
            true => serde_json::to_string_pretty(self),
            false => serde_json::to_string(self),
        }
    }
}
