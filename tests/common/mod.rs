use std::cell::Cell;
use std::collections::HashMap;

use adocopts::context::{AttributesProvider, ImageProvider};
use adocopts::errors::ImageError;

/// Attributes handed out as-is
pub struct MapAttributes(pub HashMap<String, String>);

impl MapAttributes {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        MapAttributes(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl AttributesProvider for MapAttributes {
    fn cached_attributes(&self) -> HashMap<String, String> {
        self.0.clone()
    }
}

/// Counts how often images were requested, optionally failing
#[derive(Default)]
pub struct RecordingImages {
    pub calls: Cell<usize>,
    pub fail: bool,
}

impl ImageProvider for RecordingImages {
    fn ensure_images(&self) -> Result<(), ImageError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(ImageError::Io {
                path: "images".into(),
                source: std::io::Error::other("disk full"),
            });
        }
        Ok(())
    }
}
