use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ImageError;

/// How image locations are computed for a conversion
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ImageHandlingMode {
    /// Images are copied next to the preview output, and generated diagrams land there too
    #[default]
    #[serde(rename = "imagesdir-from-preview-directory")]
    FromPreviewDirectory,
    RelativePaths,
    #[serde(rename = "store-diagram-files-local")]
    StoreLocal,
    Other,
}

impl ImageHandlingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageHandlingMode::FromPreviewDirectory => "imagesdir-from-preview-directory",
            ImageHandlingMode::RelativePaths => "relative-paths",
            ImageHandlingMode::StoreLocal => "store-diagram-files-local",
            ImageHandlingMode::Other => "other",
        }
    }
}

impl fmt::Display for ImageHandlingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageHandlingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "imagesdir-from-preview-directory" | "preview" => {
                Ok(ImageHandlingMode::FromPreviewDirectory)
            }
            "relative-paths" | "relative" => Ok(ImageHandlingMode::RelativePaths),
            "store-diagram-files-local" | "local" => Ok(ImageHandlingMode::StoreLocal),
            "other" => Ok(ImageHandlingMode::Other),
            _ => Err(format!("unknown image handling mode: {}", s)),
        }
    }
}

/// Makes sure images referenced by the document are available in the preview's target
/// images directory. May write to the filesystem.
pub trait ImageProvider {
    fn ensure_images(&self) -> Result<(), ImageError>;
}

/// Source of the document attributes cached for the file being edited
pub trait AttributesProvider {
    fn cached_attributes(&self) -> HashMap<String, String>;
}

/// Used when there is nothing to materialize, e.g. outside of the preview-directory mode
#[derive(Default, Debug)]
pub struct NoImages;

impl ImageProvider for NoImages {
    fn ensure_images(&self) -> Result<(), ImageError> {
        Ok(())
    }
}

/// Used when no attributes have been cached yet
#[derive(Default, Debug)]
pub struct NoAttributes;

impl AttributesProvider for NoAttributes {
    fn cached_attributes(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

/// Everything known about the editor at the moment a conversion is requested
pub struct EditingContext<'a> {
    pub base_dir: PathBuf,
    /// Required at resolution time
    pub output_dir: Option<PathBuf>,
    pub editor_file: Option<PathBuf>,
    pub no_footer: bool,
    pub toc_visible: bool,
    /// 0 means "not configured"
    pub toc_levels: i32,
    /// Where images are materialized for [`ImageHandlingMode::FromPreviewDirectory`]
    pub target_images_dir: PathBuf,
    pub image_handling_mode: ImageHandlingMode,
    pub attributes_provider: &'a dyn AttributesProvider,
    pub image_provider: &'a dyn ImageProvider,
}

impl<'a> EditingContext<'a> {
    /// A context with default preferences and no collaborators doing any work. The target
    /// images directory defaults to `images` below the output directory.
    pub fn new(base_dir: impl Into<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        let target_images_dir = match &output_dir {
            Some(out) => out.join("images"),
            None => PathBuf::from("images"),
        };
        EditingContext {
            base_dir: base_dir.into(),
            output_dir,
            editor_file: None,
            no_footer: false,
            toc_visible: false,
            toc_levels: 0,
            target_images_dir,
            image_handling_mode: ImageHandlingMode::default(),
            attributes_provider: &NoAttributes,
            image_provider: &NoImages,
        }
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn editor_file(&self) -> Option<&Path> {
        self.editor_file.as_deref()
    }
}

impl fmt::Debug for EditingContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditingContext")
            .field("base_dir", &self.base_dir)
            .field("output_dir", &self.output_dir)
            .field("editor_file", &self.editor_file)
            .field("no_footer", &self.no_footer)
            .field("toc_visible", &self.toc_visible)
            .field("toc_levels", &self.toc_levels)
            .field("target_images_dir", &self.target_images_dir)
            .field("image_handling_mode", &self.image_handling_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("imagesdir-from-preview-directory", ImageHandlingMode::FromPreviewDirectory)]
    #[case("relative-paths", ImageHandlingMode::RelativePaths)]
    #[case("local", ImageHandlingMode::StoreLocal)]
    #[case("other", ImageHandlingMode::Other)]
    fn parse_image_modes(#[case] name: &str, #[case] expected: ImageHandlingMode) {
        assert_eq!(name.parse::<ImageHandlingMode>(), Ok(expected));
    }

    #[test]
    fn unknown_image_mode() {
        assert!("everywhere".parse::<ImageHandlingMode>().is_err());
    }

    #[test]
    fn image_mode_serde_names_match_display() {
        for mode in [
            ImageHandlingMode::FromPreviewDirectory,
            ImageHandlingMode::RelativePaths,
            ImageHandlingMode::StoreLocal,
            ImageHandlingMode::Other,
        ] {
            assert_eq!(
                serde_json::to_value(mode).unwrap(),
                serde_json::Value::String(mode.to_string())
            );
        }
    }

    #[test]
    fn default_images_target_below_output() {
        let context = EditingContext::new("/proj", Some(PathBuf::from("/out")));
        assert_eq!(context.target_images_dir, PathBuf::from("/out/images"));
    }
}
