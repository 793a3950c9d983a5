use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::context::ImageProvider;
use crate::errors::ImageError;

static IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "svg", "webp", "bmp"];

/// Copies a document's images into the preview's images directory so the preview and any
/// generated diagrams are served from the same place.
#[derive(Clone, Debug)]
pub struct PreviewImageCopier {
    source_dir: PathBuf,
    target_dir: PathBuf,
}

impl PreviewImageCopier {
    pub fn new(source_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        PreviewImageCopier {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
        }
    }

    /// Copies every image below the source directory that is missing or stale in the target
    /// directory, keeping the relative layout. Returns the number of files copied.
    pub fn copy_images(&self) -> Result<usize, ImageError> {
        fs::create_dir_all(&self.target_dir).map_err(|source| ImageError::Io {
            path: self.target_dir.clone(),
            source,
        })?;
        if !self.source_dir.is_dir() {
            debug!("No images directory at {:?}", self.source_dir);
            return Ok(0);
        }
        // both sides as real locations, so a target below the source is recognized however
        // either path is spelled
        let source_dir = canonical(&self.source_dir)?;
        let target_dir = canonical(&self.target_dir)?;

        let mut copied = 0;
        let walker = WalkDir::new(&source_dir)
            .into_iter()
            .filter_entry(|entry| !entry.path().starts_with(&target_dir));
        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_image(path) {
                continue;
            }
            let Ok(relative) = path.strip_prefix(&source_dir) else {
                continue;
            };
            let target = target_dir.join(relative);
            if is_up_to_date(path, &target) {
                continue;
            }
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| ImageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::copy(path, &target).map_err(|source| ImageError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            copied += 1;
        }
        if copied > 0 {
            info!("Copied {} images to {:?}", copied, self.target_dir);
        }
        Ok(copied)
    }
}

impl ImageProvider for PreviewImageCopier {
    fn ensure_images(&self) -> Result<(), ImageError> {
        self.copy_images().map(|_| ())
    }
}

fn canonical(path: &Path) -> Result<PathBuf, ImageError> {
    fs::canonicalize(path).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

fn is_up_to_date(source: &Path, target: &Path) -> bool {
    let (Ok(source_meta), Ok(target_meta)) = (fs::metadata(source), fs::metadata(target)) else {
        return false;
    };
    if source_meta.len() != target_meta.len() {
        return false;
    }
    match (source_meta.modified(), target_meta.modified()) {
        (Ok(source_time), Ok(target_time)) => target_time >= source_time,
        _ => false,
    }
}
