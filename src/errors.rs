use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("output folder not defined")]
    MissingOutputDirectory,
}

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("unable to copy image {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to walk images directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Anything that can stop an options resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Images(#[from] ImageError),
}

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("unable to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("unable to read settings {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}
