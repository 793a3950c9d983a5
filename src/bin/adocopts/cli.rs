use adocopts::{backends::Backends, context::ImageHandlingMode};
use clap::Parser;
use log::warn;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Main entrypoint for adocopts when called as executable
#[derive(Parser)]
#[command(name = "adocopts", version, about)]
pub struct Cli {
    /// Asciidoc file whose options are resolved. To read from standard input (stdin), use "-".
    pub file: String,

    /// Directory the conversion writes its output to.
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Select a backend for conversion.
    #[arg(value_enum, short = 'b', long = "backend", default_value = "html5")]
    pub backend: Backends,

    /// Base directory for includes and relative images. Defaults to the file's directory (or the
    /// working directory when reading from stdin).
    #[arg(long = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Render a table of contents on the left.
    #[arg(long = "toc")]
    pub toc: bool,

    /// Depth of the table of contents; 0 leaves it to the engine.
    #[arg(long = "toc-levels")]
    pub toc_levels: Option<i32>,

    /// Suppress the document footer.
    #[arg(long = "no-footer")]
    pub no_footer: bool,

    /// How image directories are computed: imagesdir-from-preview-directory, relative-paths,
    /// store-diagram-files-local, or other.
    #[arg(short = 'i', long = "image-mode")]
    pub image_mode: Option<ImageHandlingMode>,

    /// Directory images are copied to in the preview-directory mode. Defaults to `images` below
    /// the output directory.
    #[arg(long = "images-target")]
    pub images_target: Option<PathBuf>,

    /// JSON file with editor preferences; flags given on the command line take precedence.
    #[arg(short = 's', long = "settings")]
    pub settings: Option<PathBuf>,

    /// Pretty-print the resulting JSON.
    #[arg(short = 'p', long = "pretty")]
    pub pretty: bool,

    /// Log what the resolver decides.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn read_input(args: &Cli) -> String {
    match args.file.as_str() {
        "-" => io::read_to_string(io::stdin()).expect("Error reading from stdin"),
        _ => match fs::read_to_string(args.file.as_str()) {
            Ok(file_string) => file_string,
            Err(e) => {
                warn!("Unable to read file {:?}: {e}", &args.file.as_str());
                std::process::exit(1)
            }
        },
    }
}

/// The file being edited, if there is one
pub fn editor_file(args: &Cli) -> Option<PathBuf> {
    match args.file.as_str() {
        "-" => None,
        file => Some(PathBuf::from(file)),
    }
}

pub fn read_base_dir(args: &Cli) -> PathBuf {
    if let Some(base_dir) = &args.base_dir {
        return base_dir.clone();
    }
    match editor_file(args) {
        Some(file) => match file.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
        None => PathBuf::from("."),
    }
}
