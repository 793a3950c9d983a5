//! Turns the state of an editor into the options for one conversion.
//!
//! The resolver holds no state: every call to [`OptionsResolver::resolve`] starts from the
//! same defaults, folds in the cached document attributes and the editor's preferences, and
//! returns a fresh [`ResolvedOptions`].

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::attributes::AttributesBuilder;
use crate::backends::Backends;
use crate::context::{EditingContext, ImageHandlingMode};
use crate::errors::{ConfigurationError, ResolveError};
use crate::options::{ResolvedOptions, SafeMode};
use crate::utils::{absolute_path_string, plain_absolute_path_string};

static SOURCE_HIGHLIGHTER: &str = "coderay";

#[derive(Default, Debug)]
pub struct OptionsResolver {}

impl OptionsResolver {
    pub fn new() -> Self {
        OptionsResolver {}
    }

    pub fn resolve(
        &self,
        context: &EditingContext,
        backend: Backends,
    ) -> Result<ResolvedOptions, ResolveError> {
        let Some(output_dir) = context.output_dir() else {
            return Err(ConfigurationError::MissingOutputDirectory.into());
        };

        let mut builder = AttributesBuilder::attributes()
            .show_title(true)
            .no_footer(context.no_footer)
            .source_highlighter(SOURCE_HIGHLIGHTER)
            .attribute(
                "eclipse-editor-basedir",
                plain_absolute_path_string(&context.base_dir),
            )
            .attribute("icons", "font")
            .attribute("coderay-css", "style")
            .attribute("env", "eclipse")
            .flag("env-eclipse");

        for (key, value) in mergeable_attributes(context.attributes_provider.cached_attributes())
        {
            builder.set_attribute(&key, value);
        }

        if context.toc_visible {
            builder.set_attribute("toc", "left");
            if context.toc_levels > 0 {
                builder.set_attribute("toclevels", context.toc_levels.to_string());
            }
        }

        match context.image_handling_mode {
            ImageHandlingMode::FromPreviewDirectory => {
                // preview and generated diagrams share one directory, so links resolve in
                // the html preview
                context.image_provider.ensure_images()?;
                let target = absolute_path_string(&context.target_images_dir);
                debug!("Images from preview directory {}", target);
                builder.set_attribute("imagesoutdir", target);
                // imagesdir keeps the directory as written; only imagesoutdir is normalized
                builder.set_images_dir(&plain_absolute_path_string(&context.target_images_dir));
            }
            ImageHandlingMode::RelativePaths => {
                let base = plain_absolute_path_string(&context.base_dir);
                debug!("Images relative to base directory {}", base);
                builder.set_images_dir(&base);
            }
            ImageHandlingMode::StoreLocal => match context.editor_file() {
                Some(editor_file) => {
                    let parent = editor_file.parent().unwrap_or(editor_file);
                    let local = absolute_path_string(parent);
                    debug!("Images stored next to {:?}", editor_file);
                    builder.set_images_dir(&local);
                    builder.set_attribute("imagesoutdir", local);
                }
                None => warn!("No editor file known; local image directories left unset"),
            },
            ImageHandlingMode::Other => {}
        }

        builder.set_attribute("outdir", absolute_path_string(output_dir));

        info!(
            "Resolved {} options for output directory {:?}",
            backend, output_dir
        );

        Ok(ResolvedOptions {
            to_dir: output_dir.to_path_buf(),
            safe: SafeMode::Unsafe,
            backend: backend.backend_string().to_string(),
            header_footer: context.toc_visible,
            attributes: builder.get(),
            sourcemap: "true".to_string(),
            base_dir: context.base_dir.clone(),
        })
    }

    /// Nothing is retained between resolutions, so there is nothing to reset
    pub fn reset(&self) {}
}

/// Cached attributes that may be passed through: empty values are dropped, and `toc` is
/// always dropped as the table of contents is placed by the editor's own setting.
fn mergeable_attributes(cached: HashMap<String, String>) -> Vec<(String, String)> {
    cached
        .into_iter()
        .filter(|(key, value)| {
            if value.is_empty() {
                debug!("Skipping empty cached attribute {}", key);
                false
            } else if key == "toc" {
                debug!("Skipping cached toc attribute ({})", value);
                false
            } else {
                true
            }
        })
        .collect()
}
