//! Conversion options for AsciiDoc editor previews.
//!
//! (For information about Asciidoc, see <https://asciidoc.org/>; for the engine these options
//! are meant for, see <https://asciidoctor.org/>)
//!
//! An editor that previews AsciiDoc hands the actual conversion to Asciidoctor, but first has to
//! decide *how* that conversion runs: which attributes are set, where output and images go, and
//! whether a table of contents is rendered. This crate makes that decision. Given an
//! [`EditingContext`](context::EditingContext) it produces
//! [`ResolvedOptions`](options::ResolvedOptions), which serialize to exactly the option and
//! attribute names the engine expects.
//!
//! The crate also provides a CLI tool (`adocopts`) that prints the options for a file as JSON,
//! and the two collaborators a real editor needs:
//!
//! - [`HeaderAttributes`](header::HeaderAttributes): caches the attribute entries from a
//!   document header
//! - [`PreviewImageCopier`](images::PreviewImageCopier): copies images next to the preview
//!   output
//!
//! Note that the `toc` attribute from a document is never passed through; the table of
//! contents is controlled by the editor's own setting and is always placed on the left.

pub mod attributes;
pub mod backends;
pub mod context;
pub mod errors;
pub mod header;
pub mod images;
pub mod options;
pub mod resolver;
pub mod settings;
pub mod utils;
