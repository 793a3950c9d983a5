//! Caches the attribute entries declared in a document header, e.g.:
//!
//! ```asciidoc
//! = Document Title
//! Jane Doe <jane@example.com>
//! :toc: left
//! :imagesdir: assets/images
//! :sectnums!:
//! ```
//!
//! Only the header is scanned; entries in the body apply from their position onward and are
//! left to the conversion engine.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::context::AttributesProvider;
use crate::errors::HeaderError;

// :name: value, :name!:, :!name:
static RE_ATTRIBUTE_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:(!?)(\w[\w-]*)(!?):(?:[ \t]+(.*))?$").unwrap());

static WRAP_MARKER: &str = " \\";

#[derive(PartialEq, Default, Clone, Debug)]
pub struct HeaderAttributes {
    attributes: HashMap<String, String>,
}

impl HeaderAttributes {
    pub fn new() -> Self {
        HeaderAttributes {
            attributes: HashMap::new(),
        }
    }

    pub fn from_source(source: &str) -> Self {
        let mut header = HeaderAttributes::new();
        header.refresh(source);
        header
    }

    pub fn from_file(path: &Path) -> Result<Self, HeaderError> {
        let source = fs::read_to_string(path).map_err(|source| HeaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_source(&source))
    }

    /// Replaces the cache with the entries in `source`'s header
    pub fn refresh(&mut self, source: &str) {
        self.attributes = scan_header(source);
        debug!("Cached {} header attributes", self.attributes.len());
    }

    pub fn reset(&mut self) {
        self.attributes.clear();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|value| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributesProvider for HeaderAttributes {
    fn cached_attributes(&self) -> HashMap<String, String> {
        self.attributes.clone()
    }
}

fn scan_header(source: &str) -> HashMap<String, String> {
    let mut attributes: HashMap<String, String> = HashMap::new();
    let mut lines = source.lines().skip_while(|line| line.trim().is_empty());
    let mut in_block_comment = false;
    let mut first_line = true;
    // author and revision lines may only follow the title directly
    let mut implicit_lines_left = 0;

    while let Some(line) = lines.next() {
        if in_block_comment {
            if line.starts_with("////") {
                in_block_comment = false;
            }
            continue;
        }
        if line.trim().is_empty() {
            // end of header
            break;
        }
        if line.starts_with("////") {
            in_block_comment = true;
            continue;
        }
        if line.starts_with("//") {
            continue;
        }
        let is_first_line = std::mem::replace(&mut first_line, false);

        let Some(captures) = RE_ATTRIBUTE_ENTRY.captures(line) else {
            if is_first_line && line.starts_with("= ") {
                implicit_lines_left = 2;
                continue;
            }
            if implicit_lines_left > 0 {
                implicit_lines_left -= 1;
                continue;
            }
            // body content; there is no header beyond this point
            break;
        };
        implicit_lines_left = 0;

        let name = captures[2].to_string();
        if !captures[1].is_empty() || !captures[3].is_empty() {
            attributes.remove(&name);
            continue;
        }

        let mut value = captures
            .get(4)
            .map(|m| m.as_str().trim_end().to_string())
            .unwrap_or_default();
        while value.ends_with(WRAP_MARKER) {
            value.truncate(value.len() - WRAP_MARKER.len());
            match lines.next() {
                Some(next) => {
                    value.push(' ');
                    value.push_str(next.trim());
                }
                None => break,
            }
        }
        attributes.insert(name, value);
    }
    attributes
}
