//! Backends are the conversion targets understood by the external engine. We never render
//! anything ourselves; we only need the identifier the engine expects for each one:
//!
//! - HTML5 (`html5`), used for the live preview
//! - PDF (`pdf`), via asciidoctor-pdf
//! - DocBook (`docbook5`)
//!

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backends {
    #[default]
    #[value(name = "html5", alias = "html")]
    Html5,
    Pdf,
    #[value(name = "docbook5", alias = "docbook")]
    Docbook5,
}

impl Backends {
    /// The identifier handed to the conversion engine as its `backend` option
    pub fn backend_string(&self) -> &'static str {
        match self {
            Backends::Html5 => "html5",
            Backends::Pdf => "pdf",
            Backends::Docbook5 => "docbook5",
        }
    }
}

impl fmt::Display for Backends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.backend_string())
    }
}
