//! Markdown document reading and section extraction.
//!
//! Knowledge files are plain markdown documents; a section is the span
//! between a `## <title>` heading line and the next `## ` heading (or end
//! of file). All reading decodes UTF-8, including [`read_document`].

mod section;

pub use section::{HeadingMatch, extract_from_str, extract_section, extract_section_with};

use std::path::Path;

use refbuilder_shared::{RefBuilderError, Result};

/// Read the complete text content of a document.
///
/// Files are decoded strictly as UTF-8; a byte sequence that is not valid
/// UTF-8 fails with [`RefBuilderError::Io`], the same as a missing file.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| RefBuilderError::io(path, e))
}
