//! Reference text assembler.
//!
//! Resolves each citation through section extraction and concatenates the
//! results, in citation order, with no separator between them.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use refbuilder_markdown::{HeadingMatch, extract_section_with};
use refbuilder_shared::{Reference, Result};

/// Output from a reference assembly run.
#[derive(Debug, Clone, Serialize)]
pub struct AssembleResult {
    /// The concatenated reference text, in citation order.
    pub text: String,
    /// References whose section was never found; each contributes nothing
    /// to `text`.
    pub missing: Vec<Reference>,
}

/// Assemble reference text using [`HeadingMatch::Contains`].
pub fn assemble_references(references: &[Reference]) -> Result<AssembleResult> {
    assemble_references_with(references, HeadingMatch::Contains)
}

/// Assemble reference text, resolving each citation in order.
///
/// A citation whose section cannot be found is logged and reported in
/// [`AssembleResult::missing`] rather than failing the whole assembly.
/// An unreadable document still fails.
#[instrument(skip_all, fields(reference_count = references.len()))]
pub fn assemble_references_with(
    references: &[Reference],
    matching: HeadingMatch,
) -> Result<AssembleResult> {
    let mut text = String::new();
    let mut missing = Vec::new();

    for reference in references {
        match extract_section_with(&reference.doc_path, &reference.section_title, matching)? {
            Some(section) => text.push_str(&section),
            None => {
                warn!(
                    path = %reference.doc_path,
                    title = %reference.section_title,
                    "referenced section not found"
                );
                missing.push(reference.clone());
            }
        }
    }

    debug!(
        text_len = text.len(),
        missing = missing.len(),
        "references assembled"
    );

    Ok(AssembleResult { text, missing })
}
