//! Section extraction from markdown documents.
//!
//! A section starts at a `## <title>` heading line and runs until the next
//! line that starts with `## ` (or end of file). The heading line itself is
//! never part of the captured content.

use std::path::Path;

use tracing::{debug, instrument};

use refbuilder_shared::{ALL_SECTIONS, Result};

use crate::read_document;

/// Prefix shared by all section heading lines.
const SECTION_PREFIX: &str = "## ";

/// How candidate lines are tested against the constructed heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingMatch {
    /// Historical behavior: the whitespace-stripped line merely has to
    /// contain the heading, so a title that is a substring of another
    /// heading can match the wrong section.
    #[default]
    Contains,
    /// The whitespace-stripped line must equal the heading exactly.
    /// Enabled through the `strict_headings` config toggle.
    Exact,
}

/// Extract a named section from a markdown file.
///
/// Uses [`HeadingMatch::Contains`]. Returns `Ok(None)` when the heading
/// never matches; a missing or unreadable file is an error. The sentinel
/// title [`ALL_SECTIONS`] returns the entire file content untrimmed.
pub fn extract_section(path: impl AsRef<Path>, section_title: &str) -> Result<Option<String>> {
    extract_section_with(path, section_title, HeadingMatch::Contains)
}

/// Extract a named section from a markdown file with explicit matching.
#[instrument(skip_all, fields(path = %path.as_ref().display(), title = section_title))]
pub fn extract_section_with(
    path: impl AsRef<Path>,
    section_title: &str,
    matching: HeadingMatch,
) -> Result<Option<String>> {
    let content = read_document(path.as_ref())?;
    let section = extract_from_str(&content, section_title, matching);

    if section.is_none() {
        debug!("section not found");
    }

    Ok(section)
}

/// Extract a section from already-loaded document content.
///
/// This is the scanning core of [`extract_section`]; it never touches the
/// filesystem. The result is trimmed of leading and trailing whitespace.
/// `None` means no line was ever captured: the heading was absent, or the
/// next heading followed it immediately. A section whose lines are all
/// whitespace still yields `Some("")`.
pub fn extract_from_str(
    content: &str,
    section_title: &str,
    matching: HeadingMatch,
) -> Option<String> {
    if section_title == ALL_SECTIONS {
        return Some(content.to_string());
    }

    let section_heading = format!("{SECTION_PREFIX}{section_title}");
    let mut captured: Vec<&str> = Vec::new();
    let mut inside_section = false;

    for line in content.split_inclusive('\n') {
        let stripped = line.trim();
        let is_heading = match matching {
            HeadingMatch::Contains => stripped.contains(&section_heading),
            HeadingMatch::Exact => stripped == section_heading,
        };

        // A heading match is consumed, never captured. Checked before the
        // end-of-section test, so a repeat of the heading text inside the
        // section is skipped rather than terminating the scan.
        if is_heading {
            inside_section = true;
            continue;
        }

        if inside_section {
            // The raw line decides section end, not the stripped one: an
            // indented `## ` is ordinary content.
            if line.starts_with(SECTION_PREFIX) {
                break;
            }
            captured.push(line);
        }
    }

    if captured.is_empty() {
        None
    } else {
        Some(captured.concat().trim().to_string())
    }
}
