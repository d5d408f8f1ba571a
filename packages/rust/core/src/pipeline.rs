//! End-to-end challenge pipeline: read file → decompose → assemble references.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use refbuilder_markdown::{HeadingMatch, read_document};
use refbuilder_shared::{Challenge, Reference, ResolveConfig, Result};

use crate::assembler::assemble_references_with;
use crate::decompose::decompose_challenge_with;

/// A fully processed challenge: the decomposition plus resolved citations.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeBundle {
    /// The decomposed challenge document.
    pub challenge: Challenge,
    /// Concatenated text of every resolved reference, in citation order.
    pub reference_text: String,
    /// References whose sections were not found.
    pub missing: Vec<Reference>,
}

/// Process a challenge file with the default resolution settings.
pub fn process_challenge(path: impl AsRef<Path>) -> Result<ChallengeBundle> {
    process_challenge_with(path, &ResolveConfig::default())
}

/// Run the full pipeline against a challenge file.
///
/// 1. Read the challenge document
/// 2. Decompose it into question, answer, and references
/// 3. Resolve every reference through section extraction
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn process_challenge_with(
    path: impl AsRef<Path>,
    config: &ResolveConfig,
) -> Result<ChallengeBundle> {
    let content = read_document(path.as_ref())?;
    let challenge = decompose_challenge_with(&content, config)?;

    let matching = if config.strict_headings {
        HeadingMatch::Exact
    } else {
        HeadingMatch::Contains
    };
    let assembled = assemble_references_with(&challenge.references, matching)?;

    info!(
        references = challenge.references.len(),
        missing = assembled.missing.len(),
        "challenge processed"
    );

    Ok(ChallengeBundle {
        challenge,
        reference_text: assembled.text,
        missing: assembled.missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Config pointing the docs prefix into a temp directory. The resolved
    /// paths keep the literal backslash, so on non-Windows hosts the
    /// knowledge files are plain files whose names contain a backslash.
    fn tmp_config(root: &Path) -> ResolveConfig {
        ResolveConfig {
            docs_dir: format!("{}/docs", root.display()),
            doc_extension: ".md".into(),
            strict_headings: false,
        }
    }

    fn write_challenge(root: &Path) -> std::path::PathBuf {
        let path = root.join("cell.challenge.md");
        let text = "What happens in mitosis?\n\n# ANSWER\n\nChromosomes separate.\
                    \n\n# References\n\nbiology|Mitosis\nbiology|Meiosis";
        std::fs::write(&path, text).expect("write challenge");
        path
    }

    #[test]
    fn pipeline_resolves_references() {
        let dir = tempfile::tempdir().expect("tempdir");
        let challenge_path = write_challenge(dir.path());
        std::fs::write(
            dir.path().join("docs\\biology.md"),
            "## Mitosis\ncell division\n## Meiosis\ngamete formation\n",
        )
        .expect("write doc");

        let bundle = process_challenge_with(&challenge_path, &tmp_config(dir.path()))
            .expect("process");

        assert_eq!(bundle.challenge.question, "What happens in mitosis?");
        assert_eq!(bundle.challenge.answer, "Chromosomes separate.");
        assert_eq!(bundle.reference_text, "cell divisiongamete formation");
        assert!(bundle.missing.is_empty());
    }

    #[test]
    fn pipeline_reports_missing_sections() {
        let dir = tempfile::tempdir().expect("tempdir");
        let challenge_path = write_challenge(dir.path());
        std::fs::write(
            dir.path().join("docs\\biology.md"),
            "## Mitosis\ncell division\n",
        )
        .expect("write doc");

        let bundle = process_challenge_with(&challenge_path, &tmp_config(dir.path()))
            .expect("process");

        assert_eq!(bundle.reference_text, "cell division");
        assert_eq!(bundle.missing.len(), 1);
        assert_eq!(bundle.missing[0].section_title, "Meiosis");
    }

    #[test]
    fn pipeline_fails_on_missing_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let challenge_path = write_challenge(dir.path());
        // No knowledge file written; extraction hits a file-access error.
        let result = process_challenge_with(&challenge_path, &tmp_config(dir.path()));
        assert!(result.is_err());
    }

    #[test]
    fn pipeline_fails_on_malformed_challenge() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.challenge.md");
        std::fs::write(&path, "no separators here").expect("write challenge");

        let result = process_challenge_with(&path, &tmp_config(dir.path()));
        assert!(result.is_err());
    }

    #[test]
    fn bundle_serializes_to_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let challenge_path = write_challenge(dir.path());
        std::fs::write(
            dir.path().join("docs\\biology.md"),
            "## Mitosis\ncell division\n## Meiosis\ngamete formation\n",
        )
        .expect("write doc");

        let bundle = process_challenge_with(&challenge_path, &tmp_config(dir.path()))
            .expect("process");

        let json = serde_json::to_string(&bundle).expect("serialize");
        assert!(json.contains("\"reference_text\""));
        assert!(json.contains("cell division"));
    }
}
