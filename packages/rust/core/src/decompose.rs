//! Challenge document decomposition.
//!
//! A challenge document is free-form question text, the literal
//! `\n\n# ANSWER\n\n` separator, the model answer, the literal
//! `\n\n# References\n\n` separator, and a block of `filename|title`
//! reference lines.

use tracing::{debug, instrument};

use refbuilder_shared::{
    ANSWER_SEPARATOR, Challenge, REFERENCES_SEPARATOR, RefBuilderError, Reference, ResolveConfig,
    Result,
};

/// Decompose a challenge document using the default resolution settings.
///
/// References resolve to `docs\<filename>.md`; the backslash is kept
/// literally, matching how the knowledge files are addressed.
pub fn decompose_challenge(challenge: &str) -> Result<Challenge> {
    decompose_challenge_with(challenge, &ResolveConfig::default())
}

/// Decompose a challenge document into question, answer, and references.
///
/// Both separators must occur exactly once, in order; anything else is a
/// [`RefBuilderError::Parse`]. Filenames and titles are taken verbatim
/// from the reference lines.
#[instrument(skip_all)]
pub fn decompose_challenge_with(challenge: &str, config: &ResolveConfig) -> Result<Challenge> {
    let (question, remainder) = split_exactly_once(challenge, ANSWER_SEPARATOR, "# ANSWER")?;
    let (answer, references_block) =
        split_exactly_once(remainder, REFERENCES_SEPARATOR, "# References")?;

    let references = parse_references(references_block, config)?;

    debug!(
        question_len = question.len(),
        answer_len = answer.len(),
        references = references.len(),
        "challenge decomposed"
    );

    Ok(Challenge {
        question: question.to_string(),
        answer: answer.to_string(),
        references,
    })
}

/// Split `text` on `separator`, requiring exactly one occurrence.
fn split_exactly_once<'a>(
    text: &'a str,
    separator: &str,
    label: &str,
) -> Result<(&'a str, &'a str)> {
    let (head, tail) = text
        .split_once(separator)
        .ok_or_else(|| RefBuilderError::parse(format!("missing {label} separator")))?;

    if tail.contains(separator) {
        return Err(RefBuilderError::parse(format!(
            "{label} separator occurs more than once"
        )));
    }

    Ok((head, tail))
}

/// Parse the references block into resolved reference pairs.
fn parse_references(block: &str, config: &ResolveConfig) -> Result<Vec<Reference>> {
    // A whitespace-only block counts as "no references".
    if block.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut references = Vec::new();
    for line in block.lines() {
        if line.is_empty() {
            continue;
        }

        // Split on the first '|'; the title may itself contain pipes.
        let (filename, title) = line.split_once('|').ok_or_else(|| {
            RefBuilderError::parse(format!("reference line missing '|' delimiter: {line:?}"))
        })?;

        references.push(Reference::new(
            format!("{}\\{}{}", config.docs_dir, filename, config.doc_extension),
            title,
        ));
    }

    Ok(references)
}
