//! Core domain types for challenge documents and their citations.

use serde::{Deserialize, Serialize};

/// Separator between the question part and the answer part of a challenge.
pub const ANSWER_SEPARATOR: &str = "\n\n# ANSWER\n\n";

/// Separator between the answer part and the references block.
pub const REFERENCES_SEPARATOR: &str = "\n\n# References\n\n";

/// Sentinel section title meaning "the entire document".
pub const ALL_SECTIONS: &str = "*ALL*";

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// A single citation: a resolved document path and the section to look up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Document path as constructed from the reference line, e.g.
    /// `docs\biology.md`. The backslash is part of the stored path, not a
    /// platform directory separator.
    pub doc_path: String,
    /// Section title, verbatim from the reference line.
    pub section_title: String,
}

impl Reference {
    pub fn new(doc_path: impl Into<String>, section_title: impl Into<String>) -> Self {
        Self {
            doc_path: doc_path.into(),
            section_title: section_title.into(),
        }
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} § {}", self.doc_path, self.section_title)
    }
}

// ---------------------------------------------------------------------------
// Challenge
// ---------------------------------------------------------------------------

/// A decomposed challenge document: question, model answer, and citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Free-form question text preceding the answer separator.
    pub question: String,
    /// The model answer between the two separators.
    pub answer: String,
    /// Citations from the references block, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_display() {
        let reference = Reference::new("docs\\biology.md", "Mitosis");
        assert_eq!(reference.to_string(), "docs\\biology.md § Mitosis");
    }

    #[test]
    fn challenge_serialization() {
        let challenge = Challenge {
            question: "What stages make up mitosis?".into(),
            answer: "Prophase, metaphase, anaphase, telophase.".into(),
            references: vec![Reference::new("docs\\biology.md", "Mitosis")],
        };

        let json = serde_json::to_string_pretty(&challenge).expect("serialize");
        let parsed: Challenge = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, challenge);
        // The literal backslash must survive the round trip.
        assert_eq!(parsed.references[0].doc_path, "docs\\biology.md");
    }

    #[test]
    fn challenge_without_references_omits_field() {
        let challenge = Challenge {
            question: "Q?".into(),
            answer: "A!".into(),
            references: vec![],
        };

        let json = serde_json::to_string(&challenge).expect("serialize");
        assert!(!json.contains("references"));

        let parsed: Challenge = serde_json::from_str(&json).expect("deserialize");
        assert!(parsed.references.is_empty());
    }

    #[test]
    fn challenge_fixture_validates() {
        let fixture =
            std::fs::read_to_string("../../../fixtures/json/challenge.fixture.json")
                .expect("read fixture");
        let parsed: Challenge =
            serde_json::from_str(&fixture).expect("deserialize fixture challenge");
        assert_eq!(parsed.references.len(), 2);
        assert_eq!(parsed.references[0].doc_path, "docs\\biology.md");
        assert_eq!(parsed.references[0].section_title, "Mitosis");
    }
}
