//! # Golden Corpus Cases
//!
//! The fixture format used to replay recorded titles against the
//! classifier: a JSON array of titles with the canonical renderings they
//! are expected to produce.
//!
//! ```json
//! [
//!   {
//!     "title": "[北宇治字幕组] ... [07][WebRip][HEVC_AAC][简繁日内封][招募时轴]",
//!     "episode_range": "07..07",
//!     "subtitle_languages": "CHS, CHT, JPN",
//!     "resolution": "null",
//!     "subtitle_kind": "CLOSED"
//!   }
//! ]
//! ```
//!
//! `subtitle_kind` may be omitted, in which case it is not checked; the
//! literal `"null"` asserts that no kind was found.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::Classifier;

/// One recorded title and its expected renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusCase {
    pub title: String,
    pub episode_range: String,
    pub subtitle_languages: String,
    pub resolution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_kind: Option<String>,
}

/// A field whose rendering differs from the recorded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {:?}, got {:?}",
            self.field, self.expected, self.actual
        )
    }
}

impl CorpusCase {
    /// Classifies the title and lists every field that differs.
    pub fn verify(&self, classifier: &Classifier) -> Vec<Mismatch> {
        let actual = classifier.classify(&self.title).canonical();
        let mut mismatches = Vec::new();

        let mut compare = |field: &'static str, expected: &str, actual: &str| {
            if expected != actual {
                mismatches.push(Mismatch {
                    field,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        };

        compare("episode_range", &self.episode_range, &actual.episode_range);
        compare(
            "subtitle_languages",
            &self.subtitle_languages,
            &actual.subtitle_languages,
        );
        compare("resolution", &self.resolution, &actual.resolution);
        if let Some(ref expected) = self.subtitle_kind {
            let kind = actual.subtitle_kind.map_or("null", |k| k.id());
            compare("subtitle_kind", expected, kind);
        }

        mismatches
    }
}

/// Parses a fixture document.
///
/// # Errors
///
/// Returns `ShirabeError::VocabularyFormat` if the document is not a valid
/// case list.
pub fn load_cases(document: &str) -> Result<Vec<CorpusCase>> {
    Ok(serde_json::from_str(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::default().unwrap()
    }

    #[test]
    fn matching_case_has_no_mismatches() {
        let cases = load_cases(
            r#"[{
                "title": "[桜都字幕組] 無職轉生～到了異世界就拿出真本事～ S2 [18][1080p@60FPS][繁體內嵌]",
                "episode_range": "18..18",
                "subtitle_languages": "CHT",
                "resolution": "1080P",
                "subtitle_kind": "EMBEDDED"
            }]"#,
        )
        .unwrap();
        assert!(cases[0].verify(&classifier()).is_empty());
    }

    #[test]
    fn omitted_kind_is_not_checked() {
        let case = CorpusCase {
            title: "[Group] Title [01][内嵌]".into(),
            episode_range: "01..01".into(),
            subtitle_languages: String::new(),
            resolution: "null".into(),
            subtitle_kind: None,
        };
        assert!(case.verify(&classifier()).is_empty());
    }

    #[test]
    fn mismatches_name_the_field() {
        let case = CorpusCase {
            title: "[Group] Title [01][1080p]".into(),
            episode_range: "02..02".into(),
            subtitle_languages: String::new(),
            resolution: "1080P".into(),
            subtitle_kind: Some("CLOSED".into()),
        };
        let mismatches = case.verify(&classifier());
        assert_eq!(mismatches.len(), 2);
        assert_eq!(mismatches[0].field, "episode_range");
        assert_eq!(
            mismatches[1].to_string(),
            r#"subtitle_kind: expected "CLOSED", got "null""#
        );
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(load_cases(r#"[{ "title": 1 }]"#).is_err());
    }
}
