//! # Subtitle-Kind Extractor
//!
//! Reports every kind marker with its position. Which one wins, and the
//! fallback when there is none, is decided in
//! [`disambiguate::subtitle_kind`](crate::parser::disambiguate::subtitle_kind).

use crate::parser::disambiguate::Candidate;
use crate::parser::normalizer::Segments;
use crate::parser::vocabulary::Vocabulary;
use crate::types::SubtitleKind;

/// Collects one candidate per kind entry found in each segment, positioned
/// at the right-most marker occurrence.
pub fn extract(segments: &Segments, vocabulary: &Vocabulary) -> Vec<Candidate<SubtitleKind>> {
    let mut found = Vec::new();
    for segment in segments.iter() {
        for entry in &vocabulary.subtitle_kinds {
            if let Some(offset) = entry.find_in(segment) {
                found.push(Candidate::new(entry.tag, segment.index, offset));
            }
        }
    }
    found
}
