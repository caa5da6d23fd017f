//! # Resolution Extractor
//!
//! Each segment contributes the first resolution entry, in table order,
//! that it mentions. Only literal markers count: "Full HD" never resolves.

use crate::parser::disambiguate::Candidate;
use crate::parser::normalizer::Segments;
use crate::parser::vocabulary::{first_match, Vocabulary};
use crate::types::Resolution;

/// Collects at most one resolution candidate per segment.
pub fn extract(segments: &Segments, vocabulary: &Vocabulary) -> Vec<Candidate<Resolution>> {
    segments
        .iter()
        .filter_map(|segment| {
            first_match(&vocabulary.resolutions, segment)
                .map(|(tag, offset)| Candidate::new(tag, segment.index, offset))
        })
        .collect()
}
