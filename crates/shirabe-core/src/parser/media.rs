//! # Media Extractor
//!
//! Frame rate and encode origin. Both follow the resolution rules: the
//! first table entry a segment mentions, and the right-most segment wins.

use crate::parser::disambiguate::Candidate;
use crate::parser::normalizer::Segments;
use crate::parser::vocabulary::{first_match, MarkerEntry, Vocabulary};
use crate::types::{FrameRate, MediaOrigin};

fn scan<T: Copy>(segments: &Segments, table: &[MarkerEntry<T>]) -> Vec<Candidate<T>> {
    segments
        .iter()
        .filter_map(|segment| {
            first_match(table, segment).map(|(tag, offset)| Candidate::new(tag, segment.index, offset))
        })
        .collect()
}

/// Collects frame-rate candidates.
pub fn frame_rates(segments: &Segments, vocabulary: &Vocabulary) -> Vec<Candidate<FrameRate>> {
    scan(segments, &vocabulary.frame_rates)
}

/// Collects encode-origin candidates.
pub fn media_origins(segments: &Segments, vocabulary: &Vocabulary) -> Vec<Candidate<MediaOrigin>> {
    scan(segments, &vocabulary.media_origins)
}
