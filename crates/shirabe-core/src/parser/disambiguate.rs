//! # Disambiguation Rules
//!
//! Extractors only propose candidates. These functions decide which
//! candidate a field ends up with, or that the field stays empty.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::{EpisodeRange, SubtitleKind, SubtitleLanguage};

/// A value proposed by an extractor, with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<T> {
    pub value: T,
    /// Index of the segment that produced it.
    pub segment: usize,
    /// Offset of the marker in the segment's lowercased key.
    pub offset: usize,
}

impl<T> Candidate<T> {
    #[must_use]
    pub fn new(value: T, segment: usize, offset: usize) -> Self {
        Self {
            value,
            segment,
            offset,
        }
    }
}

/// Picks the candidate found furthest to the right: the latest segment,
/// then the latest offset inside it.
pub fn rightmost<T>(candidates: Vec<Candidate<T>>) -> Option<T> {
    candidates
        .into_iter()
        .max_by_key(|c| (c.segment, c.offset))
        .map(|c| c.value)
}

/// Merges additive candidates into a duplicate-free set.
pub fn union<T: Ord>(candidates: Vec<Candidate<T>>) -> BTreeSet<T> {
    candidates.into_iter().map(|c| c.value).collect()
}

/// Resolves the episode range.
///
/// Without any candidate, a title that mentions a disc batch is a whole
/// season of unknown number (`S?`); otherwise there is no range.
pub fn episode_range(
    candidates: Vec<Candidate<EpisodeRange>>,
    mentions_batch: bool,
) -> Option<EpisodeRange> {
    if let Some(range) = rightmost(candidates) {
        return Some(range);
    }
    if mentions_batch {
        debug!("no episode token, falling back to batch season");
        return Some(EpisodeRange::unknown_season());
    }
    None
}

/// Resolves the subtitle kind.
///
/// Embedded and closed markers exclude each other; the right-most one wins.
/// External markers only count when neither is present. Failing all
/// markers, two or more non-Japanese subtitle languages mean the tracks
/// are selectable, i.e. closed, when `infer_from_languages` is set.
pub fn subtitle_kind(
    candidates: Vec<Candidate<SubtitleKind>>,
    languages: &BTreeSet<SubtitleLanguage>,
    infer_from_languages: bool,
) -> Option<SubtitleKind> {
    let (external, exclusive): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|c| c.value == SubtitleKind::ExternalDiscover);

    if let Some(kind) = rightmost(exclusive) {
        return Some(kind);
    }
    if !external.is_empty() {
        return Some(SubtitleKind::ExternalDiscover);
    }

    let tracks = languages
        .iter()
        .filter(|l| **l != SubtitleLanguage::JPN)
        .count();
    if infer_from_languages && tracks >= 2 {
        debug!(tracks, "multiple subtitle tracks, assuming closed subtitles");
        return Some(SubtitleKind::Closed);
    }
    None
}
