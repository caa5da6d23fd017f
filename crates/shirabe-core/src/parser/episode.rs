//! # Episode-Range Extractor
//!
//! Every segment is tested on its own and yields at most one candidate:
//!
//! 1. a bare number once episode decorations are stripped ("第06話", "12_完", "07v2")
//! 2. a collection such as "01-12", "SP1~4" or "01-06TV+特典映像"
//! 3. a season composite such as "S2" or "S1+S2+SP+Moviex4"
//! 4. a special ("OVA", "SP7", "番外篇"), labelled with the whole segment
//!
//! Segments that name a video codec are skipped outright.

use regex::{Captures, Regex};
use tracing::trace;

use crate::error::Result;
use crate::parser::disambiguate::Candidate;
use crate::parser::normalizer::{Segment, Segments};
use crate::parser::vocabulary::{mentions, Vocabulary};
use crate::types::EpisodeRange;

/// Pattern-based episode candidate finder.
#[derive(Debug, Clone)]
pub struct EpisodeExtractor {
    re_decorations: Vec<Regex>,
    re_number: Regex,
    re_collection: Regex,
    re_season: Regex,
}

impl EpisodeExtractor {
    /// Constructs a new `EpisodeExtractor` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `ShirabeError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Removed in this order.
            re_decorations: vec![
                Regex::new(r"第")?,
                Regex::new(r"(?i)_?(?:完|END)|\(完\)")?,
                Regex::new(r"[话集話]")?,
                Regex::new(r"(?i)_?v[0-9]")?,
                Regex::new(r"版")?,
            ],
            re_number: Regex::new(r"^[0-9]+(?:\.[0-9]+)?$")?,
            re_collection: Regex::new(
                r"(?i)(?P<start>(?:SP)?[0-9]{1,4})(?-u:\s)?(?:-{1,2}|~|～)(?-u:\s)?(?P<end>[0-9]{1,4})(?:TV|BDrip|BD)?(?P<extra>\+.+)?",
            )?,
            re_season: Regex::new(
                r"(?i)(S[0-9]+(?:E[0-9]+)?)(?:(\+S[0-9]+(?:E[0-9]+)?)|(\+S(?-u:\w))|(\+(?-u:\w)+))*",
            )?,
        })
    }

    /// Collects one candidate per segment that looks like an episode token.
    pub fn extract(
        &self,
        segments: &Segments,
        vocabulary: &Vocabulary,
    ) -> Vec<Candidate<EpisodeRange>> {
        segments
            .iter()
            .filter_map(|segment| {
                self.segment_range(segment, vocabulary)
                    .map(|range| Candidate::new(range, segment.index, 0))
            })
            .collect()
    }

    /// Returns `true` if any segment marks the release as a disc batch.
    #[must_use]
    pub fn mentions_batch(&self, segments: &Segments, vocabulary: &Vocabulary) -> bool {
        segments.iter().any(|s| mentions(&vocabulary.batch, s))
    }

    /// Reads one segment as an episode token.
    pub fn segment_range(&self, segment: &Segment, vocabulary: &Vocabulary) -> Option<EpisodeRange> {
        if mentions(&vocabulary.codecs, segment) {
            trace!(segment = %segment.text, "codec segment skipped");
            return None;
        }

        let stripped = self.strip_decorations(&segment.text);

        let range = if self.re_number.is_match(&stripped) {
            Some(EpisodeRange::single(&stripped))
        } else if let Some(caps) = self.re_collection.captures(&stripped) {
            Some(collection_range(&caps))
        } else if let Some(caps) = self.re_season.captures(&stripped) {
            season_range(&caps)
        } else if is_special(&stripped, vocabulary) {
            Some(EpisodeRange::single(&segment.raw))
        } else {
            None
        };

        if let Some(ref range) = range {
            trace!(segment = %segment.text, %range, "episode candidate");
        }
        range
    }

    fn strip_decorations(&self, text: &str) -> String {
        self.re_decorations
            .iter()
            .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
    }
}

fn collection_range(caps: &Captures<'_>) -> EpisodeRange {
    let start = caps.name("start").map_or("", |m| m.as_str());
    let end = caps.name("end").map_or("", |m| m.as_str());

    if let Some(prefix) = label_prefix(start) {
        if !end.starts_with(prefix) {
            return EpisodeRange::range(start, format!("{prefix}{end}"));
        }
    }
    // "3 - 02": the left number belongs to the title
    if end.starts_with('0') && !start.starts_with('0') {
        return EpisodeRange::single(end);
    }

    let range = EpisodeRange::range(start, end);
    match caps.name("extra") {
        Some(extra) => {
            let extra = extra.as_str();
            let extra = extra.strip_prefix('+').unwrap_or(extra);
            EpisodeRange::combined(vec![range, EpisodeRange::single(extra)])
        }
        None => range,
    }
}

/// The non-digit head of a label such as "SP1", if it has one.
fn label_prefix(label: &str) -> Option<&str> {
    let first_digit = label.find(|c: char| c.is_ascii_digit())?;
    (first_digit > 0).then(|| &label[..first_digit])
}

fn season_range(caps: &Captures<'_>) -> Option<EpisodeRange> {
    let parts: Vec<EpisodeRange> = caps
        .iter()
        .skip(1)
        .flatten()
        .filter_map(|m| season_part(m.as_str()))
        .collect();

    if parts.is_empty() {
        return None;
    }
    Some(EpisodeRange::combined(parts))
}

fn season_part(token: &str) -> Option<EpisodeRange> {
    let part = token.strip_prefix('+').unwrap_or(token);
    if part.trim().is_empty() {
        return None;
    }
    if part.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("sp")) {
        return Some(EpisodeRange::single(part));
    }
    if part.contains(['e', 'E']) {
        let episode = part.split_once('E').map_or(part, |(_, after)| after);
        if let Some(n) = parse_number(episode) {
            return Some(EpisodeRange::single(n.to_string()));
        }
    }

    let mut chars = part.chars();
    chars.next();
    Some(EpisodeRange::Season(parse_number(chars.as_str())))
}

fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn is_special(stripped: &str, vocabulary: &Vocabulary) -> bool {
    let key = stripped.to_lowercase();
    vocabulary.specials.iter().any(|m| key.contains(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::normalizer::Normalizer;

    struct Fixture {
        extractor: EpisodeExtractor,
        normalizer: Normalizer,
        vocabulary: Vocabulary,
    }

    impl Fixture {
        fn new() -> Self {
            let vocabulary = Vocabulary::default().lowercased();
            Self {
                extractor: EpisodeExtractor::new().unwrap(),
                normalizer: Normalizer::new(vocabulary.recruitment.clone()).unwrap(),
                vocabulary,
            }
        }

        /// Reads a single bracketed token.
        fn token(&self, token: &str) -> Option<String> {
            let segments = self.normalizer.normalize(&format!("[{token}]"));
            self.extractor
                .segment_range(&segments.segments[0], &self.vocabulary)
                .map(|r| r.to_string())
        }

        fn candidates(&self, title: &str) -> Vec<String> {
            let segments = self.normalizer.normalize(title);
            self.extractor
                .extract(&segments, &self.vocabulary)
                .into_iter()
                .map(|c| c.value.to_string())
                .collect()
        }
    }

    #[test]
    fn bare_numbers() {
        let f = Fixture::new();
        assert_eq!(f.token("07").as_deref(), Some("07..07"));
        assert_eq!(f.token("7").as_deref(), Some("07..07"));
        assert_eq!(f.token("1084").as_deref(), Some("1084..1084"));
        assert_eq!(f.token("12.5").as_deref(), Some("12.5..12.5"));
        assert_eq!(f.token("０６").as_deref(), Some("06..06"));
    }

    #[test]
    fn localized_episode_markers() {
        let f = Fixture::new();
        assert_eq!(f.token("第06話").as_deref(), Some("06..06"));
        assert_eq!(f.token("第12集").as_deref(), Some("12..12"));
        assert_eq!(f.token("第12话_完").as_deref(), Some("12..12"));
        assert_eq!(f.token("12(完)").as_deref(), Some("12..12"));
        assert_eq!(f.token("13END").as_deref(), Some("13..13"));
    }

    #[test]
    fn version_suffix_keeps_base_episode() {
        let f = Fixture::new();
        assert_eq!(f.token("07v2").as_deref(), Some("07..07"));
        assert_eq!(f.token("第06話V2版").as_deref(), Some("06..06"));
    }

    #[test]
    fn collections() {
        let f = Fixture::new();
        assert_eq!(f.token("01-12").as_deref(), Some("01..12"));
        assert_eq!(f.token("01~12").as_deref(), Some("01..12"));
        assert_eq!(f.token("01 - 12").as_deref(), Some("01..12"));
        assert_eq!(f.token("00-12Fin").as_deref(), Some("00..12"));
        assert_eq!(f.token("01-12_Fin").as_deref(), Some("01..12"));
        assert_eq!(f.token("第01-12话").as_deref(), Some("01..12"));
    }

    #[test]
    fn special_collections_carry_prefix() {
        let f = Fixture::new();
        assert_eq!(f.token("SP1~4").as_deref(), Some("SP01..SP04"));
        assert_eq!(f.token("SP01-07全").as_deref(), Some("SP01..SP07"));
    }

    #[test]
    fn collection_with_extra() {
        let f = Fixture::new();
        assert_eq!(f.token("01-06TV+特典映像").as_deref(), Some("01..06+特典映像"));
    }

    #[test]
    fn zero_padded_end_is_the_episode() {
        let f = Fixture::new();
        assert_eq!(f.token("3 - 02").as_deref(), Some("02..02"));
    }

    #[test]
    fn season_markers() {
        let f = Fixture::new();
        assert_eq!(f.token("S2").as_deref(), Some("S2"));
        assert_eq!(f.token("S1+S2+SP+Moviex4").as_deref(), Some("S1+S2+SP+S?"));
        assert_eq!(f.token("S1+S2+Movie").as_deref(), Some("S1+S2+S?"));
        assert_eq!(f.token("S1E5").as_deref(), Some("05..05"));
    }

    #[test]
    fn season_extras_are_ascii_words() {
        let f = Fixture::new();
        assert_eq!(f.token("S2+特典映像").as_deref(), Some("S2"));
        assert_eq!(f.token("S1+S2+映像特典").as_deref(), Some("S1+S2"));
        assert_eq!(f.token("S1+S2+SP+特典").as_deref(), Some("S1+S2+SP"));
    }

    #[test]
    fn specials_use_raw_segment() {
        let f = Fixture::new();
        assert_eq!(f.token("OVA").as_deref(), Some("OVA..OVA"));
        assert_eq!(f.token("SP7").as_deref(), Some("SP07..SP07"));
        assert_eq!(f.token("BDSP").as_deref(), Some("BDSP..BDSP"));
        assert_eq!(f.token("番外篇").as_deref(), Some("番外篇..番外篇"));
        assert_eq!(f.token("全13話+SP").as_deref(), Some("全13話+SP..全13話+SP"));
        assert_eq!(
            f.token("Vol.1-Vol.7+OVA").as_deref(),
            Some("Vol.1-Vol.7+OVA..Vol.1-Vol.7+OVA")
        );
    }

    #[test]
    fn non_episode_segments() {
        let f = Fixture::new();
        assert_eq!(f.token("1080P"), None);
        assert_eq!(f.token("1920x1080"), None);
        assert_eq!(f.token("2024年4月番"), None);
        assert_eq!(f.token("简繁内封"), None);
        assert_eq!(f.token("WebRip"), None);
        assert_eq!(f.token("Full HD"), None);
    }

    #[test]
    fn codec_segments_are_skipped() {
        let f = Fixture::new();
        assert_eq!(f.token("01-12 x264"), None);
        assert_eq!(f.token("BDRip 1080p x265"), None);
    }

    #[test]
    fn one_candidate_per_segment() {
        let f = Fixture::new();
        assert_eq!(
            f.candidates("[桜都字幕組] 無職轉生～到了異世界就拿出真本事～ S2 [18][1080p@60FPS][繁體內嵌]"),
            ["S2", "18..18"]
        );
    }

    #[test]
    fn batch_mentions() {
        let f = Fixture::new();
        let segments = f.normalizer.normalize("[VCB-Studio] 10-bit 1080p HEVC BDRip [MOVIE]");
        assert!(f.extractor.mentions_batch(&segments, &f.vocabulary));

        let segments = f.normalizer.normalize("[Group] Title [WebRip][1080p]");
        assert!(!f.extractor.mentions_batch(&segments, &f.vocabulary));
    }
}
