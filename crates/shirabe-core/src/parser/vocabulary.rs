//! # Vocabulary Tables
//!
//! Literal markers mapped to semantic tags. The tables are plain data: the
//! built-in set can be replaced, table by table, from a JSON document
//! without touching extractor code.
//!
//! Matching is a case-insensitive substring test against the width-folded
//! text of a segment. Table order matters where one segment could satisfy
//! several entries: the first entry wins.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShirabeError};
use crate::parser::normalizer::Segment;
use crate::types::{FrameRate, MediaOrigin, Resolution, SubtitleKind, SubtitleLanguage};

/// Markers that all resolve to one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEntry<T> {
    pub tag: T,
    pub markers: Vec<String>,
}

impl<T: Copy> MarkerEntry<T> {
    fn new(tag: T, markers: &[&str]) -> Self {
        Self {
            tag,
            markers: markers.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    /// Offset of the right-most marker occurrence in `segment`, if any.
    #[must_use]
    pub fn find_in(&self, segment: &Segment) -> Option<usize> {
        self.markers.iter().filter_map(|m| segment.rfind(m)).max()
    }
}

/// The first entry of `table` with a marker in `segment`, with the offset
/// of that marker.
pub(crate) fn first_match<T: Copy>(
    table: &[MarkerEntry<T>],
    segment: &Segment,
) -> Option<(T, usize)> {
    table
        .iter()
        .find_map(|entry| entry.find_in(segment).map(|offset| (entry.tag, offset)))
}

/// Returns `true` if any of `markers` occurs in `segment`.
pub(crate) fn mentions(markers: &[String], segment: &Segment) -> bool {
    markers.iter().any(|m| segment.contains(m))
}

/// Every marker table the classifier consults.
///
/// Omitted tables in a JSON document fall back to the built-in ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub languages: Vec<MarkerEntry<SubtitleLanguage>>,
    /// "双语" style modifiers: a Chinese track plus one of these implies JPN.
    pub bilingual: Vec<String>,
    /// Whole words that imply CHT when nothing earlier named a language.
    pub traditional_sources: Vec<String>,
    pub resolutions: Vec<MarkerEntry<Resolution>>,
    pub subtitle_kinds: Vec<MarkerEntry<SubtitleKind>>,
    pub frame_rates: Vec<MarkerEntry<FrameRate>>,
    pub media_origins: Vec<MarkerEntry<MediaOrigin>>,
    /// Segments carrying these are never episode candidates.
    pub codecs: Vec<String>,
    /// Labels that make a segment a special (SP, OVA, ...).
    pub specials: Vec<String>,
    /// Markers of a disc batch, used when no episode token exists.
    pub batch: Vec<String>,
    /// Recruitment notices deleted from segments before matching.
    pub recruitment: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            languages: vec![
                MarkerEntry::new(
                    SubtitleLanguage::CHS,
                    &[
                        "简中", "GB", "GBK", "简体中文", "中字", "简", "簡", "CHS", "Zh-Hans",
                        "Zh_Hans", "zh_cn",
                    ],
                ),
                MarkerEntry::new(
                    SubtitleLanguage::CHT,
                    &[
                        "繁中", "BIG5", "BIG 5", "繁", "CHT", "Zh-Hant", "Zh_Hant", "zh_tw",
                    ],
                ),
                MarkerEntry::new(SubtitleLanguage::JPN, &["日", "JP", "JPN", "Japanese"]),
                MarkerEntry::new(SubtitleLanguage::ENG, &["英", "English"]),
            ],
            bilingual: strings(&["双语", "雙語"]),
            traditional_sources: strings(&["Baha"]),
            resolutions: vec![
                MarkerEntry::new(Resolution::SD480, &["480P", "x480"]),
                MarkerEntry::new(Resolution::HD720, &["720P", "x720"]),
                MarkerEntry::new(Resolution::FHD1080, &["1080P", "x1080", "1920x804"]),
                MarkerEntry::new(Resolution::UHD2160, &["2160P", "x2160", "4K"]),
            ],
            subtitle_kinds: vec![
                MarkerEntry::new(SubtitleKind::Embedded, &["内嵌", "內嵌"]),
                MarkerEntry::new(SubtitleKind::Closed, &["内封", "內封"]),
                MarkerEntry::new(
                    SubtitleKind::ExternalDiscover,
                    &["外挂", "外掛", "外挂字幕", "ASSx2", "ASSx3"],
                ),
            ],
            frame_rates: vec![MarkerEntry::new(
                FrameRate::Fps60,
                &["@60", "1080P60", "2160P60", "60FPS", "60 FPS"],
            )],
            media_origins: vec![
                MarkerEntry::new(MediaOrigin::BdRip, &["BDRip"]),
                MarkerEntry::new(MediaOrigin::BluRay, &["Blu-Ray", "BluRay"]),
                MarkerEntry::new(MediaOrigin::WebRip, &["WebRip"]),
                MarkerEntry::new(MediaOrigin::WebDl, &["WEB-DL", "WebDL"]),
            ],
            codecs: strings(&["x264", "x265"]),
            specials: strings(&["SP", "OVA", "OAD", "小剧场", "特别篇", "番外篇"]),
            batch: strings(&["BD", "Blu-Ray"]),
            recruitment: strings(&["招募", "招新"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Vocabulary {
    /// Parses a JSON vocabulary document and validates it.
    ///
    /// # Errors
    ///
    /// Returns `ShirabeError::VocabularyFormat` for malformed JSON and
    /// `ShirabeError::InvalidVocabulary` when a table fails validation.
    ///
    /// # Examples
    /// ```
    /// use shirabe_core::parser::Vocabulary;
    /// use shirabe_core::types::Resolution;
    ///
    /// let vocabulary = Vocabulary::from_json(
    ///     r#"{ "resolutions": [ { "tag": "1080P", "markers": ["1080P", "FHD"] } ] }"#,
    /// ).unwrap();
    /// assert_eq!(vocabulary.resolutions[0].tag, Resolution::FHD1080);
    /// assert!(!vocabulary.languages.is_empty());
    /// ```
    pub fn from_json(document: &str) -> Result<Self> {
        let vocabulary: Self = serde_json::from_str(document)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Checks that every table is usable.
    ///
    /// # Errors
    ///
    /// Returns `ShirabeError::InvalidVocabulary` naming the first offending
    /// table.
    pub fn validate(&self) -> Result<()> {
        check_entries("languages", &self.languages)?;
        check_entries("resolutions", &self.resolutions)?;
        check_entries("subtitle_kinds", &self.subtitle_kinds)?;
        check_entries("frame_rates", &self.frame_rates)?;
        check_entries("media_origins", &self.media_origins)?;
        check_markers("bilingual", &self.bilingual)?;
        check_markers("traditional_sources", &self.traditional_sources)?;
        check_markers("codecs", &self.codecs)?;
        check_markers("specials", &self.specials)?;
        check_markers("batch", &self.batch)?;
        check_markers("recruitment", &self.recruitment)?;
        Ok(())
    }

    /// A copy with every marker lowercased, ready for matching against
    /// segment keys. Recruitment notices are deleted verbatim and keep
    /// their case.
    pub(crate) fn lowercased(&self) -> Self {
        Self {
            languages: lower_entries(&self.languages),
            bilingual: lower(&self.bilingual),
            traditional_sources: lower(&self.traditional_sources),
            resolutions: lower_entries(&self.resolutions),
            subtitle_kinds: lower_entries(&self.subtitle_kinds),
            frame_rates: lower_entries(&self.frame_rates),
            media_origins: lower_entries(&self.media_origins),
            codecs: lower(&self.codecs),
            specials: lower(&self.specials),
            batch: lower(&self.batch),
            recruitment: self.recruitment.clone(),
        }
    }
}

fn check_markers(table: &'static str, markers: &[String]) -> Result<()> {
    if let Some(position) = markers.iter().position(|m| m.trim().is_empty()) {
        return Err(ShirabeError::InvalidVocabulary {
            table,
            reason: format!("marker #{position} is blank"),
        });
    }
    Ok(())
}

fn check_entries<T: std::fmt::Debug>(table: &'static str, entries: &[MarkerEntry<T>]) -> Result<()> {
    if entries.is_empty() {
        return Err(ShirabeError::InvalidVocabulary {
            table,
            reason: "table has no entries".to_string(),
        });
    }
    for entry in entries {
        if entry.markers.is_empty() {
            return Err(ShirabeError::InvalidVocabulary {
                table,
                reason: format!("marker list for {:?} is empty", entry.tag),
            });
        }
        check_markers(table, &entry.markers)?;
    }
    Ok(())
}

fn lower(markers: &[String]) -> Vec<String> {
    markers.iter().map(|m| m.to_lowercase()).collect()
}

fn lower_entries<T: Copy>(entries: &[MarkerEntry<T>]) -> Vec<MarkerEntry<T>> {
    entries
        .iter()
        .map(|e| MarkerEntry {
            tag: e.tag,
            markers: lower(&e.markers),
        })
        .collect()
}
