use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::episode::EpisodeRange;
use super::tags::{FrameRate, MediaOrigin, Resolution, SubtitleKind, SubtitleLanguage};

/// The output of the classifier for one release title.
///
/// Every field is extracted independently; a field that could not be
/// determined is `None` (or empty) without affecting the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedTitle {
    /// Original input string, untouched.
    pub title: String,

    /// Episode coverage.
    pub episode_range: Option<EpisodeRange>,

    /// Subtitle languages, kept in canonical order.
    pub subtitle_languages: BTreeSet<SubtitleLanguage>,

    /// Video resolution.
    pub resolution: Option<Resolution>,

    /// Subtitle delivery kind.
    pub subtitle_kind: Option<SubtitleKind>,

    /// High frame-rate marker.
    pub frame_rate: Option<FrameRate>,

    /// Encode source.
    pub media_origin: Option<MediaOrigin>,

    /// Seasonal announcement segments ("★4月新番") removed before matching.
    pub tags: Vec<String>,
}

impl ClassifiedTitle {
    /// Creates an empty result for the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            episode_range: None,
            subtitle_languages: BTreeSet::new(),
            resolution: None,
            subtitle_kind: None,
            frame_rate: None,
            media_origin: None,
            tags: Vec::new(),
        }
    }

    /// `"<start>..<end>"`, or `"null"` when no range was found.
    #[must_use]
    pub fn render_episode_range(&self) -> String {
        self.episode_range
            .as_ref()
            .map_or_else(|| "null".to_string(), ToString::to_string)
    }

    /// Language ids joined with `", "`; empty when none were found.
    #[must_use]
    pub fn render_subtitle_languages(&self) -> String {
        self.subtitle_languages
            .iter()
            .map(|l| l.id())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolution tag name, or `"null"`.
    #[must_use]
    pub fn render_resolution(&self) -> String {
        self.resolution
            .map_or_else(|| "null".to_string(), |r| r.id().to_string())
    }

    /// The golden-corpus comparison form of this result.
    #[must_use]
    pub fn canonical(&self) -> CanonicalFields {
        CanonicalFields {
            episode_range: self.render_episode_range(),
            subtitle_languages: self.render_subtitle_languages(),
            resolution: self.render_resolution(),
            subtitle_kind: self.subtitle_kind,
        }
    }

    /// Returns `true` if none of the four primary fields were found.
    #[must_use]
    pub fn is_unclassified(&self) -> bool {
        self.episode_range.is_none()
            && self.subtitle_languages.is_empty()
            && self.resolution.is_none()
            && self.subtitle_kind.is_none()
    }
}

/// Deterministic string renderings of the four primary fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalFields {
    pub episode_range: String,
    pub subtitle_languages: String,
    pub resolution: String,
    /// Typed, so that "absent" never collides with a literal string.
    pub subtitle_kind: Option<SubtitleKind>,
}

impl std::fmt::Display for CanonicalFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | ",
            self.episode_range, self.subtitle_languages, self.resolution
        )?;
        match self.subtitle_kind {
            Some(kind) => write!(f, "{kind}"),
            None => write!(f, "null"),
        }
    }
}
