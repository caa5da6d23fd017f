//! # Classifier
//!
//! Ties the normalizer, the extractors and the disambiguation rules
//! together behind one call.

use std::sync::LazyLock;

use tracing::debug;

use crate::error::Result;
use crate::parser::disambiguate;
use crate::parser::episode::EpisodeExtractor;
use crate::parser::normalizer::Normalizer;
use crate::parser::quirks::pinned_episode_range;
use crate::parser::vocabulary::Vocabulary;
use crate::parser::{language, media, resolution, subtitle_kind};
use crate::types::ClassifiedTitle;

/// Configuration for the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Marker tables
    pub vocabulary: Vocabulary,
    /// Apply the pinned episode ranges for known titles
    pub pinned_quirks: bool,
    /// Infer closed subtitles from two or more non-Japanese tracks
    pub multi_track_inference: bool,
    /// Report `S?` for disc batches without an episode token
    pub batch_fallback: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            pinned_quirks: true,
            multi_track_inference: true,
            batch_fallback: true,
        }
    }
}

impl ClassifierConfig {
    /// Create a new classifier configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the marker tables.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Enable or disable pinned episode ranges.
    pub fn with_pinned_quirks(mut self, enabled: bool) -> Self {
        self.pinned_quirks = enabled;
        self
    }

    /// Enable or disable closed-subtitle inference from track count.
    pub fn with_multi_track_inference(mut self, enabled: bool) -> Self {
        self.multi_track_inference = enabled;
        self
    }

    /// Enable or disable the disc batch fallback.
    pub fn with_batch_fallback(mut self, enabled: bool) -> Self {
        self.batch_fallback = enabled;
        self
    }
}

/// Release-title classifier.
///
/// Holds only read-only state after construction, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    markers: Vocabulary,
    normalizer: Normalizer,
    episodes: EpisodeExtractor,
}

impl Classifier {
    /// Create a new classifier with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ShirabeError::InvalidVocabulary` if the vocabulary fails
    /// validation.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.vocabulary.validate()?;
        let markers = config.vocabulary.lowercased();
        let normalizer = Normalizer::new(markers.recruitment.clone())?;
        let episodes = EpisodeExtractor::new()?;

        Ok(Self {
            config,
            markers,
            normalizer,
            episodes,
        })
    }

    /// Create a new classifier with default configuration.
    pub fn default() -> Result<Self> {
        Self::new(ClassifierConfig::default())
    }

    /// Classify a release title.
    ///
    /// Never fails: any field that cannot be determined is left empty.
    ///
    /// # Examples
    /// ```
    /// use shirabe_core::parser::Classifier;
    /// use shirabe_core::types::{Resolution, SubtitleKind};
    ///
    /// let classifier = Classifier::default().unwrap();
    /// let result = classifier.classify(
    ///     "[桜都字幕組] 無職轉生～到了異世界就拿出真本事～ S2 [18][1080p@60FPS][繁體內嵌]",
    /// );
    ///
    /// assert_eq!(result.render_episode_range(), "18..18");
    /// assert_eq!(result.render_subtitle_languages(), "CHT");
    /// assert_eq!(result.resolution, Some(Resolution::FHD1080));
    /// assert_eq!(result.subtitle_kind, Some(SubtitleKind::Embedded));
    /// ```
    pub fn classify(&self, title: &str) -> ClassifiedTitle {
        let segments = self.normalizer.normalize(title);
        let markers = &self.markers;

        let mut result = ClassifiedTitle::new(title);

        let episodes = self.episodes.extract(&segments, markers);
        let batch = self.config.batch_fallback && self.episodes.mentions_batch(&segments, markers);
        result.episode_range = disambiguate::episode_range(episodes, batch);

        result.subtitle_languages = disambiguate::union(language::extract(&segments, markers));
        result.resolution = disambiguate::rightmost(resolution::extract(&segments, markers));
        result.subtitle_kind = disambiguate::subtitle_kind(
            subtitle_kind::extract(&segments, markers),
            &result.subtitle_languages,
            self.config.multi_track_inference,
        );
        result.frame_rate = disambiguate::rightmost(media::frame_rates(&segments, markers));
        result.media_origin = disambiguate::rightmost(media::media_origins(&segments, markers));
        result.tags = segments.tags;

        if self.config.pinned_quirks {
            if let Some(pinned) = pinned_episode_range(title) {
                debug!(title, "episode range pinned");
                result.episode_range = pinned;
            }
        }

        debug!(
            title,
            segments = segments.segments.len(),
            fields = %result.canonical(),
            "classified"
        );
        result
    }

    /// Get the classifier configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
    Classifier::default().expect("built-in vocabulary and patterns are valid")
});

/// Convenience function to classify a title with the shared default
/// classifier.
///
/// # Examples
/// ```
/// let result = shirabe_core::classify(
///     "[北宇治字幕组] 吹响吧！上低音号 第三季 / Hibike! Euphonium 3 [07][WebRip][HEVC_AAC][简繁日内封][招募时轴]",
/// );
/// assert_eq!(result.canonical().to_string(), "07..07 | CHS, CHT, JPN | null | CLOSED");
/// ```
pub fn classify(title: &str) -> ClassifiedTitle {
    DEFAULT_CLASSIFIER.classify(title)
}

/// Classify with a one-off configuration.
///
/// # Errors
///
/// Returns an error if the configuration's vocabulary is invalid.
pub fn classify_with(title: &str, config: ClassifierConfig) -> Result<ClassifiedTitle> {
    let classifier = Classifier::new(config)?;
    Ok(classifier.classify(title))
}
