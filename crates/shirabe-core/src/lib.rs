//! # Shirabe Core
//!
//! Release-title classifier for fansub and release-group naming
//! conventions. Extracts the episode range, subtitle languages, resolution
//! and subtitle delivery kind from free-form titles that mix Chinese,
//! Japanese and English with full- and half-width punctuation.
//!
//! ## Quick Start
//!
//! ```rust
//! use shirabe_core::parser::Classifier;
//! use shirabe_core::types::{Resolution, SubtitleKind};
//!
//! let classifier = Classifier::default().unwrap();
//! let result = classifier.classify(
//!     "[ANi] 吹響吧！上低音號 第三季（僅限港澳台地區） - 07 [1080P][Bilibili][WEB-DL][AAC AVC][CHT CHS][MP4]",
//! );
//!
//! assert_eq!(result.render_episode_range(), "07..07");
//! assert_eq!(result.render_subtitle_languages(), "CHS, CHT");
//! assert_eq!(result.resolution, Some(Resolution::FHD1080));
//! assert_eq!(result.subtitle_kind, Some(SubtitleKind::Closed));
//! ```
pub mod corpus;
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use corpus::{load_cases, CorpusCase, Mismatch};
pub use error::{Result, ShirabeError};
pub use parser::{classify, classify_with, Classifier, ClassifierConfig, Normalizer, Vocabulary};
pub use types::{
    CanonicalFields, ClassifiedTitle, EpisodeRange, EpisodeSort, FrameRate, MediaOrigin,
    Resolution, SubtitleKind, SubtitleLanguage,
};
