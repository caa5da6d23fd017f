pub mod classifier;
pub mod disambiguate;
pub mod episode;
pub mod language;
pub mod media;
pub mod normalizer;
pub mod quirks;
pub mod resolution;
pub mod subtitle_kind;
pub mod vocabulary;

pub use classifier::{classify, classify_with, Classifier, ClassifierConfig};
pub use disambiguate::Candidate;
pub use episode::EpisodeExtractor;
pub use normalizer::{fold_width, Normalizer, Segment, Segments};
pub use vocabulary::{MarkerEntry, Vocabulary};
