pub mod episode;
pub mod result;
pub mod tags;

pub use episode::{EpisodeRange, EpisodeSort};
pub use result::{CanonicalFields, ClassifiedTitle};
pub use tags::{FrameRate, MediaOrigin, Resolution, SubtitleKind, SubtitleLanguage};
