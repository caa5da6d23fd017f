//! # Shirabe
//!
//! Reads episode ranges, subtitle languages, resolutions and subtitle
//! delivery kinds out of anime release titles.
//!
//! ```rust
//! let result = shirabe::classify(
//!     "[VCB-Studio] 剧场版 紫罗兰永恒花园 / Gekijouban Violet Evergarden 10-bit 2160p/1080p HEVC BDRip [MOVIE]",
//! );
//! assert_eq!(result.render_episode_range(), "S?");
//! assert_eq!(result.render_resolution(), "1080P");
//! ```
//!
//! See [`shirabe_core`] for the full API.

pub use shirabe_core::*;
