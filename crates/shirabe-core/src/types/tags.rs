use std::fmt;

use serde::{Deserialize, Serialize};

/// Subtitle language carried by a release.
///
/// Variants are declared in ascending order of their stable id, so the
/// derived `Ord` is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubtitleLanguage {
    /// Simplified Chinese
    CHS,
    /// Traditional Chinese
    CHT,
    /// English
    ENG,
    /// Japanese
    JPN,
}

impl SubtitleLanguage {
    /// Stable identifier used for sorting and rendering.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::CHS => "CHS",
            Self::CHT => "CHT",
            Self::ENG => "ENG",
            Self::JPN => "JPN",
        }
    }

    /// Returns `true` for either Chinese script.
    #[must_use]
    pub fn is_chinese(self) -> bool {
        matches!(self, Self::CHS | Self::CHT)
    }
}

impl fmt::Display for SubtitleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Video resolution class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    /// 480p (Standard Definition)
    #[serde(rename = "480P")]
    SD480,
    /// 720p (High Definition)
    #[serde(rename = "720P")]
    HD720,
    /// 1080p (Full HD), including cinema-scope 1920x804 encodes
    #[serde(rename = "1080P")]
    FHD1080,
    /// 2160p (Ultra HD / 4K)
    #[serde(rename = "4K")]
    UHD2160,
}

impl Resolution {
    /// Canonical tag name.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::SD480 => "480P",
            Self::HD720 => "720P",
            Self::FHD1080 => "1080P",
            Self::UHD2160 => "4K",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// How subtitles are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubtitleKind {
    /// Burned into the video stream (hardsub).
    Embedded,
    /// Muxed as a selectable track inside the container (softsub).
    Closed,
    /// Shipped as separate files next to the video.
    ExternalDiscover,
}

impl SubtitleKind {
    /// Canonical tag name.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Embedded => "EMBEDDED",
            Self::Closed => "CLOSED",
            Self::ExternalDiscover => "EXTERNAL_DISCOVER",
        }
    }
}

impl fmt::Display for SubtitleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// High frame-rate marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRate {
    #[serde(rename = "60FPS")]
    Fps60,
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fps60 => write!(f, "60FPS"),
        }
    }
}

/// Where the encode was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaOrigin {
    #[serde(rename = "BDRIP")]
    BdRip,
    #[serde(rename = "BLURAY")]
    BluRay,
    #[serde(rename = "WEBRIP")]
    WebRip,
    #[serde(rename = "WEBDL")]
    WebDl,
}

impl fmt::Display for MediaOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BdRip => write!(f, "BDRip"),
            Self::BluRay => write!(f, "Blu-ray"),
            Self::WebRip => write!(f, "WEBRip"),
            Self::WebDl => write!(f, "WEB-DL"),
        }
    }
}
