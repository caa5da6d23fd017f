use std::fmt;

use serde::{Deserialize, Serialize};

/// One episode label as written in a release title.
///
/// Labels are raw text, not integers. Pure numbers are zero-padded to two
/// digits ("2" -> "02", "2019" unchanged) and `SP` specials are padded the
/// same way ("SP7" -> "SP07"). Anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EpisodeSort(String);

impl EpisodeSort {
    /// Creates a label, applying the zero-padding rules.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize_label(raw.as_ref()))
    }

    /// The normalized label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EpisodeSort {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<EpisodeSort> for String {
    fn from(sort: EpisodeSort) -> Self {
        sort.0
    }
}

impl fmt::Display for EpisodeSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn normalize_label(raw: &str) -> String {
    if let Some(n) = parse_digits(raw) {
        return format!("{n:02}");
    }
    if let Some(prefix) = raw.get(..2).filter(|p| p.eq_ignore_ascii_case("sp")) {
        if let Some(n) = parse_digits(&raw[2..]) {
            return format!("{prefix}{n:02}");
        }
    }
    raw.to_owned()
}

/// The episode coverage of a release.
///
/// Every variant has a start and an end label. The canonical rendering
/// reports both ends (`"06..06"`), except for seasons and composites which
/// render as a single token (`"S2"`, `"S?"`, `"S1+S2+SP+S?"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeRange {
    /// One episode or special: "06", "SP01", "OVA".
    Single(EpisodeSort),

    /// A span of episodes: "01..12", "SP01..SP04".
    Range {
        /// First label of the span.
        start: EpisodeSort,
        /// Last label of the span.
        end: EpisodeSort,
    },

    /// A whole season. `None` is a season or movie that could not be numbered.
    Season(Option<u32>),

    /// Several of the above released together: "S1+S2+SP+S?".
    Combined(Vec<EpisodeRange>),
}

impl EpisodeRange {
    /// A single-episode range.
    #[must_use]
    pub fn single(label: impl AsRef<str>) -> Self {
        Self::Single(EpisodeSort::new(label))
    }

    /// A span from `start` to `end`.
    #[must_use]
    pub fn range(start: impl AsRef<str>, end: impl AsRef<str>) -> Self {
        Self::Range {
            start: EpisodeSort::new(start),
            end: EpisodeSort::new(end),
        }
    }

    /// A season of unknown number, rendered `"S?"`.
    #[must_use]
    pub fn unknown_season() -> Self {
        Self::Season(None)
    }

    /// Joins parts into a composite. A lone part is returned as is.
    #[must_use]
    pub fn combined(mut parts: Vec<EpisodeRange>) -> Self {
        if parts.len() == 1 {
            return parts.remove(0);
        }
        Self::Combined(parts)
    }

    /// The `(start, end)` labels. Seasons and composites use their
    /// rendered token for both ends.
    #[must_use]
    pub fn bounds(&self) -> (String, String) {
        match self {
            Self::Single(label) => (label.to_string(), label.to_string()),
            Self::Range { start, end } => (start.to_string(), end.to_string()),
            Self::Season(_) | Self::Combined(_) => {
                let token = self.to_string();
                (token.clone(), token)
            }
        }
    }

    fn fmt_part(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(label) => write!(f, "{label}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for EpisodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(label) => write!(f, "{label}..{label}"),
            Self::Range { start, end } => write!(f, "{start}..{end}"),
            Self::Season(Some(n)) => write!(f, "S{n}"),
            Self::Season(None) => write!(f, "S?"),
            Self::Combined(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str("+")?;
                    }
                    part.fmt_part(f)?;
                }
                Ok(())
            }
        }
    }
}
