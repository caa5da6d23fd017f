//! # Title Normalizer
//!
//! Splits a release title into segments. A segment is either the interior
//! of one bracket pair or one word of the free text between bracket groups.
//! Each segment keeps its raw text next to a width-folded form that the
//! extractors match against.

use regex::Regex;
use tracing::trace;

use crate::error::Result;

/// Characters that split free text between bracket groups.
const FREE_TEXT_DELIMITERS: &[char] = &['/', '\\', '|', ' '];

/// One delimited span of a release title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Source text, trimmed, with recruitment notices removed.
    pub raw: String,
    /// `raw` with full-width ASCII folded to half-width.
    pub text: String,
    /// Lowercased `text`, the form markers are matched against.
    key: String,
    /// Byte offset of the span in the title.
    pub start: usize,
    /// Byte offset one past the span.
    pub end: usize,
    /// Position in the segment sequence.
    pub index: usize,
    /// Whether the span was enclosed in brackets.
    pub bracketed: bool,
}

impl Segment {
    fn new(raw: &str, start: usize, end: usize, index: usize, bracketed: bool) -> Self {
        let text = fold_width(raw);
        let key = text.to_lowercase();
        Self {
            raw: raw.to_string(),
            text,
            key,
            start,
            end,
            index,
            bracketed,
        }
    }

    /// Case-insensitive containment. `marker` must already be lowercase.
    #[must_use]
    pub fn contains(&self, marker: &str) -> bool {
        self.key.contains(marker)
    }

    /// Right-most occurrence of a lowercase `marker`, as a byte offset into
    /// the lowercased key. Lowercasing can change byte lengths, so the
    /// offset only orders matches and must not be used to slice `text`.
    #[must_use]
    pub fn rfind(&self, marker: &str) -> Option<usize> {
        self.key.rfind(marker)
    }

    /// Space-separated words of the folded text.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ')
    }
}

/// The normalizer output: matchable segments plus the announcement tags
/// that were taken out of the stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    pub segments: Vec<Segment>,
    pub tags: Vec<String>,
}

impl Segments {
    /// Returns an iterator over the matchable segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Bracket-aware title splitter.
#[derive(Debug, Clone)]
pub struct Normalizer {
    re_brackets: Regex,
    re_announcement: Regex,
    recruitment: Vec<String>,
}

impl Normalizer {
    /// Creates a normalizer that strips the given recruitment notices
    /// from every segment.
    ///
    /// # Errors
    ///
    /// Returns `ShirabeError::RegexError` if a pattern fails to compile.
    pub fn new(recruitment: Vec<String>) -> Result<Self> {
        Ok(Self {
            re_brackets: Regex::new(
                r"\[(.+?)\]|\((.+?)\)|\{(.+?)\}|【(.+?)】|（(.+?)）|「(.+?)」|『(.+?)』|〈(.+?)〉",
            )?,
            re_announcement: Regex::new(
                r"^(?:★?|★.*)(?:[0-9]|[一二三四五六七八九十]{0,4}) ?[月年] ?(?:新番|日剧)★?$",
            )?,
            recruitment,
        })
    }

    /// Splits `title` into segments.
    ///
    /// Never fails: an unbalanced bracket simply leaves the rest of the
    /// title as free text.
    ///
    /// # Examples
    /// ```
    /// use shirabe_core::parser::Normalizer;
    ///
    /// let normalizer = Normalizer::new(vec!["招募".into()]).unwrap();
    /// let segments = normalizer.normalize("[字幕组] 标题 [07][１０８０Ｐ]");
    /// let texts: Vec<_> = segments.iter().map(|s| s.text.as_str()).collect();
    /// assert_eq!(texts, ["字幕组", "标题", "07", "1080P"]);
    /// ```
    pub fn normalize(&self, title: &str) -> Segments {
        let mut out = Segments::default();
        let mut cursor = 0;

        for caps in self.re_brackets.captures_iter(title) {
            let Some(whole) = caps.get(0) else { continue };
            if cursor < whole.start() {
                self.push_free_text(title, cursor, whole.start(), &mut out);
            }
            if let Some(inner) = caps.iter().skip(1).flatten().next() {
                self.push(inner.as_str(), inner.start(), inner.end(), true, &mut out);
            }
            cursor = whole.end();
        }

        if cursor < title.len() {
            self.push_free_text(title, cursor, title.len(), &mut out);
        }

        out
    }

    fn push_free_text(&self, title: &str, from: usize, to: usize, out: &mut Segments) {
        let mut start = from;
        for (idx, c) in title[from..to].char_indices() {
            if FREE_TEXT_DELIMITERS.contains(&c) {
                let end = from + idx;
                self.push(&title[start..end], start, end, false, out);
                start = end + c.len_utf8();
            }
        }
        self.push(&title[start..to], start, to, false, out);
    }

    fn push(&self, piece: &str, start: usize, end: usize, bracketed: bool, out: &mut Segments) {
        if piece.trim().is_empty() {
            return;
        }
        if self.re_announcement.is_match(piece) {
            trace!(segment = piece, "seasonal announcement tag");
            out.tags.push(piece.to_string());
            return;
        }

        let mut cleaned = piece.to_string();
        for notice in &self.recruitment {
            cleaned = cleaned.replace(notice.as_str(), "");
        }
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return;
        }

        let index = out.segments.len();
        out.segments
            .push(Segment::new(cleaned, start, end, index, bracketed));
    }
}

/// Folds full-width ASCII (U+FF01..=U+FF5E) to half-width and the
/// ideographic space to a plain space.
#[must_use]
pub fn fold_width(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
            '\u{3000}' => ' ',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(vec!["招募".into(), "招新".into()]).unwrap()
    }

    fn texts(segments: &Segments) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_brackets_and_free_text() {
        let segments = normalizer()
            .normalize("[ANi] 吹響吧！上低音號 第三季 - 07 [1080P][Bilibili][WEB-DL]");

        assert_eq!(
            texts(&segments),
            ["ANi", "吹響吧!上低音號", "第三季", "-", "07", "1080P", "Bilibili", "WEB-DL"]
        );
        assert!(segments.segments[0].bracketed);
        assert!(!segments.segments[4].bracketed);
        assert_eq!(segments.segments[4].index, 4);
    }

    #[test]
    fn test_positions_point_into_title() {
        let title = "【幻樱字幕组】【01】";
        let segments = normalizer().normalize(title);

        let first = &segments.segments[0];
        assert_eq!(&title[first.start..first.end], "幻樱字幕组");
        let second = &segments.segments[1];
        assert_eq!(&title[second.start..second.end], "01");
    }

    #[test]
    fn test_bracket_interior_is_not_split() {
        let segments = normalizer().normalize("[AAC AVC][CHT CHS]");
        assert_eq!(texts(&segments), ["AAC AVC", "CHT CHS"]);
    }

    #[test]
    fn test_all_bracket_families() {
        let segments = normalizer().normalize("[a](b){c}【d】（e）「f」『g』〈h〉");
        assert_eq!(texts(&segments), ["a", "b", "c", "d", "e", "f", "g", "h"]);
    }

    #[test]
    fn test_free_text_delimiters() {
        let segments = normalizer().normalize("终末列车去往何方?/ 末班列车去哪里?\\x|y");
        assert_eq!(texts(&segments), ["终末列车去往何方?", "末班列车去哪里?", "x", "y"]);
    }

    #[test]
    fn test_unbalanced_bracket_degrades_to_free_text() {
        let segments = normalizer().normalize("[Group] Title [07");
        assert_eq!(texts(&segments), ["Group", "Title", "[07"]);
    }

    #[test]
    fn test_announcement_tags_are_removed() {
        let segments = normalizer().normalize("【极影字幕社】★1月新番 [十月新番][★2024年1月新番] [01]");
        assert_eq!(texts(&segments), ["极影字幕社", "01"]);
        assert_eq!(segments.tags, ["★1月新番", "十月新番", "★2024年1月新番"]);
    }

    #[test]
    fn test_month_without_announcement_is_kept() {
        let segments = normalizer().normalize("[2024年4月番]");
        assert_eq!(texts(&segments), ["2024年4月番"]);
    }

    #[test]
    fn test_recruitment_notices_are_stripped() {
        let segments = normalizer().normalize("[招募时轴]（招募中）[招募]");
        assert_eq!(texts(&segments), ["时轴", "中"]);
        assert_eq!(segments.segments[0].raw, "时轴");
    }

    #[test]
    fn test_width_folding_keeps_raw() {
        let segments = normalizer().normalize("[第０６話][ＢＩＧ５]");
        assert_eq!(segments.segments[0].raw, "第０６話");
        assert_eq!(segments.segments[0].text, "第06話");
        assert!(segments.segments[1].contains("big5"));
    }

    #[test]
    fn test_fold_width() {
        assert_eq!(fold_width("ＡＢＣ！１２３"), "ABC!123");
        assert_eq!(fold_width("a\u{3000}b"), "a b");
        assert_eq!(fold_width("～"), "~");
        assert_eq!(fold_width("简体"), "简体");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let segments = normalizer().normalize("[1080p@60FPS]");
        let segment = &segments.segments[0];
        assert!(segment.contains("1080p"));
        assert_eq!(segment.rfind("60fps"), Some(6));
        assert_eq!(segment.words().count(), 1);
    }

    #[test]
    fn test_rfind_offsets_index_the_lowercased_key() {
        let segments = normalizer().normalize("[İ内嵌]");
        let segment = &segments.segments[0];
        assert_eq!(segment.text.find("内嵌"), Some(2));
        assert_eq!(segment.rfind("内嵌"), Some(3));
    }

    #[test]
    fn test_empty_title() {
        assert!(normalizer().normalize("").is_empty());
        assert_eq!(normalizer().normalize("   ").len(), 0);
    }
}
