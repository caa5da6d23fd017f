//! # Language Extractor
//!
//! Languages are additive, so every marker in every segment counts. Two
//! rules go beyond plain markers:
//!
//! - a stand-alone source word such as "Baha" implies Traditional Chinese,
//!   but only while no earlier segment has named a language;
//! - a bilingual modifier ("双语") next to a Chinese track implies Japanese.

use tracing::trace;

use crate::parser::disambiguate::Candidate;
use crate::parser::normalizer::Segments;
use crate::parser::vocabulary::{mentions, Vocabulary};
use crate::types::SubtitleLanguage;

/// Collects every language candidate of a title.
pub fn extract(segments: &Segments, vocabulary: &Vocabulary) -> Vec<Candidate<SubtitleLanguage>> {
    let mut found = Vec::new();
    let mut bilingual = false;

    for segment in segments.iter() {
        if found.is_empty() && is_traditional_source(segment.words(), vocabulary) {
            trace!(segment = %segment.text, "source implies CHT");
            found.push(Candidate::new(SubtitleLanguage::CHT, segment.index, 0));
        }

        for entry in &vocabulary.languages {
            if let Some(offset) = entry.find_in(segment) {
                found.push(Candidate::new(entry.tag, segment.index, offset));
            }
        }

        bilingual |= mentions(&vocabulary.bilingual, segment);
    }

    if bilingual {
        if let Some(chinese) = found.iter().find(|c| c.value.is_chinese()) {
            let (segment, offset) = (chinese.segment, chinese.offset);
            trace!("bilingual modifier implies JPN");
            found.push(Candidate::new(SubtitleLanguage::JPN, segment, offset));
        }
    }

    found
}

fn is_traditional_source<'a>(
    mut words: impl Iterator<Item = &'a str>,
    vocabulary: &Vocabulary,
) -> bool {
    words.any(|word| {
        let word = word.to_lowercase();
        vocabulary.traditional_sources.iter().any(|s| *s == word)
    })
}
