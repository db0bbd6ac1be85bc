//! Word list parsing.
//!
//! The word list is UTF-8 text with one entry per line in the form
//! `<pos>|<english>:<swedish>`, where `<pos>` is `n` or `v`. Any
//! malformed line aborts the whole run before a single lookup is made.

use crate::error::{Result, SvocabError};
use crate::models::VocabEntry;
use log::debug;

/// Parses the word list contents into vocabulary entries.
///
/// Empty lines are skipped. A line missing the `|` or `:` delimiter, or
/// carrying an unknown part-of-speech tag, is an error with the 1-based
/// line number.
pub fn parse_word_list(content: &str) -> Result<Vec<VocabEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let (tag, pair) = line
            .split_once('|')
            .ok_or_else(|| SvocabError::MalformedLine {
                line: line_no,
                reason: "expected '<pos>|<english>:<swedish>', missing '|'".to_string(),
            })?;
        let (english, swedish) = pair
            .split_once(':')
            .ok_or_else(|| SvocabError::MalformedLine {
                line: line_no,
                reason: "expected '<english>:<swedish>', missing ':'".to_string(),
            })?;

        let part_of_speech = tag.parse()?;

        entries.push(VocabEntry {
            part_of_speech,
            english: english.to_string(),
            swedish: swedish.to_string(),
        });
    }

    debug!("Parsed {} word list entries.", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartOfSpeech;

    #[test]
    fn parses_well_formed_lines() {
        let entries = parse_word_list("n|apple:äpple\nv|walk:gå\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].part_of_speech, PartOfSpeech::Noun);
        assert_eq!(entries[0].english, "apple");
        assert_eq!(entries[0].swedish, "äpple");
        assert_eq!(entries[1].part_of_speech, PartOfSpeech::Verb);
        assert_eq!(entries[1].english, "walk");
        assert_eq!(entries[1].swedish, "gå");
    }

    #[test]
    fn skips_empty_lines() {
        let entries = parse_word_list("n|apple:äpple\n\n\nv|walk:gå").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn missing_colon_is_fatal() {
        let err = parse_word_list("n|apple:äpple\nv|walk gå\n").unwrap_err();
        match err {
            SvocabError::MalformedLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_pipe_is_fatal() {
        let err = parse_word_list("n apple:äpple\n").unwrap_err();
        assert!(matches!(err, SvocabError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn unknown_tag_is_fatal() {
        let err = parse_word_list("adj|red:röd\n").unwrap_err();
        match err {
            SvocabError::UnknownPartOfSpeech(tag) => assert_eq!(tag, "adj"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn splits_on_first_delimiter_only() {
        // Extra delimiters end up in the Swedish half untouched.
        let entries = parse_word_list("n|man-of-war:örlogsfartyg:krigsskepp").unwrap();
        assert_eq!(entries[0].english, "man-of-war");
        assert_eq!(entries[0].swedish, "örlogsfartyg:krigsskepp");
    }
}
