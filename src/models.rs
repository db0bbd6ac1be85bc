use crate::error::SvocabError;
use serde::Deserialize;
use std::collections::HashMap;

// --- Word List Entries ---

/// Part of speech as tagged in the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PartOfSpeech::Noun => "noun",
                PartOfSpeech::Verb => "verb",
            }
        )
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = SvocabError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(PartOfSpeech::Noun),
            "v" => Ok(PartOfSpeech::Verb),
            _ => Err(SvocabError::UnknownPartOfSpeech(s.to_string())),
        }
    }
}

/// One vocabulary entry from the word list: the Swedish headword to look
/// up and the English gloss used on the flash-card side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub part_of_speech: PartOfSpeech,
    pub english: String,
    pub swedish: String,
}

// --- MediaWiki Parse Envelope ---

/// The JSON object inside the JSONP callback envelope returned by the
/// wiki's `action=parse` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    pub parse: ParsedPage,
}

/// The `parse` payload: page title plus the rendered text variants.
///
/// `revid` and `displaytitle` are requested alongside the text but the
/// pipeline never consumes them.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedPage {
    pub title: String,
    #[serde(default)]
    pub text: HashMap<String, String>,
    #[serde(default)]
    pub revid: Option<u64>,
    #[serde(rename = "displaytitle", default)]
    pub display_title: Option<String>,
}

impl ParsedPage {
    /// The default text variant (`"*"`), the only one the extractor reads.
    pub fn default_variant(&self) -> Option<&str> {
        self.text.get("*").map(String::as_str)
    }
}
