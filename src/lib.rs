//! Swedish vocabulary flash-card builder.
//!
//! Takes a word list of `<pos>|<english>:<swedish>` entries, looks each
//! headword up on the Swedish Wiktionary, scrapes the inflection table
//! out of the rendered page, and assembles the declined or conjugated
//! forms into flash-card lines.

// Declare modules
pub mod cards;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod progress;
pub mod wordlist;

// Re-export key types for easier use
pub use cards::{Deck, cards_for, write_deck};
pub use error::{Result, SvocabError};
pub use extract::{ExtractionStatus, Forms};
pub use models::{LookupResponse, PartOfSpeech, VocabEntry};
pub use wordlist::parse_word_list;

use crate::progress::{ProgressCallback, ProgressUpdate};
use log::{debug, warn};

/// Looks up every entry and assembles the flash-card deck.
///
/// Entries are processed strictly in order, one lookup at a time. A
/// transport or decoding failure aborts the whole run; a missing or
/// incomplete inflection table only logs a warning and lets that entry
/// degrade to partial or empty cards. A headword whose forms are
/// already in the deck is not looked up again.
pub async fn build_deck(
    client: &reqwest::Client,
    entries: &[VocabEntry],
    mut progress: Option<ProgressCallback>,
) -> Result<Deck> {
    let total = entries.len() as u64;
    let mut deck = Deck::new();

    for (index, entry) in entries.iter().enumerate() {
        if let Some(callback) = progress.as_mut() {
            callback(ProgressUpdate {
                current_item: index as u64,
                total_items: total,
                message: Some(entry.swedish.clone()),
            });
        }

        let term = entry.swedish.trim();
        if deck.contains_term(term) {
            debug!("'{}' already recorded, skipping repeat lookup", term);
            continue;
        }

        let body = fetch::lookup(client, &entry.swedish).await?;
        let response = fetch::decode_envelope(&body)?;
        debug!("Parsed page '{}'", response.parse.title);

        let Some(fragment) = response.parse.default_variant() else {
            warn!(
                "'{}': response carries no default text variant, skipping",
                entry.swedish
            );
            continue;
        };

        let forms = extract::extract_forms(fragment, entry);
        match forms.status() {
            ExtractionStatus::Complete => {}
            ExtractionStatus::TableMissing => {
                warn!(
                    "'{}': no {} inflection table on the page",
                    entry.swedish, entry.part_of_speech
                );
            }
            ExtractionStatus::Partial { found, expected } => {
                warn!(
                    "'{}': incomplete inflection table, {} of {} forms found",
                    entry.swedish, found, expected
                );
            }
        }

        deck.push(entry.part_of_speech, cards::cards_for(entry, &forms));
    }

    if let Some(callback) = progress.as_mut() {
        callback(ProgressUpdate {
            current_item: total,
            total_items: total,
            message: None,
        });
    }

    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    const NOUN_TABLE_HTML: &str = r#"<table class="grammar template-sv-subst">
<tbody>
<tr><th>Böjningar av äpple</th><td>Singular</td><td>Plural</td></tr>
<tr><th>neutrum</th><td>Obestämd</td><td>Bestämd</td><td>Obestämd</td><td>Bestämd</td><td></td></tr>
<tr><td>äpple</td><td>äpplet</td><td>äpplen</td><td>äpplena</td></tr>
</tbody>
</table>"#;

    /// Builds the JSONP body the wiki would return for a page.
    fn jsonp_body(title: &str, html: &str) -> Vec<u8> {
        let envelope = json!({
            "parse": {
                "title": title,
                "revid": 123456,
                "displaytitle": title,
                "text": { "*": html },
            }
        });
        format!("/**/?({envelope})").into_bytes()
    }

    /// The full pipeline minus the network: canned response bytes in,
    /// rendered deck out.
    #[test]
    fn pipeline_noun_entry_to_rendered_deck() {
        let entries = parse_word_list("n|apple:äpple\n").unwrap();
        let body = jsonp_body("äpple", NOUN_TABLE_HTML);

        let response = fetch::decode_envelope(&body).unwrap();
        let fragment = response.parse.default_variant().unwrap();

        let mut deck = Deck::new();
        let forms = extract::extract_forms(fragment, &entries[0]);
        assert_eq!(forms.status(), ExtractionStatus::Complete);
        deck.push(entries[0].part_of_speech, cards::cards_for(&entries[0], &forms));

        assert_eq!(
            deck.render(),
            "a apple:ett äpple\nthe apple:äpplet\napples:äpplen\nthe apples:äpplena\n"
        );
    }

    #[test]
    fn pipeline_writes_and_overwrites_the_output_file() {
        let entries = parse_word_list("n|apple:äpple\n").unwrap();
        let body = jsonp_body("äpple", NOUN_TABLE_HTML);
        let response = fetch::decode_envelope(&body).unwrap();
        let fragment = response.parse.default_variant().unwrap();

        let mut deck = Deck::new();
        let forms = extract::extract_forms(fragment, &entries[0]);
        deck.push(entries[0].part_of_speech, cards::cards_for(&entries[0], &forms));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flash-cards.csv");
        fs::write(&path, "previous run output, longer than the new deck is").unwrap();

        write_deck(&path, &deck).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "a apple:ett äpple\nthe apple:äpplet\napples:äpplen\nthe apples:äpplena\n"
        );
    }

    #[test]
    fn repeated_terms_contribute_once() {
        let entries = parse_word_list("n|apple:äpple\nn|apple:äpple\n").unwrap();
        let body = jsonp_body("äpple", NOUN_TABLE_HTML);
        let response = fetch::decode_envelope(&body).unwrap();
        let fragment = response.parse.default_variant().unwrap();

        let mut deck = Deck::new();
        for entry in &entries {
            if deck.contains_term(entry.swedish.trim()) {
                continue;
            }
            let forms = extract::extract_forms(fragment, entry);
            deck.push(entry.part_of_speech, cards::cards_for(entry, &forms));
        }

        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn page_without_table_renders_nothing() {
        let entries = parse_word_list("v|walk:gå\n").unwrap();
        let body = jsonp_body("gå", "<p>Sidan saknar böjningstabell.</p>");
        let response = fetch::decode_envelope(&body).unwrap();
        let fragment = response.parse.default_variant().unwrap();

        let forms = extract::extract_forms(fragment, &entries[0]);
        assert_eq!(forms.status(), ExtractionStatus::TableMissing);

        let mut deck = Deck::new();
        deck.push(entries[0].part_of_speech, cards::cards_for(&entries[0], &forms));
        assert_eq!(deck.render(), "");
    }

    #[test]
    fn malformed_word_list_fails_before_any_lookup() {
        assert!(parse_word_list("n|apple äpple\n").is_err());
    }
}
