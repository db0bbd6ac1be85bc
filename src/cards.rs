//! Card formatting, deck accumulation, and output writing.
//!
//! Each entry's extracted forms become a block of flash-card strings
//! with a fixed template per slot. Noun blocks join their cards with a
//! newline, verb blocks with a semicolon; the last card of every block
//! carries its own trailing newline, so rendering is plain
//! concatenation.

use crate::error::Result;
use crate::extract::{Forms, NounForms, NounSlot, VerbForms, VerbSlot};
use crate::models::{PartOfSpeech, VocabEntry};
use std::fs;
use std::path::Path;

/// Formats the cards for one entry.
pub fn cards_for(entry: &VocabEntry, forms: &Forms) -> Vec<String> {
    match forms {
        Forms::Noun(noun) => noun_cards(&entry.english, noun),
        Forms::Verb(verb) => verb_cards(&entry.english, verb),
    }
}

/// Noun cards in slot order. The detected gender picks the article on
/// the indefinite-singular card only.
pub fn noun_cards(english: &str, forms: &NounForms) -> Vec<String> {
    let article = forms.gender.article();
    forms
        .forms
        .iter()
        .map(|(slot, form)| match slot {
            NounSlot::IndefiniteSingular => format!("a {english}:{article} {form}"),
            NounSlot::DefiniteSingular => format!("the {english}:{form}"),
            NounSlot::IndefinitePlural => format!("{english}s:{form}"),
            NounSlot::DefinitePlural => format!("the {english}s:{form}\n"),
        })
        .collect()
}

/// Verb cards in slot order, except that the imperative card is moved
/// to the front: it leads the block.
pub fn verb_cards(english: &str, forms: &VerbForms) -> Vec<String> {
    let mut cards = Vec::with_capacity(forms.forms.len());
    let mut lead = None;
    for (slot, form) in &forms.forms {
        match slot {
            VerbSlot::Infinitive => cards.push(format!("att {form} (to {english})")),
            VerbSlot::Present => cards.push(format!("{form} ({english}ing)")),
            VerbSlot::Past => cards.push(format!("{form} ({english}ed)")),
            VerbSlot::Supine => cards.push(format!("har {form} (have {english}ed)\n")),
            VerbSlot::Imperative => lead = Some(format!("{english}:{form}")),
        }
    }
    if let Some(lead) = lead {
        cards.insert(0, lead);
    }
    cards
}

/// The accumulated flash-card output, one block per processed entry, in
/// input order.
#[derive(Debug, Default)]
pub struct Deck {
    blocks: Vec<String>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether any accumulated block mentions the term. Guards against
    /// emitting the same headword's forms twice in one run.
    pub fn contains_term(&self, term: &str) -> bool {
        self.blocks.iter().any(|block| block.contains(term))
    }

    /// Joins an entry's cards into a block and appends it. Noun cards
    /// are newline-joined, verb cards semicolon-joined.
    pub fn push(&mut self, part_of_speech: PartOfSpeech, cards: Vec<String>) {
        let separator = match part_of_speech {
            PartOfSpeech::Noun => "\n",
            PartOfSpeech::Verb => ";",
        };
        self.blocks.push(cards.join(separator));
    }

    /// The final output: blocks concatenated in order.
    pub fn render(&self) -> String {
        self.blocks.concat()
    }
}

/// Writes the rendered deck to `path`, truncating any prior content.
pub fn write_deck(path: &Path, deck: &Deck) -> Result<()> {
    fs::write(path, deck.render())?;
    Ok(())
}
