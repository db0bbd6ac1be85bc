//! Inflection table extraction.
//!
//! This is the core of the tool: it locates the grammar table in the
//! wiki's rendered HTML and maps its positional cells to named
//! grammatical slots. The wiki templates carry no semantic markup, so
//! position is all there is: cell 3 of a noun table is the gender word,
//! cells 9 through 12 are the four declined forms, and verb forms sit in
//! a fixed sequence of `span` elements whose stride depends on whether
//! the table also lists passive forms.

use crate::models::{PartOfSpeech, VocabEntry};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static NOUN_TABLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"table.grammar[class*="template-sv-subst"] > tbody"#)
        .expect("valid noun table selector")
});

static VERB_TABLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"table.grammar[class*="template-sv-verb"] > tbody"#)
        .expect("valid verb table selector")
});

static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").expect("valid selector"));

/// Grammatical gender of a Swedish noun, as declared by the table's
/// gender cell. Drives the indefinite article on the flash card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Utrum,
    Neutrum,
}

impl Gender {
    /// The indefinite article matching this gender.
    pub fn article(self) -> &'static str {
        match self {
            Gender::Utrum => "en",
            Gender::Neutrum => "ett",
        }
    }
}

/// Logical slots of a noun declension table, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NounSlot {
    IndefiniteSingular,
    DefiniteSingular,
    IndefinitePlural,
    DefinitePlural,
}

pub const NOUN_SLOTS: [NounSlot; 4] = [
    NounSlot::IndefiniteSingular,
    NounSlot::DefiniteSingular,
    NounSlot::IndefinitePlural,
    NounSlot::DefinitePlural,
];

/// Cell carrying the gender word (`neutrum` or `utrum`).
const GENDER_CELL: usize = 3;
/// First of the four form cells; the rest follow in slot order.
const FIRST_FORM_CELL: usize = 9;

/// Logical slots of a verb conjugation table, in span order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbSlot {
    Infinitive,
    Present,
    Past,
    Supine,
    Imperative,
}

pub const VERB_SLOTS: [VerbSlot; 5] = [
    VerbSlot::Infinitive,
    VerbSlot::Present,
    VerbSlot::Past,
    VerbSlot::Supine,
    VerbSlot::Imperative,
];

/// Column layout of a verb table.
///
/// Tables that also conjugate the passive voice interleave an
/// active/passive span pair per slot; only the active member is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    OneColumn,
    TwoColumns,
}

impl Layout {
    /// Span index carrying the active form for a slot under this layout.
    pub fn span_index(self, slot: VerbSlot) -> usize {
        match self {
            Layout::OneColumn => slot as usize,
            Layout::TwoColumns => slot as usize * 2,
        }
    }
}

/// Extracted noun declensions: detected gender plus the forms found,
/// ordered by slot. Missing cells simply leave their slot absent.
#[derive(Debug, Clone)]
pub struct NounForms {
    pub gender: Gender,
    pub forms: Vec<(NounSlot, String)>,
    pub tables_seen: usize,
}

/// Extracted verb conjugations, ordered by slot.
#[derive(Debug, Clone)]
pub struct VerbForms {
    pub forms: Vec<(VerbSlot, String)>,
    pub tables_seen: usize,
}

/// Extraction result for one entry.
#[derive(Debug, Clone)]
pub enum Forms {
    Noun(NounForms),
    Verb(VerbForms),
}

/// How completely the expected table structure was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStatus {
    Complete,
    Partial { found: usize, expected: usize },
    TableMissing,
}

fn status_of(found: usize, expected: usize, tables_seen: usize) -> ExtractionStatus {
    if tables_seen == 0 {
        ExtractionStatus::TableMissing
    } else if found >= expected {
        ExtractionStatus::Complete
    } else {
        ExtractionStatus::Partial { found, expected }
    }
}

impl NounForms {
    pub fn status(&self) -> ExtractionStatus {
        status_of(self.forms.len(), NOUN_SLOTS.len(), self.tables_seen)
    }
}

impl VerbForms {
    pub fn status(&self) -> ExtractionStatus {
        status_of(self.forms.len(), VERB_SLOTS.len(), self.tables_seen)
    }
}

impl Forms {
    pub fn status(&self) -> ExtractionStatus {
        match self {
            Forms::Noun(noun) => noun.status(),
            Forms::Verb(verb) => verb.status(),
        }
    }
}

/// Extracts the inflection forms for an entry from a rendered page.
pub fn extract_forms(html: &str, entry: &VocabEntry) -> Forms {
    let document = Html::parse_document(html);
    match entry.part_of_speech {
        PartOfSpeech::Noun => Forms::Noun(extract_noun(&document, &entry.swedish)),
        PartOfSpeech::Verb => Forms::Verb(extract_verb(&document, &entry.swedish)),
    }
}

/// Extracts noun declensions from the first matching declension table.
///
/// Later tables are only consulted while no extracted form mentions the
/// headword, so a page with several declension tables contributes one
/// set of forms.
pub fn extract_noun(document: &Html, term: &str) -> NounForms {
    let term = term.trim();
    let mut result = NounForms {
        gender: Gender::Utrum,
        forms: Vec::new(),
        tables_seen: 0,
    };

    for tbody in document.select(&NOUN_TABLE) {
        result.tables_seen += 1;
        if mentions(&result.forms, term) {
            continue;
        }

        let cells = body_cells(tbody);
        let gender = match cells.get(GENDER_CELL) {
            Some(word) if word == "neutrum" => Gender::Neutrum,
            _ => Gender::Utrum,
        };

        let mut contributed = false;
        for (offset, slot) in NOUN_SLOTS.iter().enumerate() {
            if let Some(text) = cells.get(FIRST_FORM_CELL + offset) {
                result.forms.push((*slot, text.clone()));
                contributed = true;
            }
        }
        // The gender cell only matters for a table that supplied forms.
        if contributed {
            result.gender = gender;
        }
    }

    result
}

/// Extracts verb conjugations, switching the span stride when the table
/// also lists passive forms.
pub fn extract_verb(document: &Html, term: &str) -> VerbForms {
    let term = term.trim();
    let mut result = VerbForms {
        forms: Vec::new(),
        tables_seen: 0,
    };

    for tbody in document.select(&VERB_TABLE) {
        result.tables_seen += 1;
        if mentions(&result.forms, term) {
            continue;
        }

        let layout = if element_text_concat(tbody).contains("Passiv") {
            Layout::TwoColumns
        } else {
            Layout::OneColumn
        };

        let spans: Vec<String> = tbody.select(&SPAN).map(element_text).collect();
        for slot in VERB_SLOTS {
            if let Some(text) = spans.get(layout.span_index(slot)) {
                result.forms.push((slot, text.clone()));
            }
        }
    }

    result
}

/// True once any extracted form mentions the headword.
fn mentions<S>(forms: &[(S, String)], term: &str) -> bool {
    forms.iter().any(|(_, form)| form.contains(term))
}

/// Cell texts of a table body: the `th`/`td` children of its `tr`
/// children, in document order, trimmed.
fn body_cells(tbody: ElementRef<'_>) -> Vec<String> {
    let mut cells = Vec::new();
    for row in tbody
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr")
    {
        for cell in row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| matches!(el.value().name(), "td" | "th"))
        {
            cells.push(element_text(cell));
        }
    }
    cells
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn element_text_concat(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}
