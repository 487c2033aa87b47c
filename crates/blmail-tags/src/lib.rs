//! BaseLinker template tag validation.
//!
//! Tags are bracketed names embedded in the HTML (`[jméno]`) or
//! parameterized forms wrapping markup (`[seznam_položek(<tr>...</tr>)]`).
//! They are detected with regular expressions over the raw text; no HTML
//! parsing or substitution happens here.

mod classify;
mod error;
mod extract;
mod item_list;
pub mod vocabulary;

pub use crate::classify::find_typos;
pub use crate::classify::validate_tag_names;
pub use crate::classify::NameCheck;
pub use crate::error::TagError;
pub use crate::error::TagWarning;
pub use crate::extract::extract_tags;
pub use crate::item_list::closing_sequence_count;
pub use crate::item_list::item_list_content;
pub use crate::item_list::validate_item_list;
pub use crate::item_list::ItemListCheck;
pub use crate::item_list::CLOSING_SEQUENCE;

/// Result of validating the tags of one template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagReport {
    pub valid: bool,
    pub errors: Vec<TagError>,
    pub warnings: Vec<TagWarning>,
    pub extracted_tags: Vec<String>,
}

/// Validate every tag in `html`: names against the vocabularies, the
/// item-list block, and known misspellings.
#[must_use]
pub fn validate_tags(html: &str) -> TagReport {
    let extracted_tags = extract_tags(html);
    let names = validate_tag_names(&extracted_tags);
    let item_list = validate_item_list(html);
    let warnings = find_typos(html);

    let mut errors = names.unknown;
    errors.extend(item_list.errors);

    TagReport {
        valid: names.valid && item_list.valid,
        errors,
        warnings,
        extracted_tags,
    }
}
