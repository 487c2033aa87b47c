use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use rustc_hash::FxHashSet;

use crate::error::TagError;
use crate::error::TagWarning;
use crate::vocabulary::is_ignored;
use crate::vocabulary::is_order_tag;
use crate::vocabulary::is_parameterized_tag;
use crate::vocabulary::ITEM_TAG_PREFIX;
use crate::vocabulary::TYPOS;

/// Outcome of checking extracted names against the vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameCheck {
    pub valid: bool,
    pub unknown: Vec<TagError>,
}

/// Check each name against the order-level and parameterized vocabularies.
///
/// Names with the item prefix are skipped here; they are only checked
/// inside the item-list block, so a stray item tag outside it goes
/// unreported.
#[must_use]
pub fn validate_tag_names<S: AsRef<str>>(tags: &[S]) -> NameCheck {
    let unknown: Vec<TagError> = tags
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !name.starts_with(ITEM_TAG_PREFIX))
        .filter(|name| !is_ignored(name))
        .filter(|name| !is_order_tag(name) && !is_parameterized_tag(name))
        .map(|name| {
            tracing::debug!(name, "unknown tag");
            TagError::UnknownTag {
                name: name.to_string(),
            }
        })
        .collect();

    NameCheck {
        valid: unknown.is_empty(),
        unknown,
    }
}

static TYPO_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    let patterns = TYPOS.iter().map(|(wrong, _)| format!("[{wrong}]"));
    AhoCorasick::new(patterns).expect("typo patterns build an automaton")
});

/// Warn about every misspelling from the typo table present in `html`.
///
/// Each table entry is reported at most once, in table order.
#[must_use]
pub fn find_typos(html: &str) -> Vec<TagWarning> {
    let found: FxHashSet<usize> = TYPO_MATCHER
        .find_overlapping_iter(html)
        .map(|m| m.pattern().as_usize())
        .collect();

    TYPOS
        .iter()
        .enumerate()
        .filter(|(index, _)| found.contains(index))
        .map(|(_, &(wrong, correct))| TagWarning::PossibleTypo { wrong, correct })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_pass() {
        let check = validate_tag_names(&["jméno", "číslo_objednávky", "cena_za objednávku"]);
        assert!(check.valid);
        assert!(check.unknown.is_empty());
    }

    #[test]
    fn unknown_tag_is_reported() {
        let check = validate_tag_names(&["jméno", "neznamy_tag"]);
        assert!(!check.valid);
        assert_eq!(
            check.unknown,
            vec![TagError::UnknownTag {
                name: "neznamy_tag".to_string()
            }]
        );
    }

    #[test]
    fn item_prefix_is_exempt() {
        let check = validate_tag_names(&["i_name", "i_anything"]);
        assert!(check.valid);
    }

    #[test]
    fn ignored_constructs_are_skipped() {
        let check = validate_tag_names(&["if mso", "endif", "x-apple-data-detectors"]);
        assert!(check.valid);
    }

    #[test]
    fn parameterized_names_are_accepted() {
        let check = validate_tag_names(&["seznam_položek", "items_list", "vypočítat"]);
        assert!(check.valid);
    }

    #[test]
    fn accepts_owned_strings() {
        let tags = vec!["status".to_string(), "bogus".to_string()];
        assert_eq!(validate_tag_names(&tags).unknown.len(), 1);
    }

    #[test]
    fn typo_found() {
        let warnings = find_typos("<p>Dobrý den [jmeno],</p>");
        assert_eq!(
            warnings,
            vec![TagWarning::PossibleTypo {
                wrong: "jmeno",
                correct: "jméno"
            }]
        );
    }

    #[test]
    fn typo_reported_once_per_entry() {
        let warnings = find_typos("[prijmeni] [jmeno] [prijmeni]");
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].to_string(), "Possible typo: [jmeno] should be [jméno]");
    }

    #[test]
    fn typo_needs_brackets() {
        assert!(find_typos("jmeno prijmeni").is_empty());
        assert!(find_typos("[jméno]").is_empty());
    }
}
