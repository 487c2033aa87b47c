use std::sync::LazyLock;

use memchr::memmem;
use regex::Regex;

use crate::error::TagError;
use crate::vocabulary::is_item_tag;
use crate::vocabulary::REQUIRED_ITEM_TAG;

/// Sequence that closes a parameterized tag.
pub const CLOSING_SEQUENCE: &str = ")]";

/// Content of the first item-list tag, up to the first closing sequence.
static ITEM_LIST_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[seznam_položek\((.*?)\)\]").expect("item list pattern is valid")
});

static INNER_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]").expect("inner tag pattern is valid"));

static CLOSING_FINDER: LazyLock<memmem::Finder<'static>> =
    LazyLock::new(|| memmem::Finder::new(CLOSING_SEQUENCE));

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemListCheck {
    pub valid: bool,
    pub errors: Vec<TagError>,
}

/// Inner text of the first `[seznam_položek(...)]` block.
///
/// The block ends at the first `)]` after the opening, so markup inside the
/// row template must never contain that sequence.
#[must_use]
pub fn item_list_content(html: &str) -> Option<&str> {
    ITEM_LIST_BLOCK
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check the item-list block, if there is one.
///
/// Every bracketed tag in the row template must be an item-level tag, and
/// the row has to print the item name. A template without the block, or
/// with an empty one, is valid.
#[must_use]
pub fn validate_item_list(html: &str) -> ItemListCheck {
    let Some(content) = item_list_content(html).filter(|content| !content.is_empty()) else {
        return ItemListCheck {
            valid: true,
            errors: Vec::new(),
        };
    };

    let mut errors = Vec::new();
    let mut has_name = false;

    for name in INNER_TAG
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        if name == REQUIRED_ITEM_TAG {
            has_name = true;
        }
        if !is_item_tag(name) {
            errors.push(TagError::InvalidItemTag {
                name: name.to_string(),
            });
        }
    }

    if !has_name {
        errors.push(TagError::MissingItemName);
    }

    tracing::debug!(errors = errors.len(), "checked item list");

    ItemListCheck {
        valid: errors.is_empty(),
        errors,
    }
}

/// Number of `)]` sequences in `html`.
///
/// A generated document carries exactly one: the close of its item list.
#[must_use]
pub fn closing_sequence_count(html: &str) -> usize {
    CLOSING_FINDER.find_iter(html.as_bytes()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_inner_text() {
        let html = "<table>[seznam_položek(<tr><td>[i_name]</td></tr>)]</table>";
        assert_eq!(item_list_content(html), Some("<tr><td>[i_name]</td></tr>"));
    }

    #[test]
    fn content_spans_lines() {
        let html = "[seznam_položek(\n<tr>\n<td>[i_name]</td>\n</tr>\n)]";
        assert_eq!(
            item_list_content(html),
            Some("\n<tr>\n<td>[i_name]</td>\n</tr>\n")
        );
    }

    #[test]
    fn first_close_wins() {
        let html = "[seznam_položek(<td>[i_name]</td><!--[if (IE)]--><td>[i_sku]</td>)]";
        assert_eq!(item_list_content(html), Some("<td>[i_name]</td><!--[if (IE"));
    }

    #[test]
    fn absent_block_is_valid() {
        let check = validate_item_list("<p>[jméno]</p>");
        assert!(check.valid);
        assert!(check.errors.is_empty());
    }

    #[test]
    fn empty_block_is_valid() {
        let check = validate_item_list("<table>[seznam_položek()]</table>");
        assert!(check.valid);
        assert!(check.errors.is_empty());
    }

    #[test]
    fn valid_row() {
        let html = "[seznam_položek(<tr><td>[i_sku]</td><td>[i_name]</td><td>[i_quantity]</td></tr>)]";
        let check = validate_item_list(html);
        assert!(check.valid, "{:?}", check.errors);
    }

    #[test]
    fn order_tag_inside_row_is_invalid() {
        let html = "[seznam_položek(<td>[i_name]</td><td>[jméno]</td>)]";
        let check = validate_item_list(html);
        assert!(!check.valid);
        assert_eq!(
            check.errors,
            vec![TagError::InvalidItemTag {
                name: "jméno".to_string()
            }]
        );
    }

    #[test]
    fn missing_name() {
        let html = "[seznam_položek(<td>[i_sku]</td>)]";
        let check = validate_item_list(html);
        assert!(!check.valid);
        assert_eq!(check.errors, vec![TagError::MissingItemName]);
    }

    #[test]
    fn invalid_and_missing_name_both_reported() {
        let html = "[seznam_položek(<td>[i_invalid_tag]</td>)]";
        let check = validate_item_list(html);
        assert_eq!(check.errors.len(), 2);
        assert_eq!(check.errors[0].code(), "T101");
        assert_eq!(check.errors[1].code(), "T102");
    }

    #[test]
    fn closing_sequence_counted() {
        assert_eq!(closing_sequence_count("<p></p>"), 0);
        assert_eq!(
            closing_sequence_count("[seznam_položek(<td>[i_name]</td>)]"),
            1
        );
        assert_eq!(closing_sequence_count("<!--[if (IE)]-->)]"), 2);
    }
}
