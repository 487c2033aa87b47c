use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;

/// `[name]` with no brackets or parentheses inside the name.
static SIMPLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]()]+)\]").expect("simple tag pattern is valid"));

/// `[name(`, the opening of a parameterized tag. Only the name is captured.
static PARAMETERIZED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([a-zA-Z_áčďéěíňóřšťúůýžÁČĎÉĚÍŇÓŘŠŤÚŮÝŽ]+)\(")
        .expect("parameterized tag pattern is valid")
});

/// Collect every distinct tag name in `html`.
///
/// Simple tags come first in document order, followed by parameterized tag
/// names not already seen. Tags nested inside a parameterized tag's content
/// are picked up by the simple scan like any other.
#[must_use]
pub fn extract_tags(html: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut tags = Vec::new();

    let simple = SIMPLE_TAG.captures_iter(html);
    let parameterized = PARAMETERIZED_TAG.captures_iter(html);

    for name in simple
        .chain(parameterized)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        if seen.insert(name) {
            tags.push(name.to_string());
        }
    }

    tracing::trace!(count = tags.len(), "extracted tags");
    tags
}
