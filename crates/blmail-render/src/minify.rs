use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Drop line breaks and collapse whitespace runs to a single space.
///
/// BaseLinker stores templates as a single line; this keeps generated
/// documents well under the size limit.
#[must_use]
pub fn minify(html: &str) -> String {
    let joined = html.replace('\n', "");
    WHITESPACE_RUN.replace_all(&joined, " ").into_owned()
}
