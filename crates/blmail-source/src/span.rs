use serde::Serialize;

/// Byte range into a template source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub length: u32,
}

impl Span {
    #[must_use]
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// Build a span from `usize` bounds, clamping to `u32::MAX`.
    #[must_use]
    pub fn saturating_from_bounds_usize(start: usize, end: usize) -> Self {
        let start_u32 = u32::try_from(start).unwrap_or(u32::MAX);
        let end_u32 = u32::try_from(end).unwrap_or(u32::MAX);
        Self {
            start: start_u32,
            length: end_u32.saturating_sub(start_u32),
        }
    }

    /// Span of the first occurrence of `needle` in `source`.
    #[must_use]
    pub fn locate(source: &str, needle: &str) -> Option<Self> {
        if needle.is_empty() {
            return None;
        }
        source
            .find(needle)
            .map(|start| Self::saturating_from_bounds_usize(start, start + needle.len()))
    }

    /// Span of the first `needle` after the first `anchor`.
    ///
    /// Returns `None` when either is missing, so a finding inside a block
    /// never points at an earlier occurrence outside it.
    #[must_use]
    pub fn locate_after(source: &str, anchor: &str, needle: &str) -> Option<Self> {
        let offset = source.find(anchor)? + anchor.len();
        Self::locate(&source[offset..], needle).map(|span| {
            let start = span.start_usize() + offset;
            Self::saturating_from_bounds_usize(start, start + span.length_usize())
        })
    }

    #[must_use]
    pub fn start_usize(self) -> usize {
        self.start as usize
    }

    #[must_use]
    pub fn length_usize(self) -> usize {
        self.length as usize
    }

    #[must_use]
    pub fn end(self) -> u32 {
        self.start.saturating_add(self.length)
    }
}

impl From<Span> for (u32, u32) {
    fn from(span: Span) -> Self {
        (span.start, span.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_finds_first_occurrence() {
        let source = "<p>[jméno] [jméno]</p>";
        let span = Span::locate(source, "[jméno]").unwrap();
        assert_eq!(span.start, 3);
        assert_eq!(span.length_usize(), "[jméno]".len());
        assert_eq!(
            &source[span.start_usize()..span.end() as usize],
            "[jméno]"
        );
    }

    #[test]
    fn locate_missing_needle() {
        assert_eq!(Span::locate("<p></p>", "[jméno]"), None);
        assert_eq!(Span::locate("<p></p>", ""), None);
    }

    #[test]
    fn locate_after_skips_earlier_occurrences() {
        let source = "<p>[i_sku]</p>[seznam_položek(<td>[i_sku]</td>)]";
        let span = Span::locate_after(source, "[seznam_položek(", "[i_sku").unwrap();
        assert_eq!(span.start_usize(), source.rfind("[i_sku").unwrap());

        assert_eq!(Span::locate_after(source, "[nope(", "[i_sku"), None);
        let before_only = "<p>[i_sku]</p>[seznam_položek(";
        assert_eq!(
            Span::locate_after(before_only, "[seznam_položek(", "[i_sku"),
            None
        );
    }

    #[test]
    fn saturating_bounds_never_underflow() {
        let span = Span::saturating_from_bounds_usize(10, 4);
        assert_eq!(span, Span::new(10, 0));
    }
}
