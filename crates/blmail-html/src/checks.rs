use std::sync::LazyLock;

use regex::Regex;

use crate::error::HtmlError;
use crate::error::HtmlWarning;
use crate::error::TableAttribute;
use crate::policy::HtmlPolicy;

/// Share of unstyled elements, in percent, tolerated before warning.
const INLINE_STYLE_TOLERANCE: usize = 10;

/// Elements whose styling has to be inlined for webmail clients.
const INLINE_STYLE_TAGS: [&str; 6] = ["table", "td", "p", "h1", "a", "img"];

struct Marker {
    name: &'static str,
    pattern: Regex,
}

impl Marker {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("marker pattern is valid"),
        }
    }
}

static REQUIRED_ELEMENTS: LazyLock<[Marker; 5]> = LazyLock::new(|| {
    [
        Marker::new("DOCTYPE", r"(?i)<!DOCTYPE\s+html"),
        Marker::new("html tag with lang", r"(?i)<html[^>]+lang="),
        Marker::new("charset meta", r"(?i)<meta[^>]+charset"),
        Marker::new("viewport meta", r"(?i)<meta[^>]+viewport"),
        Marker::new("title tag", r"(?i)<title>[^<]+</title>"),
    ]
});

static MSO_ELEMENTS: LazyLock<[Marker; 3]> = LazyLock::new(|| {
    [
        Marker::new("MSO conditional start", r"(?i)<!--\[if\s+mso\]"),
        Marker::new("MSO conditional end", r"(?i)<!\[endif\]-->"),
        Marker::new("OfficeDocumentSettings", r"(?i)o:OfficeDocumentSettings"),
    ]
});

/// Opening tags of each inline-style element, paired with the pattern for
/// those carrying a `style=` attribute.
static INLINE_STYLE_PATTERNS: LazyLock<Vec<(&'static str, Regex, Regex)>> = LazyLock::new(|| {
    INLINE_STYLE_TAGS
        .iter()
        .map(|&tag| {
            let any = Regex::new(&format!(r"(?i)<{tag}[^>]*>")).expect("tag pattern is valid");
            let styled =
                Regex::new(&format!(r"(?i)<{tag}[^>]*style=")).expect("tag pattern is valid");
            (tag, any, styled)
        })
        .collect()
});

static IMAGE_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)src=["']([^"']+)["']"#).expect("src pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeCheck {
    pub valid: bool,
    pub size: usize,
    pub limit: usize,
}

/// Names of markers the document lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCheck {
    pub valid: bool,
    pub missing: Vec<&'static str>,
}

impl ElementCheck {
    fn from_missing(missing: Vec<&'static str>) -> Self {
        Self {
            valid: missing.is_empty(),
            missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCheck {
    pub valid: bool,
    pub errors: Vec<HtmlError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCheck {
    pub valid: bool,
    pub errors: Vec<HtmlError>,
    pub warnings: Vec<HtmlWarning>,
}

/// Compare the character count of `html` to `max_size`. Characters, not
/// bytes, are what BaseLinker counts.
#[must_use]
pub fn check_size(html: &str, max_size: usize) -> SizeCheck {
    let size = html.chars().count();
    SizeCheck {
        valid: size <= max_size,
        size,
        limit: max_size,
    }
}

/// Document skeleton: doctype, `lang`, charset and viewport meta, and a
/// non-empty title.
#[must_use]
pub fn check_required_elements(html: &str) -> ElementCheck {
    ElementCheck::from_missing(missing_markers(html, REQUIRED_ELEMENTS.as_slice()))
}

/// Outlook conditional comments and Office document settings.
#[must_use]
pub fn check_mso_elements(html: &str) -> ElementCheck {
    ElementCheck::from_missing(missing_markers(html, MSO_ELEMENTS.as_slice()))
}

fn missing_markers(html: &str, markers: &[Marker]) -> Vec<&'static str> {
    markers
        .iter()
        .filter(|marker| !marker.pattern.is_match(html))
        .map(|marker| marker.name)
        .collect()
}

/// Warn for each element kind where a mix of styled and unstyled elements
/// leaves more than a tenth without inline styles. Kinds that are all
/// styled or all unstyled are not reported.
#[must_use]
pub fn check_inline_styles(html: &str) -> Vec<HtmlWarning> {
    INLINE_STYLE_PATTERNS
        .iter()
        .filter_map(|(tag, any, styled)| {
            let without = any
                .find_iter(html)
                .filter(|m| !m.as_str().to_ascii_lowercase().contains("style="))
                .count();
            let with = styled.find_iter(html).count();

            if without == 0 || with == 0 {
                return None;
            }

            let total = without + with;
            // rounded half up
            let percentage = (without * 200 + total) / (total * 2);
            (percentage > INLINE_STYLE_TOLERANCE).then_some(HtmlWarning::InlineStyles {
                tag: *tag,
                percentage,
                without,
                total,
            })
        })
        .collect()
}

/// Each of `cellpadding="0"`, `cellspacing="0"` and `border="0"` has to
/// appear somewhere in the document, in either quote style.
#[must_use]
pub fn check_table_attributes(html: &str) -> TableCheck {
    let errors: Vec<HtmlError> = TableAttribute::ALL
        .into_iter()
        .filter(|attribute| {
            let name = attribute.name();
            !html.contains(&format!("{name}=\"0\"")) && !html.contains(&format!("{name}='0'"))
        })
        .map(|attribute| HtmlError::MissingTableAttribute { attribute })
        .collect();

    TableCheck {
        valid: errors.is_empty(),
        errors,
    }
}

/// Absolute image URLs must use HTTPS and should come from the approved
/// host. Sources containing a tag are built per item and skipped.
#[must_use]
pub fn check_image_urls(html: &str, image_host: &str, image_domain: &str) -> ImageCheck {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for src in IMAGE_SRC
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        if src.contains('[') && src.contains(']') {
            continue;
        }

        if src.starts_with("http") && !src.contains(image_host) {
            warnings.push(HtmlWarning::ForeignImageHost {
                domain: image_domain.to_string(),
                src: src.to_string(),
            });
        }

        if src.starts_with("http://") {
            errors.push(HtmlError::InsecureImage {
                src: src.to_string(),
            });
        }
    }

    ImageCheck {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Responsive styling is advisory: at most one warning, never an error.
#[must_use]
pub fn check_responsive_styles(html: &str, breakpoint_px: u32) -> Option<HtmlWarning> {
    if !html.contains("@media") {
        return Some(HtmlWarning::NoMediaQueries);
    }

    let compact = format!("max-width:{breakpoint_px}px");
    let spaced = format!("max-width: {breakpoint_px}px");
    if html.contains(&compact) || html.contains(&spaced) {
        None
    } else {
        Some(HtmlWarning::NoMobileBreakpoint { breakpoint_px })
    }
}

/// Run [`check_image_urls`] with the policy's host.
#[must_use]
pub fn check_image_urls_with(html: &str, policy: &HtmlPolicy) -> ImageCheck {
    check_image_urls(html, &policy.image_host, policy.image_domain())
}
