use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Layout attribute every e-mail table is expected to zero out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TableAttribute {
    CellPadding,
    CellSpacing,
    Border,
}

impl TableAttribute {
    pub const ALL: [TableAttribute; 3] = [
        TableAttribute::CellPadding,
        TableAttribute::CellSpacing,
        TableAttribute::Border,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TableAttribute::CellPadding => "cellpadding",
            TableAttribute::CellSpacing => "cellspacing",
            TableAttribute::Border => "border",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            TableAttribute::CellPadding | TableAttribute::CellSpacing => {
                "for consistent rendering"
            }
            TableAttribute::Border => "unless borders are intended",
        }
    }
}

impl fmt::Display for TableAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"0\"", self.name())
    }
}

/// Findings that make a template unacceptable.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum HtmlError {
    #[error(
        "Email size ({} chars) exceeds BaseLinker limit ({} chars)",
        thousands(*size),
        thousands(*limit)
    )]
    SizeExceeded { size: usize, limit: usize },

    #[error("Missing required element: {element}")]
    MissingElement { element: &'static str },

    #[error("Image uses HTTP instead of HTTPS: {src}")]
    InsecureImage { src: String },

    #[error("Tables should have {attribute} {}", attribute.advice())]
    MissingTableAttribute { attribute: TableAttribute },
}

impl HtmlError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            HtmlError::SizeExceeded { .. } => "H100",
            HtmlError::MissingElement { .. } => "H101",
            HtmlError::InsecureImage { .. } => "H102",
            HtmlError::MissingTableAttribute { .. } => "H103",
        }
    }

    /// Literal source text that locates this finding, when it has one.
    /// Findings about something absent have none.
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        match self {
            HtmlError::InsecureImage { src } => Some(src.clone()),
            HtmlError::SizeExceeded { .. }
            | HtmlError::MissingElement { .. }
            | HtmlError::MissingTableAttribute { .. } => None,
        }
    }
}

/// Findings that degrade rendering in some clients but are accepted.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum HtmlWarning {
    #[error("Missing MSO element for Outlook compatibility: {element}")]
    MissingMsoElement { element: &'static str },

    #[error("{percentage}% of <{tag}> elements lack inline styles ({without}/{total})")]
    InlineStyles {
        tag: &'static str,
        percentage: usize,
        without: usize,
        total: usize,
    },

    #[error("Image not hosted on {domain}: {src}")]
    ForeignImageHost { domain: String, src: String },

    #[error("No @media queries found - email may not be mobile responsive")]
    NoMediaQueries,

    #[error("No mobile breakpoint (@media max-width:{breakpoint_px}px) found")]
    NoMobileBreakpoint { breakpoint_px: u32 },
}

impl HtmlWarning {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            HtmlWarning::MissingMsoElement { .. } => "H200",
            HtmlWarning::InlineStyles { .. } => "H201",
            HtmlWarning::ForeignImageHost { .. } => "H202",
            HtmlWarning::NoMediaQueries => "H203",
            HtmlWarning::NoMobileBreakpoint { .. } => "H204",
        }
    }

    #[must_use]
    pub fn needle(&self) -> Option<String> {
        match self {
            HtmlWarning::InlineStyles { tag, .. } => Some(format!("<{tag}")),
            HtmlWarning::ForeignImageHost { src, .. } => Some(src.clone()),
            HtmlWarning::NoMobileBreakpoint { .. } => Some("@media".to_string()),
            HtmlWarning::MissingMsoElement { .. } | HtmlWarning::NoMediaQueries => None,
        }
    }
}

/// `30000` -> `30,000`
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
