use serde::Serialize;
use thiserror::Error;

use crate::vocabulary::ITEM_LIST_TAG;
use crate::vocabulary::ITEM_TAGS;
use crate::vocabulary::REQUIRED_ITEM_TAG;

/// Fatal tag findings.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum TagError {
    /// Bracketed name that is in no vocabulary and matches no ignore pattern.
    #[error("Unknown tag: [{name}]")]
    UnknownTag { name: String },

    /// Tag inside the item-list block that is not an item-level tag.
    #[error("Invalid item-level tag: [{name}]. Valid tags are: {}", ITEM_TAGS.join(", "))]
    InvalidItemTag { name: String },

    #[error("Missing required item tag [{REQUIRED_ITEM_TAG}] in {ITEM_LIST_TAG} template")]
    MissingItemName,
}

impl TagError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TagError::UnknownTag { .. } => "T100",
            TagError::InvalidItemTag { .. } => "T101",
            TagError::MissingItemName => "T102",
        }
    }

    /// Literal source text that locates this finding.
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        match self {
            TagError::UnknownTag { name } | TagError::InvalidItemTag { name } => {
                Some(format!("[{name}"))
            }
            TagError::MissingItemName => Some(format!("[{ITEM_LIST_TAG}(")),
        }
    }

    /// Text the needle has to follow. Item-level findings live inside the
    /// item-list block, so they are searched for after its opening.
    #[must_use]
    pub fn anchor(&self) -> Option<String> {
        match self {
            TagError::InvalidItemTag { .. } => Some(format!("[{ITEM_LIST_TAG}(")),
            TagError::UnknownTag { .. } | TagError::MissingItemName => None,
        }
    }
}

/// Advisory tag findings.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum TagWarning {
    #[error("Possible typo: [{wrong}] should be [{correct}]")]
    PossibleTypo {
        wrong: &'static str,
        correct: &'static str,
    },
}

impl TagWarning {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TagWarning::PossibleTypo { .. } => "T200",
        }
    }

    #[must_use]
    pub fn needle(&self) -> Option<String> {
        match self {
            TagWarning::PossibleTypo { wrong, .. } => Some(format!("[{wrong}]")),
        }
    }
}
