//! E-mail client compatibility checks.
//!
//! Each check scans the raw HTML with a fixed pattern and reports its own
//! findings. [`validate_html`] runs all of them and folds the results into an
//! [`HtmlReport`].

mod checks;
mod error;
mod policy;

pub use crate::checks::check_image_urls;
pub use crate::checks::check_image_urls_with;
pub use crate::checks::check_inline_styles;
pub use crate::checks::check_mso_elements;
pub use crate::checks::check_required_elements;
pub use crate::checks::check_responsive_styles;
pub use crate::checks::check_size;
pub use crate::checks::check_table_attributes;
pub use crate::checks::ElementCheck;
pub use crate::checks::ImageCheck;
pub use crate::checks::SizeCheck;
pub use crate::checks::TableCheck;
pub use crate::error::HtmlError;
pub use crate::error::HtmlWarning;
pub use crate::error::TableAttribute;
pub use crate::policy::HtmlPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlReport {
    pub valid: bool,
    pub errors: Vec<HtmlError>,
    pub warnings: Vec<HtmlWarning>,
    /// Character count of the document.
    pub size: usize,
}

/// Validate `html` with the default policy.
#[must_use]
pub fn validate_html(html: &str) -> HtmlReport {
    validate_html_with(html, &HtmlPolicy::default())
}

#[must_use]
pub fn validate_html_with(html: &str, policy: &HtmlPolicy) -> HtmlReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let size = check_size(html, policy.max_size);
    if !size.valid {
        errors.push(HtmlError::SizeExceeded {
            size: size.size,
            limit: size.limit,
        });
    }

    errors.extend(
        check_required_elements(html)
            .missing
            .into_iter()
            .map(|element| HtmlError::MissingElement { element }),
    );

    warnings.extend(
        check_mso_elements(html)
            .missing
            .into_iter()
            .map(|element| HtmlWarning::MissingMsoElement { element }),
    );

    warnings.extend(check_inline_styles(html));

    errors.extend(check_table_attributes(html).errors);

    let images = check_image_urls_with(html, policy);
    errors.extend(images.errors);
    warnings.extend(images.warnings);

    warnings.extend(check_responsive_styles(html, policy.breakpoint_px));

    tracing::debug!(
        size = size.size,
        errors = errors.len(),
        warnings = warnings.len(),
        "html checked"
    );

    HtmlReport {
        valid: errors.is_empty(),
        errors,
        warnings,
        size: size.size,
    }
}
