use blmail_html::validate_html_with;
use blmail_html::HtmlPolicy;
use blmail_html::HtmlReport;
use blmail_tags::validate_tags;
use blmail_tags::TagReport;

/// Combined tag and HTML validation result for one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReport {
    pub valid: bool,
    pub tags: TagReport,
    pub html: HtmlReport,
    /// Tag errors first, then HTML errors.
    pub all_errors: Vec<String>,
    pub all_warnings: Vec<String>,
}

/// Validate `html` as a BaseLinker e-mail template with the default policy.
#[must_use]
pub fn validate_template(html: &str) -> TemplateReport {
    validate_template_with(html, &HtmlPolicy::default())
}

#[must_use]
pub fn validate_template_with(html: &str, policy: &HtmlPolicy) -> TemplateReport {
    let tags = validate_tags(html);
    let html = validate_html_with(html, policy);

    let all_errors = tags
        .errors
        .iter()
        .map(ToString::to_string)
        .chain(html.errors.iter().map(ToString::to_string))
        .collect();
    let all_warnings = tags
        .warnings
        .iter()
        .map(ToString::to_string)
        .chain(html.warnings.iter().map(ToString::to_string))
        .collect();

    TemplateReport {
        valid: tags.valid && html.valid,
        tags,
        html,
        all_errors,
        all_warnings,
    }
}

#[cfg(test)]
mod tests {
    use blmail_render::minify;
    use blmail_render::render;
    use blmail_render::Market;
    use blmail_render::TemplateKind;

    use super::*;

    #[test]
    fn tag_errors_come_first() {
        let report = validate_template("<p>[neznamy]</p>");

        assert!(!report.valid);
        assert_eq!(report.all_errors[0], "Unknown tag: [neznamy]");
        assert_eq!(
            report.all_errors.len(),
            report.tags.errors.len() + report.html.errors.len()
        );
    }

    #[test]
    fn html_errors_alone_invalidate() {
        let report = validate_template("<p>[jméno]</p>");

        assert!(report.tags.valid);
        assert!(!report.html.valid);
        assert!(!report.valid);
    }

    #[test]
    fn warnings_keep_template_valid() {
        let html = minify(&render(Market::Cs, TemplateKind::OrderConfirmation));
        let policy = HtmlPolicy {
            breakpoint_px: 480,
            ..HtmlPolicy::default()
        };
        let report = validate_template_with(&html, &policy);

        assert!(report.valid, "{:?}", report.all_errors);
        assert_eq!(
            report.all_warnings,
            vec!["No mobile breakpoint (@media max-width:480px) found".to_string()]
        );
    }

    #[test]
    fn policy_is_applied() {
        let html = minify(&render(Market::Sk, TemplateKind::BankTransfer));
        let policy = HtmlPolicy {
            max_size: 100,
            ..HtmlPolicy::default()
        };

        let report = validate_template_with(&html, &policy);
        assert!(!report.valid);
        assert!(report.all_errors[0].starts_with("Email size ("));
    }

    #[test]
    fn every_generated_template_is_valid() {
        for market in Market::ALL {
            for kind in TemplateKind::ALL {
                let report = validate_template(&minify(&render(market, kind)));
                assert!(report.valid, "{market}/{kind}: {:?}", report.all_errors);
                assert!(report.all_warnings.is_empty(), "{market}/{kind}");
            }
        }
    }
}
