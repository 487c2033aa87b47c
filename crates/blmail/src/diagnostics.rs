use blmail_conf::DiagnosticSeverity;
use blmail_conf::DiagnosticsConfig;
use blmail_source::Diagnostic;
use blmail_source::DiagnosticRenderer;
use blmail_source::Severity;
use blmail_source::Span;
use serde::Serialize;

use crate::report::TemplateReport;

/// One tag or HTML finding, located in its source when possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub code: &'static str,
    pub message: String,
    pub span: Option<Span>,
}

impl Finding {
    fn new(
        source: &str,
        code: &'static str,
        message: String,
        needle: Option<String>,
        anchor: Option<String>,
    ) -> Self {
        let span = needle.and_then(|needle| match anchor {
            Some(anchor) => Span::locate_after(source, &anchor, &needle),
            None => Span::locate(source, &needle),
        });
        Self {
            code,
            message,
            span,
        }
    }
}

/// Flatten a report into findings, in report order: tag errors, HTML errors,
/// tag warnings, HTML warnings.
#[must_use]
pub fn collect_findings(source: &str, report: &TemplateReport) -> Vec<Finding> {
    let mut findings = Vec::new();

    for error in &report.tags.errors {
        findings.push(Finding::new(
            source,
            error.code(),
            error.to_string(),
            error.needle(),
            error.anchor(),
        ));
    }
    for error in &report.html.errors {
        findings.push(Finding::new(
            source,
            error.code(),
            error.to_string(),
            error.needle(),
            None,
        ));
    }
    for warning in &report.tags.warnings {
        findings.push(Finding::new(
            source,
            warning.code(),
            warning.to_string(),
            warning.needle(),
            None,
        ));
    }
    for warning in &report.html.warnings {
        findings.push(Finding::new(
            source,
            warning.code(),
            warning.to_string(),
            warning.needle(),
            None,
        ));
    }

    findings
}

/// Machine-readable form of a finding, as printed by `check --format json`.
#[derive(Debug, Serialize)]
pub struct JsonFinding<'a> {
    pub path: &'a str,
    pub code: &'a str,
    pub severity: DiagnosticSeverity,
    pub message: &'a str,
    /// 1-based line and column of the finding, when it could be located.
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl<'a> JsonFinding<'a> {
    #[must_use]
    pub fn new(
        source: &str,
        path: &'a str,
        finding: &'a Finding,
        severity: DiagnosticSeverity,
    ) -> Self {
        let position = finding
            .span
            .map(|span| line_column(source, span.start_usize()));
        Self {
            path,
            code: finding.code,
            severity,
            message: &finding.message,
            line: position.map(|(line, _)| line),
            column: position.map(|(_, column)| column),
        }
    }
}

fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |index| index + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Render a finding with the configured severity.
///
/// Returns `None` when the code is turned off.
#[must_use]
pub fn render_finding(
    source: &str,
    path: &str,
    finding: &Finding,
    config: &DiagnosticsConfig,
    fmt: &DiagnosticRenderer,
) -> Option<String> {
    let severity = to_render_severity(config.get_severity(finding.code))?;
    let span = finding.span.unwrap_or_else(|| Span::new(0, 0));

    let diagnostic = Diagnostic::new(
        source,
        path,
        finding.code,
        &finding.message,
        severity,
        span,
        "",
    );
    Some(fmt.render(&diagnostic))
}

fn to_render_severity(severity: DiagnosticSeverity) -> Option<Severity> {
    match severity {
        DiagnosticSeverity::Off => None,
        DiagnosticSeverity::Error => Some(Severity::Error),
        DiagnosticSeverity::Warning => Some(Severity::Warning),
        DiagnosticSeverity::Info => Some(Severity::Info),
        DiagnosticSeverity::Hint => Some(Severity::Hint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::validate_template;

    const BROKEN: &str = "<p>Dobrý den [jmeno],</p>\n<img src=\"http://cdn.example.com/a.png\">\n";

    #[test]
    fn findings_follow_report_order() {
        let report = validate_template(BROKEN);
        let findings = collect_findings(BROKEN, &report);

        let codes: Vec<&str> = findings.iter().map(|f| f.code).collect();
        assert_eq!(codes.first(), Some(&"T100"));
        assert_eq!(codes.last(), Some(&"H203"));
        assert!(codes.contains(&"T200"));
        assert!(codes.contains(&"H102"));
    }

    #[test]
    fn findings_are_located() {
        let report = validate_template(BROKEN);
        let findings = collect_findings(BROKEN, &report);

        let unknown = findings.iter().find(|f| f.code == "T100").unwrap();
        let span = unknown.span.unwrap();
        let end = span.start_usize() + span.length_usize();
        assert_eq!(&BROKEN[span.start_usize()..end], "[jmeno");

        let missing = findings.iter().find(|f| f.code == "H101").unwrap();
        assert_eq!(missing.span, None);
    }

    #[test]
    fn item_tag_findings_point_inside_the_block() {
        let source =
            "<p>[jméno]</p><table>[seznam_položek(<tr><td>[i_name]</td><td>[jméno]</td></tr>)]</table>";
        let report = validate_template(source);
        let findings = collect_findings(source, &report);

        let invalid = findings.iter().find(|f| f.code == "T101").unwrap();
        let span = invalid.span.unwrap();
        assert_eq!(span.start_usize(), source.rfind("[jméno").unwrap());
    }

    #[test]
    fn off_codes_are_not_rendered() {
        let report = validate_template(BROKEN);
        let findings = collect_findings(BROKEN, &report);
        let mut config = DiagnosticsConfig::default();
        config.set_severity("T100", DiagnosticSeverity::Off);

        let unknown = findings.iter().find(|f| f.code == "T100").unwrap();
        let fmt = DiagnosticRenderer::plain();
        assert!(render_finding(BROKEN, "mail.html", unknown, &config, &fmt).is_none());

        let insecure = findings.iter().find(|f| f.code == "H102").unwrap();
        let output = render_finding(BROKEN, "mail.html", insecure, &config, &fmt).unwrap();
        assert!(output.contains("error[H102]"), "{output}");
        assert!(output.contains("mail.html:2"), "{output}");
    }

    #[test]
    fn warnings_render_as_warnings() {
        let report = validate_template(BROKEN);
        let findings = collect_findings(BROKEN, &report);
        let typo = findings.iter().find(|f| f.code == "T200").unwrap();

        let output = render_finding(
            BROKEN,
            "mail.html",
            typo,
            &DiagnosticsConfig::default(),
            &DiagnosticRenderer::plain(),
        )
        .unwrap();
        assert!(output.starts_with("warning[T200]"), "{output}");
    }

    #[test]
    fn json_positions_are_one_based() {
        let report = validate_template(BROKEN);
        let findings = collect_findings(BROKEN, &report);
        let insecure = findings.iter().find(|f| f.code == "H102").unwrap();

        let json = JsonFinding::new(BROKEN, "mail.html", insecure, DiagnosticSeverity::Error);
        assert_eq!(json.line, Some(2));
        assert_eq!(json.column, Some(11));
        insta::assert_snapshot!(
            serde_json::to_string(&json).unwrap(),
            @r#"{"path":"mail.html","code":"H102","severity":"error","message":"Image uses HTTP instead of HTTPS: http://cdn.example.com/a.png","line":2,"column":11}"#
        );
    }

    #[test]
    fn line_column_counts_chars() {
        assert_eq!(line_column("ab\nčd[x]", 6), (2, 3));
        assert_eq!(line_column("[x]", 0), (1, 1));
    }
}
