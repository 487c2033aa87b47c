use blmail_html::validate_html;
use blmail_html::validate_html_with;
use blmail_html::HtmlError;
use blmail_html::HtmlPolicy;
use blmail_html::HtmlWarning;

const COMPLETE: &str = r#"<!DOCTYPE html>
<html lang="cs" xmlns:o="urn:schemas-microsoft-com:office:office">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Potvrzení objednávky</title>
<!--[if mso]>
<xml><o:OfficeDocumentSettings><o:PixelsPerInch>96</o:PixelsPerInch></o:OfficeDocumentSettings></xml>
<![endif]-->
<style>
@media screen and (max-width:600px) { .container { width: 100% !important; } }
</style>
</head>
<body style="margin:0">
<table role="presentation" border="0" cellpadding="0" cellspacing="0" style="width:100%">
<tr>
<td style="padding:20px">
<img src="https://jumpsafe.eu/mail-images/logo.png" alt="JumpSafe" style="display:block">
<h1 style="font-size:24px">Děkujeme za objednávku</h1>
<p style="margin:0">Dobrý den [jméno],</p>
<a href="[odkaz_na_objednávku]" style="color:#0066cc">Objednávka [číslo_objednávky]</a>
</td>
</tr>
</table>
</body>
</html>
"#;

#[test]
fn complete_template_is_valid() {
    let report = validate_html(COMPLETE);
    assert!(report.valid, "{:?}", report.errors);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(report.size, COMPLETE.chars().count());
}

#[test]
fn bare_fragment_collects_everything() {
    let report = validate_html(r#"<p>Hello</p><img src="http://example.com/a.png">"#);
    assert!(!report.valid);

    let error_codes: Vec<_> = report.errors.iter().map(HtmlError::code).collect();
    assert_eq!(
        error_codes,
        vec!["H101", "H101", "H101", "H101", "H101", "H103", "H103", "H103", "H102"]
    );

    let warning_codes: Vec<_> = report.warnings.iter().map(HtmlWarning::code).collect();
    assert_eq!(warning_codes, vec!["H200", "H200", "H200", "H202", "H203"]);
}

#[test]
fn oversized_template() {
    let padding = "x".repeat(30_000);
    let html = COMPLETE.replace("Dobrý den", &padding);
    let report = validate_html(&html);
    assert!(!report.valid);
    assert!(report.size > 30_000);
    assert!(matches!(
        report.errors[0],
        HtmlError::SizeExceeded { limit: 25_000, .. }
    ));
}

#[test]
fn warnings_never_invalidate() {
    let html = COMPLETE
        .replace("@media screen and (max-width:600px)", "")
        .replace("https://jumpsafe.eu/mail-images/logo.png", "https://cdn.example.com/logo.png");
    let report = validate_html(&html);
    assert!(report.valid);
    assert_eq!(
        report.warnings,
        vec![
            HtmlWarning::ForeignImageHost {
                domain: "jumpsafe.eu".to_string(),
                src: "https://cdn.example.com/logo.png".to_string(),
            },
            HtmlWarning::NoMediaQueries,
        ]
    );
}

#[test]
fn policy_overrides_limits() {
    let policy = HtmlPolicy {
        max_size: 100,
        image_host: "cdn.example.com/".to_string(),
        breakpoint_px: 480,
    };
    let report = validate_html_with(COMPLETE, &policy);

    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code(), "H100");

    let warning_codes: Vec<_> = report.warnings.iter().map(HtmlWarning::code).collect();
    assert_eq!(warning_codes, vec!["H202", "H204"]);
    insta::assert_snapshot!(
        report.warnings[1].to_string(),
        @"No mobile breakpoint (@media max-width:480px) found"
    );
}
