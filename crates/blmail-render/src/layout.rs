//! Table-based e-mail layout.
//!
//! Every table zeroes its padding, spacing and border, and every styled
//! element carries its style inline. The only `)]` in a document is the one
//! closing the item-list tag.

use crate::copy::bank_text;
use crate::copy::kind_text;
use crate::copy::market_text;
use crate::copy::KindText;
use crate::copy::MarketText;
use crate::kind::TemplateKind;
use crate::market::Market;
use crate::market::SUPPORT_EMAIL;

const IMAGE_BASE: &str = "https://jumpsafe.eu/mail-images/";
const ACCENT: &str = "#0088CE";
const FONT: &str = "font-family:Arial,Helvetica,sans-serif;";
const TABLE: &str = r#"border="0" cellpadding="0" cellspacing="0""#;

const HEAD_STYLE: &str = r"<style type='text/css'>
body,table,td,a{-webkit-text-size-adjust:100%;-ms-text-size-adjust:100%;}
table,td{mso-table-lspace:0pt;mso-table-rspace:0pt;}
img{-ms-interpolation-mode:bicubic;border:0;height:auto;line-height:100%;outline:none;text-decoration:none;}
body{margin:0!important;padding:0!important;width:100%!important;background-color:#f5f7f9;}
a[x-apple-data-detectors]{color:inherit!important;text-decoration:none!important;}
@media screen and (max-width:600px){
.mobile-wrapper{width:100%!important;max-width:100%!important;}
.mobile-padding{padding-left:20px!important;padding-right:20px!important;}
.mobile-stack{display:block!important;width:100%!important;}
}
</style>";

const MSO_HEAD: &str = r"<!--[if mso]>
<noscript><xml><o:OfficeDocumentSettings><o:PixelsPerInch>96</o:PixelsPerInch></o:OfficeDocumentSettings></xml></noscript>
<![endif]-->";

/// Build the full document for `market` and `kind`.
pub(crate) fn document(market: Market, kind: TemplateKind) -> String {
    let text = market_text(market);
    let copy = kind_text(market, kind);

    let sections = [
        head(market, copy.title),
        body_open(),
        header(market, text),
        hero(copy),
        timeline(text, kind),
        if kind == TemplateKind::BankTransfer {
            bank_details(market)
        } else {
            String::new()
        },
        order_summary(text),
        actions(text, kind),
        delivery(text),
        help(market, text),
        footer(market, text),
        body_close(),
    ];

    sections.concat()
}

fn head(market: Market, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" xmlns="http://www.w3.org/1999/xhtml" xmlns:v="urn:schemas-microsoft-com:vml" xmlns:o="urn:schemas-microsoft-com:office:office">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta http-equiv="X-UA-Compatible" content="IE=edge">
<meta name="x-apple-disable-message-reformatting">
<title>{title}</title>
{MSO_HEAD}
{HEAD_STYLE}
</head>
"#,
        lang = market.code(),
    )
}

fn body_open() -> String {
    format!(
        r#"<body style="margin:0;padding:0;background-color:#f5f7f9;">
<table {TABLE} width="100%" style="background-color:#f5f7f9;">
<tr>
<td align="center" valign="top" style="padding:30px 10px;">
<!--[if mso]><table align="center" {TABLE} width="600" style="width:600px;"><tr><td align="center" valign="top" width="600" style="width:600px;"><![endif]-->
<table {TABLE} width="100%" style="max-width:600px;background-color:#ffffff;border-radius:12px;" class="mobile-wrapper">
"#
    )
}

fn body_close() -> String {
    r#"</table>
<!--[if mso]></td></tr></table><![endif]-->
</td>
</tr>
</table>
</body>
</html>
"#
    .to_string()
}

fn header(market: Market, text: MarketText) -> String {
    format!(
        r#"<tr>
<td align="center" style="background-color:{ACCENT};padding:28px 40px;" class="mobile-padding">
<a href="{url}" target="_blank" style="text-decoration:none;"><img src="{IMAGE_BASE}springfree-logo-white.png" alt="{brand}" width="160" height="160" style="display:block;max-width:160px;"></a>
</td>
</tr>
"#,
        url = market.website_url(),
        brand = text.brand_name,
    )
}

fn hero(copy: KindText) -> String {
    let lead = copy.lead.replace("{name}", "[jméno]").replace(
        "{order_number}",
        &format!(r#"<strong style="color:{ACCENT};">[číslo_objednávky]</strong>"#),
    );
    format!(
        r#"<tr>
<td align="center" style="padding:40px 40px 16px 40px;" class="mobile-padding">
<h1 style="{FONT}font-size:26px;font-weight:bold;color:#2d3748;margin:0 0 14px 0;">{greeting}</h1>
<p style="{FONT}font-size:15px;line-height:24px;color:#64748b;margin:0 0 12px 0;">{lead}</p>
<p style="{FONT}font-size:15px;line-height:24px;color:#334155;margin:0;">{follow_up}</p>
</td>
</tr>
"#,
        greeting = copy.greeting,
        follow_up = copy.follow_up,
    )
}

/// Order progress: confirmed, paid, shipped. Steps up to the current one
/// are highlighted.
fn timeline(text: MarketText, kind: TemplateKind) -> String {
    let reached = match kind {
        TemplateKind::OrderConfirmation | TemplateKind::BankTransfer => 1,
        TemplateKind::PaymentConfirmed => 2,
        TemplateKind::OrderShipped => 3,
    };
    let steps: String = [
        text.timeline_confirmed,
        text.timeline_paid,
        text.timeline_shipped,
    ]
    .iter()
    .enumerate()
    .map(|(index, label)| {
        let color = if index < reached { ACCENT } else { "#cbd5e1" };
        format!(
            r#"<td width="33%" align="center" valign="top" style="padding:0 4px;border-top:3px solid {color};"><div style="padding-top:8px;{FONT}font-size:12px;font-weight:bold;color:{color};">{label}</div></td>"#
        )
    })
    .collect();

    format!(
        r#"<tr>
<td style="padding:24px 40px 20px 40px;" class="mobile-padding">
<table {TABLE} width="100%" style="width:100%;"><tr>{steps}</tr></table>
</td>
</tr>
"#
    )
}

fn bank_details(market: Market) -> String {
    let bank = bank_text(market);
    let account = market.bank_account();
    let row = |label: &str, value: &str| {
        format!(
            r#"<tr><td style="padding:4px 0;{FONT}font-size:13px;color:#64748b;">{label}</td><td align="right" style="padding:4px 0;{FONT}font-size:13px;font-weight:bold;color:#334155;">{value}</td></tr>"#
        )
    };
    let rows = [
        row(bank.bank, account.bank_name),
        row("IBAN", account.iban),
        row("BIC/SWIFT", account.bic),
        row(bank.reference, "[číslo_objednávky]"),
        row(bank.amount, "[cena_za objednávku] [měna]"),
    ]
    .concat();

    format!(
        r#"<tr>
<td style="padding:0 40px 20px 40px;" class="mobile-padding">
<table {TABLE} width="100%" style="background-color:#f0f9ff;border-radius:8px;">
<tr><td style="padding:18px 20px;">
<p style="{FONT}font-size:15px;font-weight:bold;color:#2d3748;margin:0 0 10px 0;">{title}</p>
<table {TABLE} width="100%" style="width:100%;">{rows}</table>
<p style="{FONT}font-size:13px;font-weight:bold;color:#2d3748;margin:14px 0 4px 0;">{speed_up_title}</p>
<p style="{FONT}font-size:13px;line-height:20px;color:#64748b;margin:0;">{speed_up_text}</p>
</td></tr>
</table>
</td>
</tr>
"#,
        title = bank.details_title,
        speed_up_title = bank.speed_up_title,
        speed_up_text = bank.speed_up_text,
    )
}

/// Ordered items and the total. The item row is the document's only
/// parameterized tag.
fn order_summary(text: MarketText) -> String {
    let item_row = format!(
        r#"[seznam_položek(<tr><td width="72" valign="top" style="padding:10px 0;"><img src="{IMAGE_BASE}[i_sku].png" alt="[i_name]" width="64" height="64" style="display:block;border-radius:6px;"></td><td valign="top" style="padding:10px 12px;"><p style="{FONT}font-size:14px;font-weight:bold;color:#334155;margin:0 0 4px 0;">[i_name]</p><p style="{FONT}font-size:12px;color:#64748b;margin:0;">{quantity}: [i_quantity]</p></td><td align="right" valign="top" style="padding:10px 0;{FONT}font-size:14px;font-weight:bold;color:#334155;white-space:nowrap;">[i_price] [i_currency]</td></tr>)]"#,
        quantity = text.quantity,
    );

    format!(
        r#"<tr>
<td style="padding:0 40px 20px 40px;" class="mobile-padding">
<p style="{FONT}font-size:17px;font-weight:bold;color:#2d3748;margin:0 0 8px 0;">{your_order}</p>
<table {TABLE} width="100%" style="width:100%;border-top:1px solid #e2e8f0;">
{item_row}
</table>
<table {TABLE} width="100%" style="width:100%;border-top:1px solid #e2e8f0;">
<tr><td style="padding:14px 0;{FONT}font-size:15px;color:#334155;">{total}</td><td align="right" style="padding:14px 0;{FONT}font-size:18px;font-weight:bold;color:{ACCENT};">[cena_za objednávku] [měna]</td></tr>
</table>
</td>
</tr>
"#,
        your_order = text.your_order,
        total = text.total_to_pay,
    )
}

/// Call to action: the tracking link once shipped, the order page otherwise.
fn actions(text: MarketText, kind: TemplateKind) -> String {
    let (href, extra) = if kind == TemplateKind::OrderShipped {
        (
            "[shipment_track_link]",
            format!(
                r#"<p style="{FONT}font-size:13px;color:#64748b;margin:10px 0 0 0;">[metoda_zásilky]: [číslo zásilky]</p>"#
            ),
        )
    } else {
        ("[odkaz_na_objednávku]", String::new())
    };

    format!(
        r#"<tr>
<td align="center" style="padding:0 40px 28px 40px;" class="mobile-padding">
<a href="{href}" target="_blank" style="display:inline-block;padding:12px 28px;{FONT}font-size:14px;font-weight:bold;color:#ffffff;text-decoration:none;background-color:{ACCENT};border-radius:6px;">{track}</a>
{extra}
</td>
</tr>
"#,
        track = text.track_order,
    )
}

fn delivery(text: MarketText) -> String {
    format!(
        r#"<tr>
<td style="padding:0 40px 24px 40px;" class="mobile-padding">
<p style="{FONT}font-size:17px;font-weight:bold;color:#2d3748;margin:0 0 10px 0;">{details}</p>
<table {TABLE} width="100%" style="width:100%;">
<tr>
<td width="50%" valign="top" style="padding:0 10px 0 0;" class="mobile-stack">
<p style="{FONT}font-size:12px;font-weight:bold;color:#64748b;margin:0 0 4px 0;">{address}</p>
<p style="{FONT}font-size:13px;line-height:20px;color:#334155;margin:0;">[jméno a příjmení]<br>[adresa]<br>[poštovní směrovací číslo] [město]<br>[země]</p>
</td>
<td width="50%" valign="top" style="padding:0;" class="mobile-stack">
<p style="{FONT}font-size:12px;font-weight:bold;color:#64748b;margin:0 0 4px 0;">{payment}</p>
<p style="{FONT}font-size:13px;color:#334155;margin:0 0 10px 0;">[způsob platby]</p>
<p style="{FONT}font-size:12px;font-weight:bold;color:#64748b;margin:0 0 4px 0;">{shipping}</p>
<p style="{FONT}font-size:13px;color:#334155;margin:0;">[metoda_zásilky]</p>
</td>
</tr>
</table>
</td>
</tr>
"#,
        details = text.delivery_details,
        address = text.shipping_address,
        payment = text.payment,
        shipping = text.shipping,
    )
}

fn help(market: Market, text: MarketText) -> String {
    let phone = market.phone();
    let dial: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let mut phone_label = phone.replace(' ', "&nbsp;");
    if let Some(hint) = market.phone_hint() {
        phone_label.push_str("&nbsp;");
        phone_label.push_str(&hint.replace(' ', "&nbsp;"));
    }

    let body = text
        .need_help_text
        .replace(
            "{phone}",
            &format!(r#"<a href="tel:{dial}" style="color:{ACCENT};text-decoration:none;">{phone_label}</a>"#),
        )
        .replace(
            "{email}",
            &format!(r#"<a href="mailto:{SUPPORT_EMAIL}" style="color:{ACCENT};text-decoration:none;">{SUPPORT_EMAIL}</a>"#),
        );

    format!(
        r#"<tr>
<td style="padding:0 40px 30px 40px;" class="mobile-padding">
<table {TABLE} width="100%" style="background-color:#f8fafc;border-radius:8px;">
<tr><td style="padding:18px 20px;">
<p style="{FONT}font-size:15px;font-weight:bold;color:#2d3748;margin:0 0 6px 0;">{title}</p>
<p style="{FONT}font-size:13px;line-height:20px;color:#64748b;margin:0;">{body}</p>
</td></tr>
</table>
</td>
</tr>
"#,
        title = text.need_help,
    )
}

fn footer(market: Market, text: MarketText) -> String {
    format!(
        r#"<tr>
<td align="center" style="background-color:#f1f5f9;padding:20px 40px;" class="mobile-padding">
<p style="{FONT}font-size:11px;color:#94a3b8;margin:0 0 4px 0;"><a href="{url}" target="_blank" style="color:#94a3b8;text-decoration:none;">{domain}</a></p>
<p style="{FONT}font-size:11px;color:#94a3b8;margin:0;">{copyright}</p>
</td>
</tr>
"#,
        url = market.website_url(),
        domain = market.website_url().trim_start_matches("https://"),
        copyright = text.copyright,
    )
}
