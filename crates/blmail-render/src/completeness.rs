//! Checks that every market has all of its text and contact details.

use serde::Serialize;
use thiserror::Error;

use crate::copy::bank_text;
use crate::copy::kind_text;
use crate::copy::market_text;
use crate::copy::BankText;
use crate::copy::KindText;
use crate::copy::MarketText;
use crate::kind::TemplateKind;
use crate::market::BankAccount;
use crate::market::Market;
use crate::market::SUPPORT_EMAIL;

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum CopyError {
    #[error("Empty text for '{key}' in market '{market}'")]
    EmptyText { market: Market, key: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum CopyWarning {
    #[error("Website URL for market '{market}' should use HTTPS: {url}")]
    InsecureWebsite { market: Market, url: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyReport {
    pub valid: bool,
    pub errors: Vec<CopyError>,
    pub warnings: Vec<CopyWarning>,
}

/// Check one market's text for every template kind, plus its contact and
/// bank details.
#[must_use]
pub fn validate_market_copy(market: Market) -> CopyReport {
    let mut errors = Vec::new();

    let details = [
        ("code", market.code()),
        ("website_url", market.website_url()),
        ("phone", market.phone()),
        ("currency_symbol", market.currency_symbol()),
        ("email", SUPPORT_EMAIL),
    ];
    push_empty(market, "", details, &mut errors);
    push_empty(market, "bank_account.", bank_account_fields(&market.bank_account()), &mut errors);
    push_empty(market, "", market_text_fields(&market_text(market)), &mut errors);
    push_empty(market, "bank.", bank_text_fields(&bank_text(market)), &mut errors);
    for kind in TemplateKind::ALL {
        let prefix = format!("{kind}.");
        push_empty(market, &prefix, kind_text_fields(&kind_text(market, kind)), &mut errors);
    }

    let mut warnings = Vec::new();
    let url = market.website_url();
    if !url.starts_with("https://") {
        warnings.push(CopyWarning::InsecureWebsite { market, url });
    }

    CopyReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// [`validate_market_copy`] over every market.
#[must_use]
pub fn validate_copy() -> CopyReport {
    let mut report = CopyReport {
        valid: true,
        ..CopyReport::default()
    };
    for market in Market::ALL {
        let market_report = validate_market_copy(market);
        report.valid &= market_report.valid;
        report.errors.extend(market_report.errors);
        report.warnings.extend(market_report.warnings);
    }
    report
}

fn push_empty<'a>(
    market: Market,
    prefix: &str,
    fields: impl IntoIterator<Item = (&'static str, &'a str)>,
    errors: &mut Vec<CopyError>,
) {
    for (key, value) in fields {
        if value.trim().is_empty() {
            errors.push(CopyError::EmptyText {
                market,
                key: format!("{prefix}{key}"),
            });
        }
    }
}

fn market_text_fields(text: &MarketText) -> [(&'static str, &'static str); 15] {
    [
        ("brand_name", text.brand_name),
        ("timeline_confirmed", text.timeline_confirmed),
        ("timeline_paid", text.timeline_paid),
        ("timeline_shipped", text.timeline_shipped),
        ("track_order", text.track_order),
        ("your_order", text.your_order),
        ("quantity", text.quantity),
        ("total_to_pay", text.total_to_pay),
        ("delivery_details", text.delivery_details),
        ("shipping_address", text.shipping_address),
        ("payment", text.payment),
        ("shipping", text.shipping),
        ("need_help", text.need_help),
        ("need_help_text", text.need_help_text),
        ("copyright", text.copyright),
    ]
}

fn kind_text_fields(text: &KindText) -> [(&'static str, &'static str); 4] {
    [
        ("title", text.title),
        ("greeting", text.greeting),
        ("lead", text.lead),
        ("follow_up", text.follow_up),
    ]
}

fn bank_text_fields(text: &BankText) -> [(&'static str, &'static str); 6] {
    [
        ("details_title", text.details_title),
        ("bank", text.bank),
        ("reference", text.reference),
        ("amount", text.amount),
        ("speed_up_title", text.speed_up_title),
        ("speed_up_text", text.speed_up_text),
    ]
}

fn bank_account_fields(account: &BankAccount) -> [(&'static str, &'static str); 5] {
    [
        ("bank_name", account.bank_name),
        ("account_number", account.account_number),
        ("iban", account.iban),
        ("bic", account.bic),
        ("holder", account.holder),
    ]
}
