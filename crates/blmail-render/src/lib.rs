//! Order-lifecycle e-mail templates for every storefront.
//!
//! Output is BaseLinker template source: order data is left as bracketed
//! tags for BaseLinker to fill in when it sends the e-mail.

mod completeness;
mod copy;
mod kind;
mod layout;
mod market;
mod minify;

use thiserror::Error;

pub use crate::completeness::validate_copy;
pub use crate::completeness::validate_market_copy;
pub use crate::completeness::CopyError;
pub use crate::completeness::CopyReport;
pub use crate::completeness::CopyWarning;
pub use crate::kind::TemplateKind;
pub use crate::market::BankAccount;
pub use crate::market::Market;
pub use crate::market::SUPPORT_EMAIL;
pub use crate::minify::minify;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown market `{0}`, expected one of: cs, sk, de, pl, hu, sl, hr")]
    UnknownMarket(String),
    #[error(
        "unknown template kind `{0}`, expected one of: order-confirmation, bank-transfer, payment-confirmed, order-shipped"
    )]
    UnknownKind(String),
}

/// Render the template for `market` and `kind`, unminified.
#[must_use]
pub fn render(market: Market, kind: TemplateKind) -> String {
    let html = layout::document(market, kind);
    tracing::debug!(%market, %kind, chars = html.chars().count(), "rendered template");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_matches_market() {
        for market in Market::ALL {
            let html = render(market, TemplateKind::OrderConfirmation);
            assert!(html.contains(&format!(r#"<html lang="{market}""#)));
        }
    }

    #[test]
    fn bank_details_only_in_bank_transfer() {
        let iban = Market::Cs.bank_account().iban;
        assert!(render(Market::Cs, TemplateKind::BankTransfer).contains(iban));
        assert!(!render(Market::Cs, TemplateKind::OrderConfirmation).contains(iban));
    }

    #[test]
    fn shipped_links_tracking() {
        let html = render(Market::De, TemplateKind::OrderShipped);
        assert!(html.contains("[shipment_track_link]"));
        assert!(!html.contains("[odkaz_na_objednávku]"));
    }

    #[test]
    fn phone_hint_for_english_hotline() {
        assert!(render(Market::Hu, TemplateKind::OrderShipped).contains("(English&nbsp;support)"));
        assert!(!render(Market::Cs, TemplateKind::OrderShipped).contains("English"));
    }
}
