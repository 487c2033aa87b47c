use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::RenderError;

/// Step of the order lifecycle an e-mail is sent for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    OrderConfirmation,
    BankTransfer,
    PaymentConfirmed,
    OrderShipped,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::OrderConfirmation,
        TemplateKind::BankTransfer,
        TemplateKind::PaymentConfirmed,
        TemplateKind::OrderShipped,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            TemplateKind::OrderConfirmation => "order-confirmation",
            TemplateKind::BankTransfer => "bank-transfer",
            TemplateKind::PaymentConfirmed => "payment-confirmed",
            TemplateKind::OrderShipped => "order-shipped",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for TemplateKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| RenderError::UnknownKind(s.to_string()))
    }
}
