use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::RenderError;

/// Shared support mailbox for every storefront.
pub const SUPPORT_EMAIL: &str = "springfree@jumpsafe.eu";

/// A storefront; its code is also the document language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Cs,
    Sk,
    De,
    Pl,
    Hu,
    Sl,
    Hr,
}

/// Account a bank transfer is paid to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankAccount {
    pub bank_name: &'static str,
    pub account_number: &'static str,
    pub iban: &'static str,
    pub bic: &'static str,
    pub holder: &'static str,
}

const CSOB: &str = "Československá obchodní banka, a.s.";
const HOLDER: &str = "MarketLink Int. s.r.o.";

const CSOB_EUR: BankAccount = BankAccount {
    bank_name: CSOB,
    account_number: "290667021/0300",
    iban: "CZ36 0300 0000 0002 9066 7021",
    bic: "CEKOCZPP",
    holder: HOLDER,
};

impl Market {
    pub const ALL: [Market; 7] = [
        Market::Cs,
        Market::Sk,
        Market::De,
        Market::Pl,
        Market::Hu,
        Market::Sl,
        Market::Hr,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Market::Cs => "cs",
            Market::Sk => "sk",
            Market::De => "de",
            Market::Pl => "pl",
            Market::Hu => "hu",
            Market::Sl => "sl",
            Market::Hr => "hr",
        }
    }

    #[must_use]
    pub fn website_url(self) -> &'static str {
        match self {
            Market::Cs => "https://www.trampoliny-springfree.cz",
            Market::Sk => "https://www.springfree.sk",
            Market::De => "https://www.springfreetrampoline.at",
            Market::Pl => "https://www.springfree.pl",
            Market::Hu => "https://www.springfree.hu",
            Market::Sl => "https://www.springfree.si",
            Market::Hr => "https://www.springfree.com.hr",
        }
    }

    #[must_use]
    pub fn phone(self) -> &'static str {
        match self {
            Market::De => "+43 676 6411442",
            _ => "+420 777 559 607",
        }
    }

    /// Suffix for markets served by the English-speaking hotline.
    #[must_use]
    pub fn phone_hint(self) -> Option<&'static str> {
        match self {
            Market::Cs | Market::Sk | Market::De => None,
            Market::Pl | Market::Hu | Market::Sl | Market::Hr => Some("(English support)"),
        }
    }

    #[must_use]
    pub fn currency_symbol(self) -> &'static str {
        match self {
            Market::Cs => "Kč",
            Market::Pl => "zł",
            _ => "€",
        }
    }

    #[must_use]
    pub fn bank_account(self) -> BankAccount {
        match self {
            Market::Cs => BankAccount {
                bank_name: CSOB,
                account_number: "290667005/0300",
                iban: "CZ80 0300 0000 0002 9066 7005",
                bic: "CEKOCZPP",
                holder: HOLDER,
            },
            Market::De => BankAccount {
                bank_name: "Erste Bank",
                account_number: "841-954-412/00",
                iban: "AT89 2011 1841 9544 1200",
                bic: "GIBAATWWXXX",
                holder: HOLDER,
            },
            Market::Pl => BankAccount {
                bank_name: CSOB,
                account_number: "354431086/0300",
                iban: "CZ98 0300 0000 0003 5443 1086",
                bic: "CEKOCZPP",
                holder: HOLDER,
            },
            Market::Sk | Market::Hu | Market::Sl | Market::Hr => CSOB_EUR,
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Market {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Market::ALL
            .into_iter()
            .find(|market| market.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| RenderError::UnknownMarket(s.to_string()))
    }
}
