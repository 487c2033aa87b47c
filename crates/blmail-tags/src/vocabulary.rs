//! BaseLinker tag vocabularies.
//!
//! These tables mirror the tag list BaseLinker documents for e-mail
//! templates. They are closed sets: anything outside them is reported.

use std::sync::LazyLock;

use regex::RegexSet;
use rustc_hash::FxHashSet;

/// Prefix shared by item-level tags. Tags carrying it are only checked
/// inside the item-list block.
pub const ITEM_TAG_PREFIX: &str = "i_";

/// Canonical name of the repeating-row tag.
pub const ITEM_LIST_TAG: &str = "seznam_položek";

/// Item tag every item-list row has to print.
pub const REQUIRED_ITEM_TAG: &str = "i_name";

/// Tags substituted with order, client, invoice and shipping data.
pub const ORDER_TAGS: &[&str] = &[
    // order
    "status",
    "status_name_short",
    "status_name",
    "název_zdroje",
    "datum objednávky",
    "status_date",
    "způsob platby",
    "payment_id",
    "status_payment",
    "uhrazená suma",
    "nezaplacená částka",
    "cena_za objednávku",
    "items_price",
    "měna",
    "položky_váha",
    "další_pole_1",
    "další_pole_2",
    "i__o_97218",
    "client_comments",
    "sell_comments",
    "číslo_objednávky",
    "číslo_objednávky_obchod",
    "číslo_objednávky_zdroj",
    "číslo_objednávky_zdroj_2",
    "číslo_objednávky_warehouse",
    "order_aa_last_error",
    "order_hash",
    "odkaz_na_objednávku",
    "odkaz_na_objednávku_68172",
    "products_photo_link",
    // client
    "e-mail",
    "telefon",
    "jméno a příjmení",
    "jméno",
    "příjmení",
    "společnost",
    "adresa",
    "poštovní směrovací číslo",
    "město",
    "stát",
    "země",
    "country_en",
    "country_de",
    "client_login",
    // products
    "items_count",
    "items_list",
    "items_list2",
    "items_list3",
    "seznam_položek4",
    "items_list_sku",
    "items_list_sku2",
    "items_list_missing",
    "items_list_missing2",
    "items_list_picked",
    "items_list_packed",
    "products_sku",
    "seznam aukcí",
    // invoice
    "název_faktury_a_příjmení",
    "číslo faktury",
    "fakturační adresa",
    "faktura_postal_code",
    "faktura_city",
    "invoice_state",
    "faktura_země",
    "faktura_firma",
    "faktura_vat_reg_no",
    "externí_číslo_faktury",
    "invoice_deadline",
    "invoice_deadline_days",
    "days_of_deferred_payment",
    "invoice_gov_id",
    "invoice_gov_date",
    "invoice_gov_status",
    "client_want_invoice",
    "proforma_number",
    "opravné_číslo",
    "corrections_numbers",
    "číslo účtenky",
    "payment_link",
    "faktura_odkaz",
    "opravný_odkaz",
    "příjem_odkaz",
    // delivery
    "cena_zásilky",
    "metoda_zásilky",
    "číslo zásilky",
    "shipment_number_oldest",
    "číslo_ zásilky",
    "shipment_track_link",
    "shipment_track_link_oldest",
    "shipment_track_link_en",
    "shipment_track_link_all",
    "shipment_track_link_all2",
    "shipment_track_link_all_en",
    "shipment_track_link_all_en2",
    "shipment_courier",
    "místo vyzvednutí",
    "pickup_point_name",
    "pickup_point_address",
    "pickup_point_postal_code",
    "pickup_point_city",
    "pickup_point_id",
    // other
    "jméno_profilu",
    "aktuální čas",
    "dnešní datum",
];

/// Tags valid only inside the item-list block.
pub const ITEM_TAGS: &[&str] = &[
    "i_ord",
    "i_id",
    "i_variant_id",
    "i_sku",
    "i_ean",
    "p_location",
    "i_name",
    "i_quantity",
    "i_atributy",
    "i_price",
    "i_currency",
    "i_auction_nr",
    "i_source",
    "p_stop",
];

/// Tags that take a `(...)` argument. The item list exists in an English
/// and a Czech spelling.
pub const PARAMETERIZED_TAGS: &[&str] = &["items_list", ITEM_LIST_TAG, "vypočítat"];

/// Bracketed text that is not a BaseLinker tag: Outlook conditional
/// comments and vendor CSS attribute selectors.
const IGNORE_PATTERNS: &[&str] = &[
    r"^if\s",
    r"^endif",
    r"^x-apple-",
    r"^mso",
    r"^-webkit-",
    r"^-moz-",
];

/// Common ASCII-folded misspellings, as `(wrong, correct)`.
pub const TYPOS: &[(&str, &str)] = &[
    ("jmeno", "jméno"),
    ("prijmeni", "příjmení"),
    ("cislo_objednavky", "číslo_objednávky"),
    ("cena_za_objednavku", "cena_za objednávku"),
];

static ORDER_TAG_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ORDER_TAGS.iter().copied().collect());

static ITEM_TAG_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ITEM_TAGS.iter().copied().collect());

static PARAMETERIZED_TAG_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| PARAMETERIZED_TAGS.iter().copied().collect());

static IGNORE_SET: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(IGNORE_PATTERNS).expect("ignore patterns are valid regexes"));

#[must_use]
pub fn is_order_tag(name: &str) -> bool {
    ORDER_TAG_SET.contains(name)
}

#[must_use]
pub fn is_item_tag(name: &str) -> bool {
    ITEM_TAG_SET.contains(name)
}

#[must_use]
pub fn is_parameterized_tag(name: &str) -> bool {
    PARAMETERIZED_TAG_SET.contains(name)
}

/// Whether bracketed text is a conditional comment or CSS selector rather
/// than a tag.
#[must_use]
pub fn is_ignored(name: &str) -> bool {
    IGNORE_SET.is_match(name)
}
