use blmail_tags::extract_tags;
use blmail_tags::item_list_content;
use blmail_tags::validate_item_list;
use blmail_tags::validate_tag_names;
use blmail_tags::validate_tags;
use blmail_tags::vocabulary::ITEM_TAGS;
use blmail_tags::vocabulary::ORDER_TAGS;
use blmail_tags::TagError;

const ROW: &str = "[seznam_položek(<td>[i_sku] [i_name] [i_quantity] [i_price] [i_currency]</td>)]";

#[test]
fn extraction_is_idempotent() {
    let html = "<p>[jméno] [příjmení]</p>[seznam_položek(<td>[i_name]</td>)]<p>[jméno]</p>";
    let first = extract_tags(html);
    let joined: String = first.iter().map(|tag| format!("[{tag}]")).collect();
    let mut again = extract_tags(&joined);
    let mut first_sorted = first.clone();
    first_sorted.sort();
    again.sort();
    assert_eq!(first_sorted, again);
}

#[test]
fn repeated_tag_counts_once() {
    let tags = extract_tags("[jméno] [jméno] [jméno]");
    assert_eq!(tags, vec!["jméno".to_string()]);
}

#[test]
fn whole_order_vocabulary_is_valid() {
    let check = validate_tag_names(ORDER_TAGS);
    assert!(check.valid);
    assert!(check.unknown.is_empty());
}

#[test]
fn item_prefix_never_unknown() {
    let names = ["i_name", "i_not_a_real_tag", "i_", "i_jméno"];
    assert!(validate_tag_names(&names).unknown.is_empty());
}

#[test]
fn item_vocabulary_inside_row_is_valid() {
    let row: String = ITEM_TAGS.iter().map(|tag| format!("<td>[{tag}]</td>")).collect();
    let html = format!("[seznam_položek({row})]");
    assert!(validate_item_list(&html).valid);
}

#[test]
fn row_content_extraction() {
    assert_eq!(item_list_content("<p>[jméno]</p>"), None);
    assert_eq!(
        item_list_content(ROW),
        Some("<td>[i_sku] [i_name] [i_quantity] [i_price] [i_currency]</td>")
    );
}

#[test]
fn documented_row_is_valid() {
    let check = validate_item_list(ROW);
    assert!(check.valid);
    assert!(check.errors.is_empty());
}

#[test]
fn row_without_name_mentions_it() {
    let check = validate_item_list("[seznam_položek(<td>[i_sku] [i_price]</td>)]");
    assert!(!check.valid);
    assert!(check.errors.iter().any(|e| e.to_string().contains("i_name")));
}

#[test]
fn row_with_unlisted_tag_names_it() {
    let check = validate_item_list("[seznam_položek(<td>[i_name] [i_invalid_tag]</td>)]");
    assert!(!check.valid);
    insta::assert_snapshot!(
        check.errors[0].to_string(),
        @"Invalid item-level tag: [i_invalid_tag]. Valid tags are: i_ord, i_id, i_variant_id, i_sku, i_ean, p_location, i_name, i_quantity, i_atributy, i_price, i_currency, i_auction_nr, i_source, p_stop"
    );
}

#[test]
fn report_combines_checks() {
    let html = format!(
        "<!--[if mso]><xml></xml><![endif]--><p>Dobrý den [jmeno], [neznamy_tag]</p>{ROW}<p>[číslo_objednávky]</p>"
    );
    let report = validate_tags(&html);

    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec![
            TagError::UnknownTag {
                name: "jmeno".to_string()
            },
            TagError::UnknownTag {
                name: "neznamy_tag".to_string()
            },
        ]
    );
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].code(), "T200");
    assert!(report.extracted_tags.contains(&"seznam_položek".to_string()));
    assert!(report.extracted_tags.contains(&"if mso".to_string()));
}

#[test]
fn unknown_and_item_errors_in_order() {
    let html = "<p>[bogus]</p>[seznam_položek(<td>[jméno]</td>)]";
    let report = validate_tags(html);
    let codes: Vec<_> = report.errors.iter().map(TagError::code).collect();
    assert_eq!(codes, vec!["T100", "T101", "T102"]);
}

#[test]
fn clean_template_is_valid() {
    let html = format!("<p>Dobrý den [jméno] [příjmení]</p><table>{ROW}</table><p>[cena_za objednávku] [měna]</p>");
    let report = validate_tags(&html);
    assert!(report.valid, "{:?}", report.errors);
    assert!(report.warnings.is_empty());
}
