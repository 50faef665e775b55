use super::*;

fn entry(key: &str, value: &str) -> Config {
    Config { config_key: key.to_owned(), main_value: value.to_owned(), ..Config::default() }
}

#[test]
fn uses_numeric_entry() {
    let configs = vec![entry("site_name", "Admin"), entry("pagination_limit", " 25 ")];
    assert_eq!(resolve_page_size(&configs, COMPACT_PAGE_SIZE), 25);
}

#[test]
fn falls_back_when_absent_or_invalid() {
    assert_eq!(resolve_page_size(&[], 5), 5);
    assert_eq!(resolve_page_size(&[entry("pagination_limit", "ten")], 5), 5);
    assert_eq!(resolve_page_size(&[entry("pagination_limit", "0")], 10), 10);
    assert_eq!(resolve_page_size(&[entry("pagination_limit", "-3")], 10), 10);
}
