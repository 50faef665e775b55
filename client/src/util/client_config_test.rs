use super::*;

#[test]
fn normalize_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(" https://api.example.com// "), Some("https://api.example.com".to_owned()));
    assert_eq!(normalize_base_url("http://localhost:8080"), Some("http://localhost:8080".to_owned()));
}

#[test]
fn normalize_rejects_blank() {
    assert_eq!(normalize_base_url("   "), None);
    assert_eq!(normalize_base_url("/"), None);
}
