use super::*;

#[test]
fn label_text_matches() {
    assert!(is_why_us_link(Some("Why Us"), Some("#")));
    assert!(is_why_us_link(Some("  Why Us  "), None));
}

#[test]
fn section_href_matches() {
    assert!(is_why_us_link(Some("ทำไมต้องเรา"), Some("#why-choose-us")));
}

#[test]
fn other_links_do_not_match() {
    assert!(!is_why_us_link(Some("Shop"), Some("#shop")));
    assert!(!is_why_us_link(None, None));
    assert!(!is_why_us_link(Some("why us"), Some("#why")));
}
