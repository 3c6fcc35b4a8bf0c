use super::*;
use crate::cart::{Cart, Selection};

fn summary() -> CheckoutSummary {
    let mut cart = Cart::new();
    let bondi = Selection {
        name: "HOKA Bondi 8".into(),
        price: Money::from_baht(6490),
        size: "41".into(),
        color: "black".into(),
        image: String::new(),
    };
    cart.add(bondi.clone());
    cart.add(bondi);
    cart.add(Selection {
        name: "NB 327".into(),
        price: Money::from_baht(3600),
        size: "40".into(),
        color: "cream".into(),
        image: String::new(),
    });
    cart.summary().unwrap()
}

// =============================================================
// Locale
// =============================================================

#[test]
fn default_locale_is_thai() {
    assert_eq!(Locale::default(), Locale::Thai);
}

#[test]
fn from_lang_detects_english() {
    assert_eq!(Locale::from_lang("en"), Locale::English);
    assert_eq!(Locale::from_lang("en-US"), Locale::English);
    assert_eq!(Locale::from_lang("EN_gb"), Locale::English);
}

#[test]
fn from_lang_falls_back_to_thai() {
    assert_eq!(Locale::from_lang("th"), Locale::Thai);
    assert_eq!(Locale::from_lang(""), Locale::Thai);
    assert_eq!(Locale::from_lang("fr"), Locale::Thai);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn item_details_per_locale() {
    assert_eq!(Locale::Thai.item_details("40", "black"), "ไซส์: 40, สี: black");
    assert_eq!(Locale::English.item_details("40", "black"), "Size: 40, Color: black");
}

#[test]
fn feedback_labels_start_with_check() {
    for locale in [Locale::Thai, Locale::English] {
        assert!(locale.added_feedback().starts_with('✓'));
        assert!(locale.cleared_feedback().starts_with('✓'));
    }
}

#[test]
fn thai_confirmation_lists_lines_and_totals() {
    let text = Locale::Thai.checkout_confirmation(&summary());
    assert!(text.starts_with("รายการสั่งซื้อ:\n\n"));
    assert!(text.contains("HOKA Bondi 8 (ไซส์: 41, สี: black)\nจำนวน: 2 x ฿6,490 = ฿12,980\n"));
    assert!(text.contains("NB 327 (ไซส์: 40, สี: cream)\nจำนวน: 1 x ฿3,600 = ฿3,600\n"));
    assert!(text.contains("จำนวนสินค้า: 3 ชิ้น\nยอดรวม: ฿16,580"));
    assert!(text.ends_with("ต้องการสั่งซื้อสินค้าเหล่านี้ใช่หรือไม่?"));
}

#[test]
fn english_confirmation_lists_lines_and_totals() {
    let text = Locale::English.checkout_confirmation(&summary());
    assert!(text.contains("HOKA Bondi 8 (Size: 41, Color: black)\nQty: 2 x ฿6,490 = ฿12,980\n"));
    assert!(text.contains("Items: 3\nTotal: ฿16,580"));
}

#[test]
fn thanks_repeats_totals() {
    let text = Locale::Thai.checkout_thanks(&summary());
    assert!(text.starts_with("ขอบคุณสำหรับการสั่งซื้อ!"));
    assert!(text.contains("ยอดรวม: ฿16,580"));

    let text = Locale::English.checkout_thanks(&summary());
    assert!(text.contains("Total: ฿16,580"));
}
