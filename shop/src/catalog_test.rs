use std::collections::HashSet;

use super::*;

#[test]
fn known_pair_resolves() {
    assert_eq!(image_for("bondi8", "cream"), Some("image/shoe/HOKA Bondi8 6490/HK_Bondi8_Cream.png"));
    assert_eq!(image_for("mach6", "yellow"), Some("image/shoe/HOKA Mach 6  5990/HK_Mach6_Yellow.png"));
}

#[test]
fn unknown_color_is_none() {
    assert_eq!(image_for("nike-vomero18", "white"), None);
}

#[test]
fn unknown_product_is_none() {
    assert_eq!(image_for("air-jordan", "black"), None);
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(image_for("BONDI8", "black"), None);
    assert_eq!(image_for("bondi8", "Black"), None);
}

#[test]
fn columbia_shares_one_image() {
    let paths: HashSet<_> = ["brown", "black", "grey"]
        .iter()
        .filter_map(|c| image_for("columbia", c))
        .collect();
    assert_eq!(paths.len(), 1);
}

#[test]
fn product_keys_are_unique() {
    let keys: HashSet<_> = PRODUCTS.iter().map(|p| p.key).collect();
    assert_eq!(keys.len(), PRODUCTS.len());
}

#[test]
fn every_product_has_colors_without_duplicates() {
    for p in PRODUCTS {
        assert!(!p.images.is_empty(), "{} has no colors", p.key);
        let colors: HashSet<_> = p.images.iter().map(|(c, _)| *c).collect();
        assert_eq!(colors.len(), p.images.len(), "{} repeats a color", p.key);
    }
}

#[test]
fn every_path_is_a_png_under_shoe_dir() {
    for p in PRODUCTS {
        for (_, path) in p.images {
            assert!(path.starts_with("image/shoe/"), "{path}");
            assert!(path.ends_with(".png"), "{path}");
        }
    }
}

#[test]
fn product_lookup() {
    let p = product("kawana").unwrap();
    assert_eq!(p.images.len(), 4);
    assert_eq!(p.image("gray"), Some("image/shoe/HOKA Kawana  5490/HK_Kawana_Gray.png"));
}
