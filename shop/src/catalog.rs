//! Product color images.
//!
//! Each shoe card on the page carries a `data-shoe` key and a row of color
//! swatches (`data-color`). Picking a swatch swaps the card image to the path
//! listed here. Combinations that are not listed leave the image alone.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One product's color variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Value of the card's `data-shoe` attribute.
    pub key: &'static str,
    /// `(color key, image path)` pairs in swatch order.
    pub images: &'static [(&'static str, &'static str)],
}

impl Product {
    /// Image path for `color`, if this product has one.
    #[must_use]
    pub fn image(&self, color: &str) -> Option<&'static str> {
        self.images.iter().find(|(c, _)| *c == color).map(|(_, path)| *path)
    }
}

pub const PRODUCTS: &[Product] = &[
    Product {
        key: "bondi8",
        images: &[
            ("black", "image/shoe/HOKA Bondi8 6490/HK_Bondi8_Black.png"),
            ("cream", "image/shoe/HOKA Bondi8 6490/HK_Bondi8_Cream.png"),
            ("cyan", "image/shoe/HOKA Bondi8 6490/HK_Bondi8_Cyan.png"),
            ("white", "image/shoe/HOKA Bondi8 6490/HK_Bondi8_White.png"),
        ],
    },
    Product {
        key: "bondi9-wide",
        images: &[
            ("black", "image/shoe/HOKA Bondi9 Wide 6990/HK_Bondi9Wide_Black.png"),
            ("blue", "image/shoe/HOKA Bondi9 Wide 6990/HK_Bondi9Wide_Blue.png"),
            ("cyan", "image/shoe/HOKA Bondi9 Wide 6990/HK_Bondi9Wide_Cyan.png"),
            ("gold", "image/shoe/HOKA Bondi9 Wide 6990/HK_Bondi9Wide_Gold.png"),
        ],
    },
    Product {
        key: "nike-alphafly3",
        images: &[
            ("blue", "image/shoe/NIKE Alphafly 3  9400/Nike_Alphafly3_Blue.png"),
            ("green", "image/shoe/NIKE Alphafly 3  9400/Nike_Alphafly3_Green.png"),
            ("orange", "image/shoe/NIKE Alphafly 3  9400/Nike_Alphafly3_Orange.png"),
            ("white", "image/shoe/NIKE Alphafly 3  9400/Nike_Alphafly3_White.png"),
        ],
    },
    Product {
        key: "nb327",
        images: &[
            ("black", "image/shoe/NEW BALANCE 327  3600/NB_327_Black.png"),
            ("blue", "image/shoe/NEW BALANCE 327  3600/NB_327_Blue.png"),
            ("cream", "image/shoe/NEW BALANCE 327  3600/NB_327_Cream.png"),
            ("white", "image/shoe/NEW BALANCE 327  3600/NB_327_White.png"),
        ],
    },
    Product {
        key: "nb530",
        images: &[
            ("black", "image/shoe/NEW BALANCE 530  3900/NB_530_Black.png"),
            ("gray", "image/shoe/NEW BALANCE 530  3900/NB_530_Gray.png"),
            ("pink", "image/shoe/NEW BALANCE 530  3900/NB_530_Pink.png"),
            ("silver", "image/shoe/NEW BALANCE 530  3900/NB_530_Silver.png"),
        ],
    },
    Product {
        key: "hopara2",
        images: &[
            ("black", "image/shoe/HOKA Hopara 2  5490/HK_Hopara2_Black.png"),
            ("cream", "image/shoe/HOKA Hopara 2  5490/HK_Hopara2_Cream.png"),
            ("gray", "image/shoe/HOKA Hopara 2  5490/HK_Hopara2_Gray.png"),
            ("green", "image/shoe/HOKA Hopara 2  5490/HK_Hopara2_Green.png"),
        ],
    },
    Product {
        key: "nike-pegasus41",
        images: &[
            ("black", "image/shoe/NIKE Pegasus 41  5200/Nike_Pegasus_Black.png"),
            ("blue", "image/shoe/NIKE Pegasus 41  5200/Nike_Pegasus_Blue.png"),
            ("gray", "image/shoe/NIKE Pegasus 41  5200/Nike_Pegasus_Gray.png"),
            ("pink", "image/shoe/NIKE Pegasus 41  5200/Nike_Pegasus_Pink.png"),
        ],
    },
    Product {
        key: "nike-vomero18",
        images: &[
            ("black", "image/shoe/NIKE Vomero 18  5500/Nike_Vomero18_Black.png"),
            ("blue", "image/shoe/NIKE Vomero 18  5500/Nike_Vomero18_Blue.png"),
            ("cyan", "image/shoe/NIKE Vomero 18  5500/Nike_Vomero18_Cyan.png"),
        ],
    },
    Product {
        key: "kawana",
        images: &[
            ("black", "image/shoe/HOKA Kawana  5490/HK_Kawana_Black.png"),
            ("blue", "image/shoe/HOKA Kawana  5490/HK_Kawana_Blue.png"),
            ("gray", "image/shoe/HOKA Kawana  5490/HK_Kawana_Gray.png"),
            ("white", "image/shoe/HOKA Kawana  5490/HK_Kawana_White.png"),
        ],
    },
    Product {
        key: "mach6",
        images: &[
            ("cyan", "image/shoe/HOKA Mach 6  5990/HK_Mach6_Cyan.png"),
            ("green", "image/shoe/HOKA Mach 6  5990/HK_Mach6_Green.png"),
            ("white", "image/shoe/HOKA Mach 6  5990/HK_Mach6_White.png"),
            ("yellow", "image/shoe/HOKA Mach 6  5990/HK_Mach6_Yellow.png"),
        ],
    },
    Product {
        key: "rincon4-wide",
        images: &[
            ("black", "image/shoe/HOKA Rincon 4 Wide 4990/HK_Rincon4_Black.png"),
            ("blue", "image/shoe/HOKA Rincon 4 Wide 4990/HK_Rincon4_Blue.png"),
            ("cream", "image/shoe/HOKA Rincon 4 Wide 4990/HK_Rincon4_Cream.png"),
            ("white", "image/shoe/HOKA Rincon 4 Wide 4990/HK_Rincon4_White.png"),
        ],
    },
    // Only one photo exists; every swatch shows it.
    Product {
        key: "columbia",
        images: &[
            ("brown", "image/shoe/COLUMBIA.png"),
            ("black", "image/shoe/COLUMBIA.png"),
            ("grey", "image/shoe/COLUMBIA.png"),
        ],
    },
];

/// Look up a product by its `data-shoe` key.
#[must_use]
pub fn product(key: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.key == key)
}

/// Image path for a (product, color) pair, or `None` if the pair is unknown.
#[must_use]
pub fn image_for(product_key: &str, color: &str) -> Option<&'static str> {
    product(product_key).and_then(|p| p.image(color))
}
