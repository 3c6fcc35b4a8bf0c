//! User-facing strings.
//!
//! The page ships in Thai with an English fallback. There is no translation
//! framework: each message is a literal per [`Locale`].

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use crate::cart::CheckoutSummary;
use crate::money::Money;

/// Language of the rendered copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Thai,
    English,
}

impl Locale {
    /// Pick a locale from a document `lang` attribute (`"th"`, `"en-US"`, ...).
    ///
    /// Anything that is not English falls back to Thai.
    #[must_use]
    pub fn from_lang(lang: &str) -> Self {
        let primary = lang.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") { Self::English } else { Self::Thai }
    }

    /// Row detail line: size and color of a line item.
    #[must_use]
    pub fn item_details(self, size: &str, color: &str) -> String {
        match self {
            Self::Thai => format!("ไซส์: {size}, สี: {color}"),
            Self::English => format!("Size: {size}, Color: {color}"),
        }
    }

    /// Add-to-cart button label while the "added" flash is showing.
    #[must_use]
    pub fn added_feedback(self) -> &'static str {
        match self {
            Self::Thai => "✓ เพิ่มแล้ว!",
            Self::English => "✓ Added!",
        }
    }

    /// Clear-cart button label while the "cleared" flash is showing.
    #[must_use]
    pub fn cleared_feedback(self) -> &'static str {
        match self {
            Self::Thai => "✓ ล้างแล้ว!",
            Self::English => "✓ Cleared!",
        }
    }

    /// Notice shown when checkout is pressed with nothing in the cart.
    #[must_use]
    pub fn empty_cart_notice(self) -> &'static str {
        match self {
            Self::Thai => "ตะกร้าของคุณว่างเปล่า!",
            Self::English => "Your cart is empty!",
        }
    }

    /// Notice shown when the confirmation dialog itself fails.
    #[must_use]
    pub fn checkout_failed_notice(self) -> &'static str {
        match self {
            Self::Thai => "เกิดข้อผิดพลาดในระหว่างการสั่งซื้อ กรุณาลองใหม่อีกครั้ง",
            Self::English => "Something went wrong during checkout. Please try again.",
        }
    }

    /// The confirmation question listing every line, unit count and total.
    #[must_use]
    pub fn checkout_confirmation(self, summary: &CheckoutSummary) -> String {
        let mut out = String::from(match self {
            Self::Thai => "รายการสั่งซื้อ:\n\n",
            Self::English => "Order summary:\n\n",
        });

        for line in &summary.lines {
            let (size, color, qty) = match self {
                Self::Thai => ("ไซส์", "สี", "จำนวน"),
                Self::English => ("Size", "Color", "Qty"),
            };
            out.push_str(&format!(
                "{} ({size}: {}, {color}: {})\n{qty}: {} x {} = {}\n\n",
                line.name,
                line.size,
                line.color,
                line.quantity,
                line.price,
                line.line_total()
            ));
        }

        out.push_str(&self.totals(summary.unit_count, summary.total));
        out.push_str(match self {
            Self::Thai => "\n\nต้องการสั่งซื้อสินค้าเหล่านี้ใช่หรือไม่?",
            Self::English => "\n\nDo you want to place this order?",
        });
        out
    }

    /// The thank-you notice after a confirmed checkout.
    #[must_use]
    pub fn checkout_thanks(self, summary: &CheckoutSummary) -> String {
        let totals = self.totals(summary.unit_count, summary.total);
        match self {
            Self::Thai => format!("ขอบคุณสำหรับการสั่งซื้อ!\n\n{totals}\n\nคำสั่งซื้อของคุณจะได้รับการดำเนินการในไม่ช้า"),
            Self::English => format!("Thank you for your order!\n\n{totals}\n\nYour order will be processed shortly."),
        }
    }

    fn totals(self, unit_count: u32, total: Money) -> String {
        match self {
            Self::Thai => format!("จำนวนสินค้า: {unit_count} ชิ้น\nยอดรวม: {total}"),
            Self::English => format!("Items: {unit_count}\nTotal: {total}"),
        }
    }
}
