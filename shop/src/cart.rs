//! In-memory shopping cart.
//!
//! DESIGN
//! ======
//! The cart is an ordered list of line items, one per distinct
//! (name, size, color) combination. The combination is folded into a
//! [`LineId`] that the rendered rows carry in `data-id`, so quantity and
//! removal controls can address a row without holding references into the
//! list. Quantities live in `1..=MAX_QUANTITY`; anything that would take a
//! line to zero removes it instead.
//!
//! Checkout never talks to anything external. It builds a summary, asks the
//! caller to confirm, and empties the cart on a yes.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::fmt;

use serde::Serialize;

use crate::consts::MAX_QUANTITY;
use crate::money::Money;

/// Error returned by cart operations that need at least one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// Checkout was requested with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// Deterministic key for a line item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Derive the key for a (name, size, color) combination.
    ///
    /// The parts are joined with `-`, every whitespace run collapses to a
    /// single `-`, and the result is lowercased: `("Shoe A", "40", "Black")`
    /// becomes `shoe-a-40-black`.
    #[must_use]
    pub fn derive(name: &str, size: &str, color: &str) -> Self {
        let joined = format!("{name}-{size}-{color}");
        let mut out = String::with_capacity(joined.len());
        let mut in_space = false;
        for ch in joined.chars() {
            if ch.is_whitespace() {
                if !in_space {
                    out.push('-');
                }
                in_space = true;
            } else {
                in_space = false;
                out.extend(ch.to_lowercase());
            }
        }
        Self(out)
    }

    /// Wrap an id read back from markup (`data-id`).
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the user picked on a product card when pressing "add to cart".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub price: Money,
    pub size: String,
    pub color: String,
    pub image: String,
}

/// One row of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub id: LineId,
    pub name: String,
    pub price: Money,
    pub size: String,
    pub color: String,
    /// Image `src` shown on the card when the item was added.
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Result of [`Cart::change_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now holds this quantity.
    Updated(u32),
    /// The line dropped to zero and was removed.
    Removed,
    /// No line with that id.
    Missing,
}

/// Snapshot of the cart taken when checkout starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub lines: Vec<CartItem>,
    pub unit_count: u32,
    pub total: Money,
}

/// How a non-empty checkout ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The user confirmed; the cart has been cleared.
    Confirmed(CheckoutSummary),
    /// The user backed out; the cart is untouched.
    Declined,
}

/// Ordered collection of line items with at most one row per [`LineId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn get(&self, id: &LineId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    // --- Mutations ---

    /// Add one unit of `selection`.
    ///
    /// An existing line with the same id gains one unit (capped at
    /// [`MAX_QUANTITY`]); otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, selection: Selection) -> &CartItem {
        let id = LineId::derive(&selection.name, &selection.size, &selection.color);

        if let Some(pos) = self.position(&id) {
            let item = &mut self.items[pos];
            item.quantity = (item.quantity + 1).min(MAX_QUANTITY);
            return &self.items[pos];
        }

        self.items.push(CartItem {
            id,
            name: selection.name,
            price: selection.price,
            size: selection.size,
            color: selection.color,
            image: selection.image,
            quantity: 1,
        });
        &self.items[self.items.len() - 1]
    }

    /// Adjust a line's quantity by `delta`.
    ///
    /// A result at or below zero removes the line; anything above
    /// [`MAX_QUANTITY`] is clamped.
    pub fn change_quantity(&mut self, id: &LineId, delta: i32) -> QuantityChange {
        let Some(pos) = self.position(id) else {
            return QuantityChange::Missing;
        };

        let next = i64::from(self.items[pos].quantity) + i64::from(delta);
        if next <= 0 {
            self.items.remove(pos);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(next.min(i64::from(MAX_QUANTITY))).unwrap_or(MAX_QUANTITY);
        self.items[pos].quantity = quantity;
        QuantityChange::Updated(quantity)
    }

    /// Remove a line. Returns `false` if no line had that id.
    pub fn remove(&mut self, id: &LineId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // --- Checkout ---

    /// Snapshot the cart for a checkout confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] when there is nothing to check out.
    pub fn summary(&self) -> Result<CheckoutSummary, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(CheckoutSummary { lines: self.items.clone(), unit_count: self.unit_count(), total: self.total() })
    }

    /// Run the confirmation flow.
    ///
    /// `confirm` sees the summary and decides; only a `true` answer clears the
    /// cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] without calling `confirm` when the cart
    /// is empty.
    pub fn checkout<F>(&mut self, confirm: F) -> Result<CheckoutOutcome, CartError>
    where
        F: FnOnce(&CheckoutSummary) -> bool,
    {
        let summary = self.summary()?;
        if !confirm(&summary) {
            return Ok(CheckoutOutcome::Declined);
        }
        self.clear();
        Ok(CheckoutOutcome::Confirmed(summary))
    }

    fn position(&self, id: &LineId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}
