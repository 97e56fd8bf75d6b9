//! # Nightly Report
//!
//! What the binary prints: every day's stock and, when orders were
//! configured, the priced demo cart.
//!
//! ## Text Layout
//! ```text
//! -------- day 0 --------
//! name, sellIn, quality
//! +5 Dexterity Vest, 10, 20
//! Aged Brie, 2, 0
//!
//! -------- day 1 --------
//! ...
//!
//! -------- cart (EUR) --------
//! Aged Brie x 12 @ 8.00 -> 6.84 = 82.08
//! discounts: bulk, seasonal
//! items: 12, subtotal: 96.00, total: 82.08
//! ```

use std::fmt::Write;

use chrono::{DateTime, Utc};
use gilded_core::{Cart, CartSummary, CurrencyCode};
use serde::Serialize;

use crate::error::NightlyResult;
use crate::run::DaySnapshot;

#[derive(Debug, Clone, Serialize)]
pub struct NightlyReport {
    pub generated_at: DateTime<Utc>,
    pub currency: CurrencyCode,
    pub days: Vec<DaySnapshot>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<CartSummary>,
}

impl NightlyReport {
    pub fn new(currency: CurrencyCode, days: Vec<DaySnapshot>) -> Self {
        NightlyReport {
            generated_at: Utc::now(),
            currency,
            days,
            cart: None,
        }
    }

    /// Attaches a cart summary. Empty carts are left out of the report.
    pub fn with_cart(mut self, cart: &Cart) -> Self {
        self.cart = (!cart.is_empty()).then(|| CartSummary::from(cart));
        self
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> NightlyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering, one block per day.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for day in &self.days {
            // Writing into a String cannot fail
            let _ = writeln!(out, "-------- day {} --------", day.day);
            let _ = writeln!(out, "name, sellIn, quality");
            for item in &day.items {
                let _ = writeln!(out, "{}, {}, {}", item.name, item.sell_in, item.quality);
            }
            out.push('\n');
        }

        if let Some(cart) = &self.cart {
            let _ = writeln!(out, "-------- cart ({}) --------", cart.currency);
            for line in &cart.lines {
                let _ = writeln!(
                    out,
                    "{} x {} @ {} -> {} = {}",
                    line.name,
                    line.amount,
                    line.unit_price,
                    line.discounted_unit_price,
                    line.line_total()
                );
            }
            let _ = writeln!(out, "discounts: {}", cart.discounts.join(", "));
            let _ = writeln!(
                out,
                "items: {}, subtotal: {}, total: {}",
                cart.total_quantity, cart.subtotal, cart.total_price
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::ItemSnapshot;
    use gilded_core::{Item, ItemKind, Money};

    fn one_day() -> Vec<DaySnapshot> {
        vec![DaySnapshot {
            day: 0,
            items: vec![ItemSnapshot {
                name: "Aged Brie".into(),
                kind: ItemKind::AgedBrie,
                sell_in: 2,
                quality: 0,
            }],
        }]
    }

    #[test]
    fn test_render_text_days_only() {
        let report = NightlyReport::new(CurrencyCode::default(), one_day());
        assert_eq!(
            report.render_text(),
            "-------- day 0 --------\nname, sellIn, quality\nAged Brie, 2, 0\n\n"
        );
    }

    #[test]
    fn test_render_text_with_cart() {
        let brie = Item::aged_brie("Aged Brie", 2, 0, Money::from_cents(800));
        let mut cart = Cart::new();
        cart.add_item(&brie, 12).unwrap();

        let text = NightlyReport::new(CurrencyCode::default(), one_day())
            .with_cart(&cart)
            .render_text();

        assert!(text.contains("-------- cart (EUR) --------"));
        assert!(text.contains("Aged Brie x 12 @ 8.00 -> 6.84 = 82.08"));
        assert!(text.contains("discounts: bulk, seasonal"));
        assert!(text.contains("items: 12, subtotal: 96.00, total: 82.08"));
    }

    #[test]
    fn test_empty_cart_is_omitted() {
        let report = NightlyReport::new(CurrencyCode::default(), one_day()).with_cart(&Cart::new());
        assert!(report.cart.is_none());

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(json.get("cart").is_none());
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["days"][0]["items"][0]["kind"], "aged_brie");
    }
}
