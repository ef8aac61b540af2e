//! # Text Rendering
//!
//! Human-readable output for `--format text`. JSON output bypasses this
//! module and serializes the response types directly.
//!
//! ## Cart Display
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Desk Lamp (p-lamp)        2 x ₹1000.00 -20%            ₹1600.00        │
//! │  ─────────────────────────────────────────────────────────────────     │
//! │  Subtotal                                               ₹1600.00        │
//! │  Shipping                                                ₹500.00        │
//! │  Coupon DISCOUNT10                                      -₹160.00        │
//! │  Total                                                  ₹1940.00        │
//! │  Add ₹3400.00 more for free shipping                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! All amounts pass through [`StoreConfig::format_currency`], the only
//! place money is rounded for display.

use storefront_core::{CartLineItem, CartTotals, Money, OrderSummary, Percent};

use crate::commands::catalog::ProductDto;
use crate::commands::coupon::CouponResponse;
use crate::error::ApiError;
use crate::state::{CartResponse, StoreConfig};

const RULE: &str = "------------------------------------------------------------";

pub fn products(config: &StoreConfig, products: &[ProductDto]) -> String {
    if products.is_empty() {
        return "No products available".to_string();
    }

    products
        .iter()
        .map(|p| product_line(config, p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn product_line(config: &StoreConfig, p: &ProductDto) -> String {
    let mut line = format!(
        "{:<14} {:<24} {:>12}",
        p.id,
        p.name,
        config.format_currency(p.effective_price)
    );
    if let Some(percent) = p.discount_percent.filter(|d| !d.is_zero()) {
        line.push_str(&format!(
            "  (was {}, {}% off)",
            config.format_currency(p.price),
            percent.value()
        ));
    }
    if !p.in_stock {
        line.push_str("  [out of stock]");
    }
    line
}

pub fn cart(config: &StoreConfig, cart: &CartResponse) -> String {
    if cart.items.is_empty() {
        return match &cart.totals.coupon_code {
            Some(code) => format!("Cart is empty (coupon {} applied)", code),
            None => "Cart is empty".to_string(),
        };
    }

    let mut lines: Vec<String> = cart.items.iter().map(|item| line_item(config, item)).collect();
    lines.push(RULE.to_string());
    lines.push(totals(config, &cart.totals));
    lines.join("\n")
}

fn line_item(config: &StoreConfig, item: &CartLineItem) -> String {
    let label = format!("{} ({})", item.name, item.id);
    format!(
        "{:<34} {:>3} x {:>10}{:<6} {:>12}",
        label,
        item.quantity,
        config.format_currency(item.unit_price),
        discount_tag(item.discount_percent),
        config.format_currency(item.line_total())
    )
}

fn discount_tag(discount: Option<Percent>) -> String {
    match discount {
        Some(d) if !d.is_zero() => format!(" -{}%", d.value()),
        _ => String::new(),
    }
}

/// One `label  amount` row of a totals block.
fn row(label: &str, value: &str) -> String {
    format!("{:<20} {:>14}", label, value)
}

fn coupon_row(config: &StoreConfig, code: &str, discount: Money) -> String {
    row(&format!("Coupon {}", code), &config.format_currency(-discount))
}

pub fn totals(config: &StoreConfig, totals: &CartTotals) -> String {
    let shipping = if totals.shipping.is_zero() {
        "FREE".to_string()
    } else {
        config.format_currency(totals.shipping)
    };

    let mut lines = vec![
        row("Subtotal", &config.format_currency(totals.subtotal)),
        row("Shipping", &shipping),
    ];
    if let Some(code) = &totals.coupon_code {
        lines.push(coupon_row(config, code, totals.discount));
    }
    lines.push(row("Total", &config.format_currency(totals.grand_total)));

    if totals.amount_to_free_shipping.is_positive() {
        lines.push(format!(
            "Add {} more for free shipping",
            config.format_currency(totals.amount_to_free_shipping)
        ));
    }
    lines.join("\n")
}

pub fn coupon(config: &StoreConfig, response: &CouponResponse) -> String {
    let headline = match (&response.coupon, response.applied) {
        (Some(coupon), true) => format!(
            "Coupon {} applied: {}% off",
            coupon.code,
            coupon.percent.value()
        ),
        (Some(coupon), false) => format!(
            "Coupon not recognised: {} (keeping {})",
            response.requested_code, coupon.code
        ),
        (None, _) => format!("Coupon not recognised: {}", response.requested_code),
    };
    format!("{}\n{}", headline, totals(config, &response.totals))
}

pub fn order(config: &StoreConfig, order: &OrderSummary) -> String {
    let mut lines = vec![format!(
        "Order {} placed at {}",
        order.order_id,
        order.placed_at.to_rfc3339()
    )];
    lines.extend(order.lines.iter().map(|line| {
        format!(
            "  {:<30} {:>3} x {:>10}   {:>12}",
            line.name,
            line.quantity,
            config.format_currency(line.unit_price),
            config.format_currency(line.line_total)
        )
    }));
    lines.push(row("Subtotal", &config.format_currency(order.subtotal)));
    lines.push(row("Shipping", &config.format_currency(order.shipping)));
    if let Some(code) = &order.coupon_code {
        lines.push(coupon_row(config, code, order.discount));
    }
    lines.push(row("Amount due", &config.format_currency(order.amount_due)));
    lines.join("\n")
}

pub fn error(err: &ApiError) -> String {
    format!("error [{}]: {}", err.code.as_str(), err.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{cart as cart_cmd, catalog as catalog_cmd, coupon as coupon_cmd};
    use crate::state::{CartSession, Catalog};

    fn lamp_session() -> CartSession {
        let mut session = CartSession::new();
        cart_cmd::add_to_cart(&mut session, &Catalog::builtin(), "p-lamp", Some(2)).unwrap();
        session
    }

    #[test]
    fn test_render_empty_cart() {
        let session = CartSession::new();
        let text = cart(&StoreConfig::default(), &session.snapshot());
        assert_eq!(text, "Cart is empty");
    }

    #[test]
    fn test_render_cart_with_coupon() {
        let mut session = lamp_session();
        session.apply_coupon("DISCOUNT10");

        let text = cart(&StoreConfig::default(), &session.snapshot());
        assert!(text.contains("Desk Lamp (p-lamp)"));
        assert!(text.contains("-20%"));
        assert!(text.contains("₹1600.00"));
        assert!(text.contains("₹500.00"));
        assert!(text.contains("Coupon DISCOUNT10"));
        assert!(text.contains("-₹160.00"));
        assert!(text.contains("₹1940.00"));
        assert!(text.contains("Add ₹3400.00 more for free shipping"));
    }

    #[test]
    fn test_render_free_shipping() {
        let mut session = CartSession::new();
        cart_cmd::add_to_cart(&mut session, &Catalog::builtin(), "p-speaker", Some(2)).unwrap();

        let text = totals(&StoreConfig::default(), &session.totals());
        assert!(text.contains("FREE"));
        assert!(!text.contains("more for free shipping"));
    }

    #[test]
    fn test_render_unknown_coupon() {
        let mut session = lamp_session();
        let response = coupon_cmd::apply_coupon(&mut session, "WRONG");
        let text = coupon(&StoreConfig::default(), &response);
        assert!(text.starts_with("Coupon not recognised: WRONG"));
    }

    #[test]
    fn test_render_products_marks_out_of_stock() {
        let listing = catalog_cmd::list_products(&Catalog::builtin());
        let text = products(&StoreConfig::default(), &listing);
        let keyboard = text.lines().find(|l| l.starts_with("p-keyboard")).unwrap();
        assert!(keyboard.contains("[out of stock]"));
        assert!(keyboard.contains("15% off"));
    }

    #[test]
    fn test_render_order() {
        let mut session = lamp_session();
        session.apply_coupon("DISCOUNT10");
        let summary = crate::commands::checkout::checkout(&mut session).unwrap();

        let text = order(&StoreConfig::default(), &summary);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with(&format!("Order {} placed at", summary.order_id)));
        assert!(lines[1].contains("Desk Lamp"));
        assert!(lines[1].ends_with("₹1600.00"));
        assert!(text.contains("-₹160.00"));
        assert!(lines.last().unwrap().starts_with("Amount due"));
        assert!(lines.last().unwrap().ends_with("₹1940.00"));
    }

    #[test]
    fn test_render_error() {
        let err = ApiError::not_found("Product", "p-x");
        assert_eq!(error(&err), "error [NOT_FOUND]: Product not found: p-x");
    }
}
