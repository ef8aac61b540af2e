//! # Storefront Shell Entry Point
//!
//! ```text
//! $ storefront --format json < script.txt
//! $ STOREFRONT_CURRENCY_SYMBOL='$' storefront --catalog shop.json
//! ```
//!
//! The actual setup is in lib.rs for better testability.

fn main() -> anyhow::Result<()> {
    storefront_cli::run()
}
