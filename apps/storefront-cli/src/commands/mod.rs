//! # Session Commands Module
//!
//! Handlers behind every shell command.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product listing
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── coupon.rs    ◄─── Apply / drop coupon
//! └── checkout.rs  ◄─── Order summary
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin: "add p-lamp --qty 2"                                            │
//! │         │                                                               │
//! │         │ (clap parses the line)                                        │
//! │         ▼                                                               │
//! │  SessionCommand::Add { id: "p-lamp", qty: 2 }                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn add_to_cart(                                                        │
//! │      session: &mut CartSession,   ◄── the state it needs, nothing more │
//! │      catalog: &Catalog,                                                 │
//! │      product_id: &str,                                                  │
//! │      quantity: Option<i64>,                                             │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON or text rendering)                                      │
//! │         ▼                                                               │
//! │  stdout                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod coupon;
