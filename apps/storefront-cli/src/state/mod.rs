//! # State Module
//!
//! Session state for the storefront shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Session loop                               │   │
//! │  │  owns: CartSession (mutable), Catalog + StoreConfig (read-only) │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CartSession  │  │   Catalog    │  │   StoreConfig    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  CartState   │  │  Vec<        │  │  store_name      │              │
//! │  │  + coupon    │  │   Product>   │  │  currency        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  Single-threaded: state is passed by reference, never shared.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::{CartResponse, CartSession};
pub use catalog::Catalog;
pub use config::StoreConfig;
