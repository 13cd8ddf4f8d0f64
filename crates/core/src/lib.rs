//! Dukkan Core - Shared types and the order message encoder.
//!
//! This crate is used by every Dukkan component:
//! - `storefront` - Checkout hand-off service
//! - `cli` - Command-line tools for previewing order messages
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no logging. Everything here is deterministic and safe to call from any
//! thread.
//!
//! # Modules
//!
//! - [`types`] - Cart lines, checkout choices, delivery/payment methods, KWD money
//! - [`message`] - Order message composition, narrow escaping, WhatsApp links

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod message;
pub mod types;

pub use message::{
    EncodedOrderMessage, WhatsAppPhone, compose_order_message, encode_order_message,
    whatsapp_link,
};
pub use types::*;
