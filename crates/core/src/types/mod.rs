//! Core types for Dukkan.
//!
//! This module provides type-safe wrappers for checkout concepts.

pub mod id;
pub mod method;
pub mod money;
pub mod order;

pub use id::*;
pub use method::{DeliveryMethod, PaymentMethod};
pub use money::{Money, format_money};
pub use order::{CartLine, OrderChoices, OrderError, SelectedOption, ShippingMethod};
