//! Dukkan Storefront library.
//!
//! This crate provides the checkout hand-off service as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use routes::app;
