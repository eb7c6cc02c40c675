//! Core of the SIBA instructional-material dashboard.
//!
//! This crate holds everything the dashboard computes: the dataset model, the derived-view
//! engine used by the stock and tracking pages, delivery-order numbering, form validation, the
//! stock status classifier and the in-memory session store that add/edit/delete operations
//! mutate. The Dioxus client in `main.rs` only renders what these modules return.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod provider;
pub mod util;

pub use config::Config;
pub use error::Error;
