//! HTTP API
//!
//! Talks to the review backend from the browser.

pub mod client;

pub use client::{ask, fetch_reviews};
