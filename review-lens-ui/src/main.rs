//! Review Lens Dashboard
//!
//! Customer-review sentiment dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - KPI summary, sentiment chart and aspect breakdown
//! - Text, date and sentiment filters over the loaded reviews
//! - Ask-your-data panel with preset questions
//! - Light/dark theme toggle
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Filtering, aggregation and ask sequencing come from the
//! `review-lens` crate; this crate only fetches, dispatches and draws.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
