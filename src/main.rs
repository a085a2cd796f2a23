//! WattScope Dashboard
//!
//! Browser front-end for home energy monitoring, built with Leptos (WASM).
//!
//! # Features
//!
//! - Device registry with an add-device dialog
//! - Per-device telemetry charts and 24h stat summaries
//! - Natural-language queries about energy usage
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to two REST services over HTTP/JSON: the telemetry
//! service (devices, per-device series and stats) and the chat service
//! (natural-language queries). Every request carries the session bearer token.

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
