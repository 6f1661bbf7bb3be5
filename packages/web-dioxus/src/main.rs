//! Provider Match - Dioxus Fullstack Web Application
//!
//! Single-page search form for matching patients to mental health
//! providers. The actual matching runs behind an external search service;
//! this app holds the filter state, builds the query payload, and renders
//! the returned provider cards.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```
//!
//! The search endpoint URL is read from `SEARCH_API_URL` on the server
//! side, defaulting to `http://127.0.0.1:8000/providers/search`.

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod routes;
mod search;
mod state;
mod types;
mod vocab;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
