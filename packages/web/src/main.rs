//! Campus Marketplace - Dioxus Web Application
//!
//! Browses listings from the marketplace REST backend: a filterable
//! dashboard and a detail page with a "Contact Seller" mail action.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! API_URL=http://localhost:8000 dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod contact;
mod pages;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{init_config, AppConfig};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,marketplace_web=debug,listings_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    init_config(AppConfig::from_env());

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
