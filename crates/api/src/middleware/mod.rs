//! Axum middleware: authentication extractor.

pub mod auth;
