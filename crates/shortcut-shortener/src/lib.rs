//! URL shortener service implementation.
//!
//! This crate implements the resolution protocol on top of a
//! [`Repository`](shortcut_core::Repository) store and a candidate
//! [`Generator`](shortcut_generator::Generator). Core types are
//! re-exported from `shortcut_core`.

pub mod config;
pub mod service;

pub use config::DigestConfig;
pub use service::ShortenerService;
