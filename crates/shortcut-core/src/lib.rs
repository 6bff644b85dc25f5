//! Core types and traits for the shortcut URL shortener.
//!
//! This crate provides the shared domain types, the store trait and the
//! error taxonomy used by the generator, storage and service crates.

pub mod error;
pub mod mapping;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{Result, ShortenerError, StorageError, StorageResult};
pub use mapping::{Mapping, ShortLink};
pub use repository::Repository;
pub use shortcode::ShortCode;
pub use shortener::Shortener;
