//! Storage adapters for the shortcut URL shortener.
//!
//! The service is isolated from persistence technology behind the
//! [`Repository`](shortcut_core::Repository) trait; this crate provides
//! the in-memory adapter.

pub mod memory;

pub use memory::InMemoryRepository;
