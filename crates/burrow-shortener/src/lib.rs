//! URL shortener service implementation.
//!
//! This crate wires a code [`Generator`](burrow_generator::Generator) to a
//! [`Repository`](burrow_core::Repository) behind the
//! [`Shortener`](burrow_core::Shortener) trait.

pub mod service;

pub use service::ShortenerService;
