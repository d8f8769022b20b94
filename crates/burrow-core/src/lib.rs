//! Core types and traits for the Burrow URL shortener.
//!
//! This crate provides the vocabulary shared by the generator, the storage
//! backends, the shortening service and the HTTP gateway.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{ShortenerError, StorageError};
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
