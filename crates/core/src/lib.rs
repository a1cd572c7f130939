//! Core types and shared functionality for the lightbox caption formatter.
//!
//! This crate provides:
//! - The CMS document model and facet-based kind dispatch
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod document;
pub mod error;

pub use config::AppConfig;
pub use document::{DocKind, Document, PictureView, Properties};
pub use error::Error;
