//! Interface definitions for the ingest provider.
//!
//! This module defines the abstract `IngestProvider` trait that allows
//! for dependency injection and swappable search backend implementations.

mod ingest_provider;

pub use ingest_provider::IngestProvider;
