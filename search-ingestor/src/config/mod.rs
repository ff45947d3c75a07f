//! Configuration for the search ingestor.

mod dependencies;

pub use dependencies::Dependencies;
