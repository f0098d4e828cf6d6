//! Image upload service backed by S3

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Handler modules
pub mod handlers;

/// S3 media storage operations
pub mod media_storage;

/// HTTP server setup
pub mod server;

/// Application state
pub mod state;

/// Configuration and error types
pub mod types;
