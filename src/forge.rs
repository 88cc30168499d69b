//! Remote-hosting client used to file update issues.

/// Connection coordinates derived from the local origin remote.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Common trait for hosting platforms that accept issues.
pub mod traits;

/// Issue composition and response types.
pub mod types;
