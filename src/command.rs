//! Command execution and orchestration for gitswift.
//!
//! One module per user-invokable operation. Each command validates its
//! inputs, runs the operation, and reports the outcome through the logger;
//! errors propagate to the caller instead of being swallowed.

/// Repository initialization.
pub mod init;

/// Token persistence.
pub mod save_token;

/// Idempotent repository scaffolding.
pub mod setup;

/// Shared request types.
pub mod types;

/// The documentation-update workflow.
pub mod update;
