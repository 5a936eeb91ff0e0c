//! Domain-specific error types for the transport layer.
//!
//! All fallible operations return `Result<T, TransportError>`.
//! Steady-state delivery failures are deliberately *not* errors —
//! a dropped frame surfaces as [`SendOutcome::Dropped`] plus a log
//! event, never as an `Err`. Setup is strict, delivery is best-effort.
//!
//! [`SendOutcome::Dropped`]: crate::plugin::SendOutcome::Dropped

use thiserror::Error;

/// The canonical error type for transport setup and handle misuse.
#[derive(Debug, Error)]
pub enum TransportError {
    // ── Configuration Errors ─────────────────────────────────────
    /// The destination address option was absent or empty.
    #[error("destination address missing or empty")]
    MissingAddress,

    /// The destination address neither parsed as an IP literal nor
    /// resolved to one.
    #[error("invalid destination address: {0}")]
    InvalidAddress(String),

    /// The requested transport backend does not exist.
    #[error("unknown transport kind: {0}")]
    UnknownKind(String),

    // ── Resource Errors ──────────────────────────────────────────
    /// The OS refused to create or bind the datagram socket.
    #[error("socket creation failed: {0}")]
    Socket(#[from] std::io::Error),

    // ── Handle Errors ────────────────────────────────────────────
    /// A send was attempted through a slot with no installed
    /// transport (never initialized, or already destroyed).
    #[error("transport not initialized")]
    NotInitialized,
}
