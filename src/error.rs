//! # Error Types
//!
//! Error handling for the NRPE wire codec.
//!
//! This module defines all error variants that can occur while decoding,
//! authenticating, or building packets. Every failure is returned to the
//! immediate caller as a recoverable value; the codec never retries and
//! nothing here is fatal to the process. The caller decides whether to drop
//! the connection, log, or request retransmission.
//!
//! ## Error Categories
//! - **Validation Errors**: wrong record length, checksum mismatch
//! - **Payload Errors**: unusable command name, argument ceiling exceeded
//! - **I/O Errors**: surfaced through the framing codec when the underlying
//!   stream fails
//! - **Configuration Errors**: malformed codec configuration
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use nrpe_protocol::error::Result;
//! use nrpe_protocol::core::packet::Packet;
//! use tracing::warn;
//!
//! fn authenticate(buf: &[u8]) -> Result<Packet> {
//!     match Packet::validate(buf) {
//!         Ok(packet) => Ok(packet),
//!         Err(e) => {
//!             warn!(error = %e, "rejecting inbound record");
//!             Err(e)
//!         }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

// ProtocolError is the primary error type for all codec operations
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("invalid packet size: {actual} bytes, expected {expected}")]
    SizeMismatch { actual: usize, expected: usize },

    #[error("checksum mismatch: packet declared {declared:#010x}, computed {computed:#010x}")]
    ChecksumMismatch { declared: u32, computed: u32 },

    #[error("payload does not contain a command name")]
    EmptyCommand,

    #[error("too many command arguments: {count} (limit {limit})")]
    TooManyArguments { count: usize, limit: usize },

    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
