//! # NRPE Protocol
//!
//! Wire codec core for the NRPE v2 monitoring-check protocol.
//!
//! The crate is a pure transform on byte buffers: it encodes check results
//! into fixed 1036-byte records, authenticates received records with the
//! protocol's CRC-32 variant, and extracts the embedded command/argument
//! payload. Transports (TCP/TLS socket loops), process orchestration, and
//! check execution live outside this crate.
//!
//! ## Components
//! - [`core::crc32`]: table-driven checksum engine
//! - [`core::packet`]: record layout, encoding, and validation
//! - [`core::codec`]: tokio codec for framing over byte streams
//! - [`protocol::command`]: query payload parsing
//! - [`protocol::response`]: response record construction
//!
//! ## Concurrency
//! The only process-wide state is the checksum lookup table, built once and
//! immutable afterward. Every operation is synchronous, performs no I/O,
//! and takes no locks, so the codec can be driven concurrently from
//! independent connections.
//!
//! ## Quick Start
//! ```rust
//! use nrpe_protocol::{CheckRequest, Packet};
//!
//! # fn main() -> nrpe_protocol::Result<()> {
//! // inbound: authenticate, then interpret
//! let wire = Packet::query("check_disk!/!90!95").to_signed_bytes();
//! let packet = Packet::validate(&wire)?;
//! let request = CheckRequest::parse(&packet.payload)?;
//! assert_eq!(request.command, "check_disk");
//! assert_eq!(request.args, ["/", "90", "95"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use crate::core::codec::PacketCodec;
pub use crate::core::packet::{CheckStatus, Packet, PacketKind, PacketVersion};
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::command::CheckRequest;
pub use crate::protocol::response::{encode_response, CheckResult};
