//! # Core Codec Components
//!
//! Packet layout, integrity checking, and stream framing.
//!
//! This module is the foundation of the protocol: the fixed binary record,
//! the CRC-32 variant that authenticates it, and a codec that frames a byte
//! stream into validated records.
//!
//! ## Components
//! - **Crc32**: table-driven checksum engine
//! - **Packet**: fixed 1036-byte record with explicit layout
//! - **Codec**: tokio codec for framing over byte streams
//!
//! ## Wire Format
//! ```text
//! [version(2)] [type(2)] [checksum(4)] [result_code(2)] [payload(1024)] [padding(2)]
//! ```
//!
//! ## Security
//! - Fixed record size: any other length is rejected before interpretation
//! - Checksum covers the full record, padding included, with the checksum
//!   field zeroed

pub mod codec;
pub mod crc32;
pub mod packet;
