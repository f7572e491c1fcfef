//! NRPE v2 record layout, encoding, and validation.
//!
//! ## Wire Format
//! ```text
//! [version(2)] [type(2)] [checksum(4)] [result_code(2)] [payload(1024)] [padding(2)]
//! ```
//!
//! Every multi-byte integer is big-endian on the wire. The payload is
//! NUL-terminated text, zero-padded to 1024 bytes. The two trailing bytes
//! mirror the structure alignment padding of the reference C implementation;
//! the layout here is declared explicitly so the record is 1036 bytes on
//! every platform, and the padding must stay zero on the wire.
//!
//! ## Integrity
//! The checksum field covers the whole record with its own four bytes
//! zeroed. Padding is part of the hashed region, so preimage construction
//! operates on raw wire bytes rather than on the logical fields.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::crc32;
use crate::error::{ProtocolError, Result};

/// Fixed size of every record on the wire.
pub const PACKET_SIZE: usize = 1036;

/// Size of the payload region, including the terminating NUL.
pub const MAX_PAYLOAD_LENGTH: usize = 1024;

// Byte offsets of each field within the record.
const VERSION_OFFSET: usize = 0;
const TYPE_OFFSET: usize = 2;
const CHECKSUM_OFFSET: usize = 4;
const RESULT_CODE_OFFSET: usize = 8;
const PAYLOAD_OFFSET: usize = 10;
const PADDING_OFFSET: usize = PAYLOAD_OFFSET + MAX_PAYLOAD_LENGTH;

/// Protocol revisions a record may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum PacketVersion {
    V1 = 1,
    /// Version spoken by this crate when building responses.
    V2 = 2,
    V3 = 3,
}

impl PacketVersion {
    /// Wire value of this version
    pub fn wire(self) -> i16 {
        self as i16
    }

    /// Interpret a wire value
    pub fn from_wire(value: i16) -> Option<Self> {
        match value {
            1 => Some(PacketVersion::V1),
            2 => Some(PacketVersion::V2),
            3 => Some(PacketVersion::V3),
            _ => None,
        }
    }
}

/// Role of a record in the query/response exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum PacketKind {
    Query = 1,
    Response = 2,
}

impl PacketKind {
    /// Wire value of this packet type
    pub fn wire(self) -> i16 {
        self as i16
    }

    /// Interpret a wire value
    pub fn from_wire(value: i16) -> Option<Self> {
        match value {
            1 => Some(PacketKind::Query),
            2 => Some(PacketKind::Response),
            _ => None,
        }
    }
}

/// Exit states defined by the monitoring protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum CheckStatus {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl CheckStatus {
    /// Wire value of this status
    pub fn wire(self) -> i16 {
        self as i16
    }

    /// Interpret a wire value
    pub fn from_wire(value: i16) -> Option<Self> {
        match value {
            0 => Some(CheckStatus::Ok),
            1 => Some(CheckStatus::Warning),
            2 => Some(CheckStatus::Critical),
            3 => Some(CheckStatus::Unknown),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Critical => "CRITICAL",
            CheckStatus::Unknown => "UNKNOWN",
        }
    }
}

/// A decoded record.
///
/// `version`, `kind`, and `result_code` keep the raw host-order integers as
/// received: validation checks size and checksum only, so records carrying
/// out-of-range values still decode. Use [`PacketVersion::from_wire`],
/// [`PacketKind::from_wire`], and [`Packet::status`] to interpret them.
///
/// A packet is constructed transiently per message and never outlives the
/// exchange that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    pub version: i16,
    pub kind: i16,
    /// Checksum as declared on the wire (host order).
    pub checksum: u32,
    pub result_code: i16,
    /// Payload text up to the first NUL byte.
    pub payload: String,
}

impl Packet {
    /// Build a version-2 query carrying `payload`.
    pub fn query(payload: impl Into<String>) -> Self {
        Self {
            version: PacketVersion::V2.wire(),
            kind: PacketKind::Query.wire(),
            checksum: 0,
            result_code: 0,
            payload: payload.into(),
        }
    }

    /// Build a version-2 response with the given exit state.
    pub fn response(status: CheckStatus, payload: impl Into<String>) -> Self {
        Self {
            version: PacketVersion::V2.wire(),
            kind: PacketKind::Response.wire(),
            checksum: 0,
            result_code: status.wire(),
            payload: payload.into(),
        }
    }

    /// Interpret the result code field.
    pub fn status(&self) -> Option<CheckStatus> {
        CheckStatus::from_wire(self.result_code)
    }

    /// Decode a raw record without authenticating it.
    ///
    /// Integers are converted from network to host order; payload text stops
    /// at the first NUL byte (trailing padding is discarded for text
    /// purposes but still participates in checksum computation, which runs
    /// on the raw buffer). Fails with [`ProtocolError::SizeMismatch`] unless
    /// `buf` is exactly [`PACKET_SIZE`] bytes.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.len() != PACKET_SIZE {
            return Err(ProtocolError::SizeMismatch {
                actual: buf.len(),
                expected: PACKET_SIZE,
            });
        }

        let version = i16::from_be_bytes([buf[VERSION_OFFSET], buf[VERSION_OFFSET + 1]]);
        let kind = i16::from_be_bytes([buf[TYPE_OFFSET], buf[TYPE_OFFSET + 1]]);
        let checksum = u32::from_be_bytes([
            buf[CHECKSUM_OFFSET],
            buf[CHECKSUM_OFFSET + 1],
            buf[CHECKSUM_OFFSET + 2],
            buf[CHECKSUM_OFFSET + 3],
        ]);
        let result_code =
            i16::from_be_bytes([buf[RESULT_CODE_OFFSET], buf[RESULT_CODE_OFFSET + 1]]);

        let region = &buf[PAYLOAD_OFFSET..PADDING_OFFSET];
        let text_len = region
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_PAYLOAD_LENGTH);
        let payload = String::from_utf8_lossy(&region[..text_len]).into_owned();

        Ok(Self {
            version,
            kind,
            checksum,
            result_code,
            payload,
        })
    }

    /// Encode to the fixed wire representation.
    ///
    /// Fields are written in wire order and byte order; unused payload bytes
    /// and the two reserved bytes are zero-filled. The stored checksum is
    /// written verbatim; use [`Packet::to_signed_bytes`] for an
    /// authenticated record. Payload text longer than 1023 bytes is
    /// truncated so the terminating NUL always fits.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; PACKET_SIZE];
        buf[VERSION_OFFSET..TYPE_OFFSET].copy_from_slice(&self.version.to_be_bytes());
        buf[TYPE_OFFSET..CHECKSUM_OFFSET].copy_from_slice(&self.kind.to_be_bytes());
        buf[CHECKSUM_OFFSET..RESULT_CODE_OFFSET].copy_from_slice(&self.checksum.to_be_bytes());
        buf[RESULT_CODE_OFFSET..PAYLOAD_OFFSET].copy_from_slice(&self.result_code.to_be_bytes());

        let text = self.payload.as_bytes();
        let len = text.len().min(MAX_PAYLOAD_LENGTH - 1);
        if len < text.len() {
            warn!(
                payload_len = text.len(),
                truncated_to = len,
                "payload exceeds wire capacity, truncating"
            );
        }
        buf[PAYLOAD_OFFSET..PAYLOAD_OFFSET + len].copy_from_slice(&text[..len]);

        buf
    }

    /// Encode and sign.
    ///
    /// The checksum is computed over the record with its checksum field
    /// zeroed, then spliced back into the checksum byte positions in network
    /// byte order.
    pub fn to_signed_bytes(&self) -> Vec<u8> {
        let mut buf = self.to_bytes();
        buf[CHECKSUM_OFFSET..RESULT_CODE_OFFSET].fill(0);
        let crc = crc32::checksum(&buf);
        buf[CHECKSUM_OFFSET..RESULT_CODE_OFFSET].copy_from_slice(&crc.to_be_bytes());
        buf
    }

    /// Accept-or-reject gate for inbound records.
    ///
    /// Checks the buffer length, recomputes the checksum over the zeroed
    /// preimage, and compares it with the declared value after byte-order
    /// conversion. Any failure is surfaced unchanged to the caller.
    pub fn validate(buf: &[u8]) -> Result<Self> {
        let packet = Self::from_bytes(buf)?;
        let computed = wire_checksum(buf)?;
        if packet.checksum != computed {
            warn!(
                declared = packet.checksum,
                computed, "record failed checksum authentication"
            );
            return Err(ProtocolError::ChecksumMismatch {
                declared: packet.checksum,
                computed,
            });
        }
        debug!(
            version = packet.version,
            kind = packet.kind,
            "record authenticated"
        );
        Ok(packet)
    }
}

/// Copy of `buf` with the four checksum bytes forced to zero.
///
/// The checksum is defined over the exact wire layout, padding included,
/// so the preimage is taken on the raw record rather than reassembled from
/// logical fields.
pub fn checksum_preimage(buf: &[u8]) -> Result<Vec<u8>> {
    if buf.len() != PACKET_SIZE {
        return Err(ProtocolError::SizeMismatch {
            actual: buf.len(),
            expected: PACKET_SIZE,
        });
    }
    let mut copy = buf.to_vec();
    copy[CHECKSUM_OFFSET..RESULT_CODE_OFFSET].fill(0);
    Ok(copy)
}

/// Checksum a valid record of these bytes should declare.
pub fn wire_checksum(buf: &[u8]) -> Result<u32> {
    Ok(crc32::checksum(&checksum_preimage(buf)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_offsets() {
        let packet = Packet {
            version: 2,
            kind: 1,
            checksum: 0xAABB_CCDD,
            result_code: 3,
            payload: String::from("ping"),
        };
        let buf = packet.to_bytes();

        assert_eq!(buf.len(), PACKET_SIZE);
        assert_eq!(&buf[0..2], &[0x00, 0x02]);
        assert_eq!(&buf[2..4], &[0x00, 0x01]);
        assert_eq!(&buf[4..8], &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(&buf[8..10], &[0x00, 0x03]);
        assert_eq!(&buf[10..14], b"ping");
        assert_eq!(buf[14], 0);
        // reserved padding stays zero
        assert_eq!(&buf[PADDING_OFFSET..], &[0, 0]);
    }

    #[test]
    fn test_negative_fields_roundtrip() {
        let packet = Packet {
            version: -1,
            kind: -2,
            checksum: 0,
            result_code: -3,
            payload: String::new(),
        };
        let decoded = Packet::from_bytes(&packet.to_bytes()).expect("decode");
        assert_eq!(decoded.version, -1);
        assert_eq!(decoded.kind, -2);
        assert_eq!(decoded.result_code, -3);
    }

    #[test]
    fn test_payload_stops_at_first_nul() {
        let mut buf = Packet::query("check_load").to_signed_bytes();
        // bytes past the terminator are padding, not text
        buf[PAYLOAD_OFFSET + 20] = b'x';
        let decoded = Packet::from_bytes(&buf).expect("decode");
        assert_eq!(decoded.payload, "check_load");
    }

    #[test]
    fn test_payload_without_nul_spans_whole_region() {
        let mut buf = vec![0u8; PACKET_SIZE];
        buf[PAYLOAD_OFFSET..PADDING_OFFSET].fill(b'a');
        let decoded = Packet::from_bytes(&buf).expect("decode");
        assert_eq!(decoded.payload.len(), MAX_PAYLOAD_LENGTH);
    }

    #[test]
    fn test_oversized_payload_truncated() {
        let long = "x".repeat(MAX_PAYLOAD_LENGTH + 100);
        let buf = Packet::query(long).to_bytes();
        assert_eq!(buf.len(), PACKET_SIZE);
        // last payload byte is the terminator
        assert_eq!(buf[PADDING_OFFSET - 1], 0);
        let decoded = Packet::from_bytes(&buf).expect("decode");
        assert_eq!(decoded.payload.len(), MAX_PAYLOAD_LENGTH - 1);
    }

    #[test]
    fn test_preimage_zeroes_only_checksum_field() {
        let buf = Packet::query("check_users").to_signed_bytes();
        let preimage = checksum_preimage(&buf).expect("preimage");
        assert_eq!(&preimage[CHECKSUM_OFFSET..RESULT_CODE_OFFSET], &[0; 4]);
        assert_eq!(&preimage[..CHECKSUM_OFFSET], &buf[..CHECKSUM_OFFSET]);
        assert_eq!(&preimage[RESULT_CODE_OFFSET..], &buf[RESULT_CODE_OFFSET..]);
    }

    #[test]
    fn test_signed_bytes_validate() {
        let buf = Packet::query("check_disk!/!90!95").to_signed_bytes();
        let packet = Packet::validate(&buf).expect("valid record");
        assert_eq!(packet.kind, PacketKind::Query.wire());
        assert_eq!(packet.payload, "check_disk!/!90!95");
        assert_eq!(packet.checksum, wire_checksum(&buf).expect("checksum"));
    }

    #[test]
    fn test_status_interpretation() {
        let packet = Packet::response(CheckStatus::Critical, "DISK CRITICAL");
        assert_eq!(packet.status(), Some(CheckStatus::Critical));

        let stray = Packet {
            result_code: 42,
            ..packet
        };
        assert_eq!(stray.status(), None);
    }

    #[test]
    fn test_wire_enum_roundtrip() {
        for kind in [PacketKind::Query, PacketKind::Response] {
            assert_eq!(PacketKind::from_wire(kind.wire()), Some(kind));
        }
        for version in [PacketVersion::V1, PacketVersion::V2, PacketVersion::V3] {
            assert_eq!(PacketVersion::from_wire(version.wire()), Some(version));
        }
        for status in [
            CheckStatus::Ok,
            CheckStatus::Warning,
            CheckStatus::Critical,
            CheckStatus::Unknown,
        ] {
            assert_eq!(CheckStatus::from_wire(status.wire()), Some(status));
        }
        assert_eq!(PacketKind::from_wire(0), None);
        assert_eq!(PacketVersion::from_wire(4), None);
        assert_eq!(CheckStatus::from_wire(-1), None);
    }

    #[test]
    fn test_status_names() {
        assert_eq!(CheckStatus::Ok.name(), "OK");
        assert_eq!(CheckStatus::Warning.name(), "WARNING");
        assert_eq!(CheckStatus::Critical.name(), "CRITICAL");
        assert_eq!(CheckStatus::Unknown.name(), "UNKNOWN");
    }
}
