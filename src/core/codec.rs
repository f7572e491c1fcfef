//! Framing codec for fixed-size records.
//!
//! Adapts the packet validator to `tokio_util`'s [`Decoder`] and [`Encoder`]
//! traits so a transport can frame a byte stream into authenticated packets.
//! The codec stays a pure transform: it accumulates exactly
//! [`PACKET_SIZE`] bytes, splits them off, and validates. Socket management,
//! timeouts, and retransmission belong to the surrounding transport.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::core::packet::{Packet, PACKET_SIZE};
use crate::error::ProtocolError;

/// Stateless codec: every frame is exactly one fixed-size record.
#[derive(Debug, Default, Clone, Copy)]
pub struct PacketCodec;

impl Decoder for PacketCodec {
    type Item = Packet;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Packet>, ProtocolError> {
        if src.len() < PACKET_SIZE {
            // partial record, wait for more bytes
            return Ok(None);
        }
        let frame = src.split_to(PACKET_SIZE);
        Packet::validate(&frame).map(Some)
    }
}

impl Encoder<Packet> for PacketCodec {
    type Error = ProtocolError;

    fn encode(&mut self, packet: Packet, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        dst.reserve(PACKET_SIZE);
        dst.put_slice(&packet.to_signed_bytes());
        Ok(())
    }
}
