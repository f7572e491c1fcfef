//! Response packet construction.
//!
//! Turns a finished check result into an authenticated RESPONSE record
//! ready for the transport writer.

use tracing::debug;

use crate::core::packet::{CheckStatus, Packet};

/// Capability exposed by whatever produced a check result.
///
/// The codec reads exactly these three properties and has no other
/// dependency on the producer's representation.
pub trait CheckResult {
    /// Name of the check that ran.
    fn name(&self) -> &str;

    /// Exit state of the check.
    fn status(&self) -> CheckStatus;

    /// Output lines produced by the check, in order.
    fn output_lines(&self) -> Vec<String>;
}

/// Build an authenticated version-2 RESPONSE record from a check result.
///
/// Output lines are joined with a single space, not a newline; that is the
/// legacy wire convention. The returned buffer is always exactly
/// [`crate::core::packet::PACKET_SIZE`] bytes.
pub fn encode_response<R: CheckResult>(result: &R) -> Vec<u8> {
    let status = result.status();
    let payload = result.output_lines().join(" ");
    let packet = Packet::response(status, payload);

    debug!(
        check = result.name(),
        status = status.name(),
        "encoded response record"
    );
    packet.to_signed_bytes()
}
