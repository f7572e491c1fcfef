#![no_main]

use libfuzzer_sys::fuzz_target;
use nrpe_protocol::Packet;

fuzz_target!(|data: &[u8]| {
    // Fuzz record validation - test for panics, crashes, infinite loops
    let _ = Packet::validate(data);
    let _ = Packet::from_bytes(data);
});
