#![no_main]

use libfuzzer_sys::fuzz_target;
use nrpe_protocol::CheckRequest;

fuzz_target!(|data: &[u8]| {
    // Fuzz query payload parsing
    if let Ok(payload) = std::str::from_utf8(data) {
        if let Ok(request) = CheckRequest::parse(payload) {
            // a parsed request always carries a non-empty command
            assert!(!request.command.is_empty());
        }
    }
});
