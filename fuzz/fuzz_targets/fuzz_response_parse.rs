#![no_main]

use handshake_protocol::protocol::handshake::parse_response;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // One-shot response parse must never panic on arbitrary input
    let _ = parse_response(data);
});
