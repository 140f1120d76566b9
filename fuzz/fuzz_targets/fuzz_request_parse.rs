#![no_main]

use bytes::Bytes;
use handshake_protocol::core::segments::SegmentedBuf;
use handshake_protocol::protocol::handshake::try_parse_request;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whole-buffer parse must never panic
    let _ = try_parse_request(&SegmentedBuf::from(data));

    // Nor may any segmentation of the same bytes
    if data.len() >= 2 {
        let split = 1 + (data[0] as usize) % (data.len() - 1);
        let mut buffer = SegmentedBuf::new();
        buffer.push(Bytes::copy_from_slice(&data[..split]));
        buffer.push(Bytes::copy_from_slice(&data[split..]));
        let _ = try_parse_request(&buffer);
    }
});
