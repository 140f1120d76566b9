#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Fragmentation-invariance tests for the incremental request decoder
//!
//! A transport may deliver a handshake in arbitrary fragments across
//! arbitrary segment boundaries. However the bytes arrive, the call on
//! which the terminator first becomes visible must produce exactly the
//! result that feeding the whole buffer at once would have produced, and
//! every earlier call must report how far it scanned.

use bytes::Bytes;
use handshake_protocol::core::segments::SegmentedBuf;
use handshake_protocol::protocol::handshake::{
    try_parse_request, write_request, RequestParse,
};
use handshake_protocol::protocol::message::HandshakeRequest;

fn encoded_request(protocol: &str) -> Vec<u8> {
    let mut wire = Vec::new();
    write_request(&HandshakeRequest::new(protocol), &mut wire).expect("encode");
    wire
}

fn parse_whole(wire: &[u8]) -> HandshakeRequest {
    match try_parse_request(&SegmentedBuf::from(wire)).expect("whole buffer parses") {
        RequestParse::Parsed { request, .. } => request,
        RequestParse::NeedMoreData { .. } => panic!("whole buffer holds a frame"),
    }
}

#[test]
fn test_every_two_way_split_as_separate_segments() {
    let wire = encoded_request("json");
    let expected = parse_whole(&wire);

    for split in 1..wire.len() {
        let mut buffer = SegmentedBuf::new();
        buffer.push(Bytes::copy_from_slice(&wire[..split]));
        buffer.push(Bytes::copy_from_slice(&wire[split..]));

        match try_parse_request(&buffer).expect("split input parses") {
            RequestParse::Parsed { request, cursor } => {
                assert_eq!(request, expected, "split at {split} changed the result");
                assert_eq!(cursor.consumed, wire.len());
                assert_eq!(cursor.examined, wire.len());
            }
            RequestParse::NeedMoreData { .. } => panic!("all bytes were supplied"),
        }
    }
}

#[test]
fn test_cumulative_arrival_one_byte_at_a_time() {
    let wire = encoded_request("messagepack");
    let expected = parse_whole(&wire);
    let mut buffer = SegmentedBuf::new();

    for (i, byte) in wire.iter().enumerate() {
        buffer.push(Bytes::copy_from_slice(&[*byte]));
        let outcome = try_parse_request(&buffer).expect("no error while accumulating");

        if i < wire.len() - 1 {
            match outcome {
                RequestParse::NeedMoreData { cursor } => {
                    // nothing may be discarded, everything so far was scanned
                    assert_eq!(cursor.consumed, 0);
                    assert_eq!(cursor.examined, i + 1);
                }
                RequestParse::Parsed { .. } => panic!("terminator not yet visible at {i}"),
            }
        } else {
            match outcome {
                RequestParse::Parsed { request, cursor } => {
                    assert_eq!(request, expected);
                    assert_eq!(cursor.consumed, wire.len());
                    assert_eq!(cursor.examined, wire.len());
                }
                RequestParse::NeedMoreData { .. } => panic!("terminator was supplied"),
            }
        }
    }
}

#[test]
fn test_three_way_splits_preserve_result() {
    let wire = encoded_request("json");
    let expected = parse_whole(&wire);

    for first in 1..wire.len() - 1 {
        for second in first + 1..wire.len() {
            let buffer: SegmentedBuf = [
                Bytes::copy_from_slice(&wire[..first]),
                Bytes::copy_from_slice(&wire[first..second]),
                Bytes::copy_from_slice(&wire[second..]),
            ]
            .into_iter()
            .collect();

            match try_parse_request(&buffer).expect("three-way split parses") {
                RequestParse::Parsed { request, .. } => assert_eq!(request, expected),
                RequestParse::NeedMoreData { .. } => {
                    panic!("split ({first},{second}) lost the frame")
                }
            }
        }
    }
}

#[test]
fn test_terminator_in_its_own_segment() {
    let wire = encoded_request("json");
    let (payload, terminator) = wire.split_at(wire.len() - 1);

    let mut buffer = SegmentedBuf::new();
    buffer.push(Bytes::copy_from_slice(payload));
    buffer.push(Bytes::copy_from_slice(terminator));

    match try_parse_request(&buffer).expect("parses") {
        RequestParse::Parsed { request, .. } => assert_eq!(request.protocol, "json"),
        RequestParse::NeedMoreData { .. } => panic!("frame was complete"),
    }
}

#[test]
fn test_bytes_after_terminator_are_not_consumed() {
    let mut wire = encoded_request("json");
    let frame_len = wire.len();
    wire.extend_from_slice(b"\x7b\x22follow-on traffic");

    let mut buffer = SegmentedBuf::new();
    buffer.push(Bytes::copy_from_slice(&wire[..10]));
    buffer.push(Bytes::copy_from_slice(&wire[10..]));

    match try_parse_request(&buffer).expect("parses") {
        RequestParse::Parsed { cursor, .. } => {
            assert_eq!(cursor.consumed, frame_len);
            assert_eq!(cursor.examined, frame_len);
        }
        RequestParse::NeedMoreData { .. } => panic!("frame was complete"),
    }
}

#[test]
fn test_caller_discard_then_rescan() {
    // simulate the caller contract: discard `consumed` bytes after a parse,
    // then hand the remainder back as a new logical buffer
    let mut stream = encoded_request("json");
    stream.extend_from_slice(&encoded_request("messagepack"));

    let first = match try_parse_request(&SegmentedBuf::from(stream.as_slice())).unwrap() {
        RequestParse::Parsed { request, cursor } => {
            stream.drain(..cursor.consumed);
            request
        }
        RequestParse::NeedMoreData { .. } => panic!("first frame complete"),
    };
    assert_eq!(first.protocol, "json");

    match try_parse_request(&SegmentedBuf::from(stream.as_slice())).unwrap() {
        RequestParse::Parsed { request, .. } => assert_eq!(request.protocol, "messagepack"),
        RequestParse::NeedMoreData { .. } => panic!("second frame complete"),
    }
}
