//! Handshake wire encoding and decoding.
//!
//! The wire form of either message is a UTF-8 JSON document (no byte-order
//! mark) followed by one record-separator byte. Encoding is a single pass
//! straight into the caller's sink. Decoding comes in two shapes:
//!
//! - [`parse_response`] is one-shot: the caller hands it a complete
//!   response buffer and framing is its own problem.
//! - [`try_parse_request`] is incremental: it may be invoked repeatedly on
//!   a growing [`SegmentedBuf`] and distinguishes "not enough bytes yet"
//!   from "this message is invalid". Only the absence of a terminator ever
//!   asks the caller to wait; once a terminator is present, any failure is
//!   a permanent protocol error and propagates immediately. Conflating the
//!   two either hangs a connection waiting for bytes that cannot repair an
//!   invalid message, or rejects a valid message that is still arriving.
//!
//! Every operation is a pure function of its input; nothing retains a
//! reference past the call, so concurrent calls on independent buffers need
//! no coordination.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::debug;

use crate::core::frame;
use crate::core::segments::SegmentedBuf;
use crate::error::{HandshakeError, Result};
use crate::protocol::message::{HandshakeRequest, HandshakeResponse};

/// Positions reported by the incremental decoder.
///
/// `consumed` is how many bytes of the logical input the caller may discard
/// for good. `examined` is how far scanning progressed without finding a
/// complete message. On a successful parse the two are equal and sit just
/// past the terminator. When more data is needed, `consumed` stays at the
/// start of the buffer (the pending message begins at or before it) while
/// `examined` moves to the end of everything scanned so far; the gap tells
/// the caller that more bytes are required before calling again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCursor {
    /// Bytes that may be permanently discarded
    pub consumed: usize,
    /// Bytes scanned without finding a complete message
    pub examined: usize,
}

/// Outcome of one [`try_parse_request`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestParse {
    /// A complete request was extracted from the buffer
    Parsed {
        /// The parsed handshake request
        request: HandshakeRequest,
        /// Cursor just past the message terminator
        cursor: ParseCursor,
    },
    /// No terminator in the buffer yet; call again with more bytes
    NeedMoreData {
        /// Cursor recording how far scanning got
        cursor: ParseCursor,
    },
}

// Fixed-shape wire documents. Decoding tolerates and ignores any field not
// named here; `Option` makes field absence explicit instead of an error.

#[derive(Serialize)]
struct RequestDocument<'a> {
    protocol: &'a str,
}

#[derive(Deserialize)]
struct RequestFields {
    protocol: Option<String>,
    version: Option<i32>,
}

#[derive(Serialize)]
struct ResponseDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Deserialize)]
struct ResponseFields {
    #[serde(rename = "type")]
    message_type: Option<serde_json::Value>,
    error: Option<String>,
}

/// Serialize a handshake request into `sink`, terminator included.
///
/// The document carries the single field `protocol`. The protocol name is
/// written as given; rejecting an empty name is the caller's job.
///
/// # Errors
/// Returns `HandshakeError::Io` if the sink fails; nothing is swallowed.
pub fn write_request<W: Write>(request: &HandshakeRequest, sink: &mut W) -> Result<()> {
    let document = RequestDocument {
        protocol: &request.protocol,
    };
    serde_json::to_writer(&mut *sink, &document).map_err(into_io_error)?;
    sink.write_all(&[frame::RECORD_SEPARATOR])?;
    Ok(())
}

/// Serialize a handshake response into `sink`, terminator included.
///
/// A non-empty error becomes `{"error": ...}`; acceptance is the empty
/// document `{}`.
///
/// # Errors
/// Returns `HandshakeError::Io` if the sink fails; nothing is swallowed.
pub fn write_response<W: Write>(response: &HandshakeResponse, sink: &mut W) -> Result<()> {
    let error = response.error.as_deref().filter(|reason| !reason.is_empty());
    let document = ResponseDocument { error };
    serde_json::to_writer(&mut *sink, &document).map_err(into_io_error)?;
    sink.write_all(&[frame::RECORD_SEPARATOR])?;
    Ok(())
}

/// Parse a complete handshake response buffer.
///
/// The buffer must hold one whole response document; a single trailing
/// record separator is tolerated and stripped. This entry point never
/// reports "incomplete": framing is the caller's contract.
///
/// # Errors
/// - `HandshakeError::MalformedPayload` if the payload is not a valid document
/// - `HandshakeError::UnexpectedMessageType` if the document carries a
///   non-empty `type` field, meaning the peer sent some other message kind
///   instead of a handshake response
pub fn parse_response(buffer: &[u8]) -> Result<HandshakeResponse> {
    let payload = match buffer.split_last() {
        Some((&frame::RECORD_SEPARATOR, payload)) => payload,
        _ => buffer,
    };

    let fields: ResponseFields = serde_json::from_slice(payload)
        .map_err(|e| HandshakeError::MalformedPayload(e.to_string()))?;

    if message_type_present(fields.message_type.as_ref()) {
        return Err(HandshakeError::UnexpectedMessageType);
    }

    debug!(accepted = fields.error.is_none(), "handshake response parsed");
    Ok(HandshakeResponse {
        error: fields.error,
    })
}

/// Try to extract one handshake request from a possibly incomplete buffer.
///
/// Safe to call repeatedly while the caller appends bytes: the decoder is
/// stateless, so each call re-derives everything from the buffer it is
/// given. The candidate frame is materialized contiguously at most once per
/// successfully located message, and without copying when it does not span
/// segments.
///
/// # Errors
/// - `HandshakeError::MalformedPayload` if a terminated frame fails framing
///   validation or is not a valid document
/// - `HandshakeError::MissingProtocol` if the document lacks a `protocol`
///   field; the message is syntactically complete but semantically invalid,
///   so waiting for more bytes cannot fix it
pub fn try_parse_request(buffer: &SegmentedBuf) -> Result<RequestParse> {
    let Some(terminator) = buffer.find_byte(frame::RECORD_SEPARATOR) else {
        return Ok(RequestParse::NeedMoreData {
            cursor: ParseCursor {
                consumed: 0,
                examined: buffer.len(),
            },
        });
    };

    let end = terminator + 1;
    let framed = buffer.copy_to_contiguous(end);
    let payload = frame::strip_terminator(&framed)?;
    let request = parse_request_payload(payload)?;

    debug!(protocol = %request.protocol, "handshake request parsed");
    Ok(RequestParse::Parsed {
        request,
        cursor: ParseCursor {
            consumed: end,
            examined: end,
        },
    })
}

/// Decode a request document that has already been stripped of its framing.
pub(crate) fn parse_request_payload(payload: &[u8]) -> Result<HandshakeRequest> {
    let fields: RequestFields = serde_json::from_slice(payload)
        .map_err(|e| HandshakeError::MalformedPayload(e.to_string()))?;

    let protocol = fields.protocol.ok_or(HandshakeError::MissingProtocol)?;
    Ok(HandshakeRequest {
        protocol,
        version: fields.version,
    })
}

/// A `type` field that is JSON null or an empty string counts as absent.
fn message_type_present(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn into_io_error(e: serde_json::Error) -> HandshakeError {
    // Serializing a borrowed two-field struct cannot itself fail; any error
    // out of to_writer originates in the sink
    HandshakeError::Io(io::Error::new(io::ErrorKind::Other, e))
}
