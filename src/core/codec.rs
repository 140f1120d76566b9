//! # Handshake Codec
//!
//! Tokio codec for running the handshake over a byte stream.
//!
//! The receiving peer wraps its transport in `Framed::new(stream,
//! HandshakeCodec::new())`, reads exactly one `HandshakeRequest`, sends a
//! `HandshakeResponse`, and then tears the codec down in favor of whatever
//! codec the negotiated protocol uses. Decoding consumes the buffer through
//! each frame's terminator with `split_to`, so bytes belonging to ordinary
//! traffic after the handshake are left in place for the next codec.
//!
//! A peer that streams bytes without ever sending a terminator would
//! otherwise make the server buffer forever, so a terminator-less prefix
//! larger than the configured limit fails with `OversizedMessage`.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::debug;

use crate::config::HandshakeConfig;
use crate::core::frame;
use crate::error::{HandshakeError, Result};
use crate::protocol::handshake;
use crate::protocol::message::{HandshakeRequest, HandshakeResponse};

/// Codec framing handshake messages over a byte stream
#[derive(Debug, Clone)]
pub struct HandshakeCodec {
    max_message_size: usize,
}

impl HandshakeCodec {
    /// Create a codec with the default message size limit
    pub fn new() -> Self {
        Self::with_config(&HandshakeConfig::default())
    }

    /// Create a codec honoring the given configuration
    pub fn with_config(config: &HandshakeConfig) -> Self {
        Self {
            max_message_size: config.max_message_size,
        }
    }
}

impl Default for HandshakeCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for HandshakeCodec {
    type Item = HandshakeRequest;
    type Error = HandshakeError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<HandshakeRequest>> {
        let Some(terminator) = frame::find_terminator(src) else {
            if src.len() > self.max_message_size {
                return Err(HandshakeError::OversizedMessage(src.len()));
            }
            // partial frame, leave the buffer untouched
            return Ok(None);
        };

        if terminator + 1 > self.max_message_size {
            return Err(HandshakeError::OversizedMessage(terminator + 1));
        }

        // split_to is zero-copy; everything after the terminator stays in
        // src for whoever reads the stream next
        let framed = src.split_to(terminator + 1);
        let payload = frame::strip_terminator(&framed)?;
        let request = handshake::parse_request_payload(payload)?;

        debug!(bytes = framed.len(), protocol = %request.protocol, "handshake frame decoded");
        Ok(Some(request))
    }
}

impl Encoder<HandshakeRequest> for HandshakeCodec {
    type Error = HandshakeError;

    fn encode(&mut self, request: HandshakeRequest, dst: &mut BytesMut) -> Result<()> {
        let mut writer = (&mut *dst).writer();
        handshake::write_request(&request, &mut writer)
    }
}

impl Encoder<HandshakeResponse> for HandshakeCodec {
    type Error = HandshakeError;

    fn encode(&mut self, response: HandshakeResponse, dst: &mut BytesMut) -> Result<()> {
        let mut writer = (&mut *dst).writer();
        handshake::write_response(&response, &mut writer)
    }
}
