//! # Error Types
//!
//! Error handling for the handshake protocol.
//!
//! This module defines every failure the handshake core can surface, from
//! sink I/O failures to protocol violations discovered while decoding.
//!
//! ## Error Categories
//! - **I/O Errors**: the output sink or underlying stream failed
//! - **Protocol Errors**: malformed payloads, missing required fields,
//!   wrong message kinds
//! - **Resource Errors**: a handshake message exceeding the configured limit
//!
//! "Not enough bytes yet" is deliberately NOT an error: the incremental
//! decoder reports it through its return value, so every variant here is a
//! fatal condition for the message being parsed.
//!
//! All errors implement `std::error::Error` for interoperability.

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
/// Static strings are borrowed, avoiding heap allocations for common error cases.
pub mod constants {
    /// Framing errors
    pub const ERR_MISSING_TERMINATOR: &str = "Message is missing the record separator terminator";

    /// Document validation errors
    pub const ERR_INVALID_DOCUMENT: &str = "Handshake payload is not a valid document";
    pub const ERR_MISSING_PROTOCOL: &str = "Handshake request is missing a 'protocol' field";
    pub const ERR_UNEXPECTED_TYPE: &str = "Expected a handshake response, got a typed message";

    /// Resource errors
    pub const ERR_OVERSIZED_MESSAGE: &str = "Handshake message exceeds maximum size";
}

/// HandshakeError is the primary error type for all handshake operations
#[derive(Error, Debug)]
pub enum HandshakeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed handshake payload: {0}")]
    MalformedPayload(String),

    #[error("Handshake request is missing a 'protocol' field")]
    MissingProtocol,

    #[error("Unexpected message type in handshake response")]
    UnexpectedMessageType,

    #[error("Handshake message too large: {0} bytes")]
    OversizedMessage(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using HandshakeError
pub type Result<T> = std::result::Result<T, HandshakeError>;
