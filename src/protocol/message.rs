//! Handshake message types.
//!
//! Both messages are immutable value types with no identity beyond their
//! fields. A request names the application protocol the initiating peer
//! wants to speak; a response either accepts (no error) or rejects with a
//! human-readable reason. Each peer produces its message once and consumes
//! the other side's once; nothing here is persisted.

/// Request sent by the initiating peer before any other traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandshakeRequest {
    /// Name of the application-level message protocol to use
    pub protocol: String,

    /// Protocol version the peer asked for, when it sent one.
    /// Tolerated on the wire; the encoder never writes it.
    pub version: Option<i32>,
}

impl HandshakeRequest {
    /// Create a request for the named protocol
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            version: None,
        }
    }

    /// Create a request for a specific version of the named protocol
    pub fn with_version(protocol: impl Into<String>, version: i32) -> Self {
        Self {
            protocol: protocol.into(),
            version: Some(version),
        }
    }
}

/// Response sent by the receiving peer after evaluating a request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandshakeResponse {
    /// Rejection reason; absent (or empty) means the handshake was accepted
    pub error: Option<String>,
}

impl HandshakeResponse {
    /// An accepting response
    pub fn ok() -> Self {
        Self { error: None }
    }

    /// A rejecting response carrying a human-readable reason
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
        }
    }

    /// Whether this response accepts the handshake
    pub fn is_ok(&self) -> bool {
        self.error.as_deref().map_or(true, str::is_empty)
    }
}
