//! Server-side protocol negotiation.
//!
//! Decoding a request tells the server what the peer wants; this module is
//! the decision about whether the server can provide it. Registrations are
//! made once at startup, after which the registry is only read, so no
//! interior locking is needed.

use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::protocol::message::{HandshakeRequest, HandshakeResponse};

/// Registry of application protocols the receiving peer can speak.
/// Uses Cow<'static, str> so statically named protocols cost no allocation.
#[derive(Debug, Clone, Default)]
pub struct ProtocolRegistry {
    protocols: HashMap<Cow<'static, str>, i32>,
}

impl ProtocolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a protocol with the highest version this peer supports
    pub fn register(&mut self, name: impl Into<Cow<'static, str>>, version: i32) {
        self.protocols.insert(name.into(), version);
    }

    /// Whether a protocol name is registered
    pub fn supports(&self, name: &str) -> bool {
        self.protocols.contains_key(name)
    }

    /// Evaluate a request and produce the response to send back.
    ///
    /// Accepts when the requested protocol is registered and the requested
    /// version (if any) is not newer than the registered one. Every
    /// rejection carries a human-readable reason.
    pub fn negotiate(&self, request: &HandshakeRequest) -> HandshakeResponse {
        if request.protocol.is_empty() {
            warn!("rejecting handshake with empty protocol name");
            return HandshakeResponse::error("A non-empty protocol name is required.");
        }

        let Some(&supported) = self.protocols.get(request.protocol.as_str()) else {
            warn!(protocol = %request.protocol, "rejecting unsupported protocol");
            return HandshakeResponse::error(format!(
                "The protocol '{}' is not supported.",
                request.protocol
            ));
        };

        if let Some(requested) = request.version {
            if requested > supported {
                warn!(
                    protocol = %request.protocol,
                    requested,
                    supported,
                    "rejecting unsupported protocol version"
                );
                return HandshakeResponse::error(format!(
                    "The server does not support version {} of the '{}' protocol.",
                    requested, request.protocol
                ));
            }
        }

        debug!(protocol = %request.protocol, "handshake accepted");
        HandshakeResponse::ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn registry() -> ProtocolRegistry {
        let mut registry = ProtocolRegistry::new();
        registry.register("json", 1);
        registry.register("messagepack", 2);
        registry
    }

    #[test]
    fn test_known_protocol_accepted() {
        let response = registry().negotiate(&HandshakeRequest::new("json"));
        assert!(response.is_ok());
    }

    #[test]
    fn test_unknown_protocol_rejected() {
        let response = registry().negotiate(&HandshakeRequest::new("cbor"));
        assert!(!response.is_ok());
        assert!(response.error.unwrap().contains("'cbor'"));
    }

    #[test]
    fn test_empty_protocol_rejected() {
        let response = registry().negotiate(&HandshakeRequest::new(""));
        assert!(!response.is_ok());
    }

    #[test]
    fn test_version_at_or_below_supported_accepted() {
        let registry = registry();
        assert!(registry
            .negotiate(&HandshakeRequest::with_version("messagepack", 2))
            .is_ok());
        assert!(registry
            .negotiate(&HandshakeRequest::with_version("messagepack", 1))
            .is_ok());
    }

    #[test]
    fn test_newer_version_rejected() {
        let response = registry().negotiate(&HandshakeRequest::with_version("json", 9));
        assert!(!response.is_ok());
        assert!(response.error.unwrap().contains("version 9"));
    }

    #[test]
    fn test_supports() {
        let registry = registry();
        assert!(registry.supports("json"));
        assert!(!registry.supports("cbor"));
    }
}
