//! # Configuration
//!
//! Tunables for the handshake layer.
//!
//! The handshake itself carries no runtime configuration: the wire format is
//! fixed and the decode operations are pure functions. What is configurable
//! is the policy of the surrounding stream adapter, chiefly how many bytes a
//! peer may send without completing a handshake before the connection is
//! rejected.

use crate::error::{HandshakeError, Result};

/// Default ceiling for a single handshake message, terminator included.
///
/// A handshake document is a handful of short fields; anything approaching
/// this limit is either a confused peer or an attempt to make the server
/// buffer unbounded garbage.
pub const MAX_HANDSHAKE_SIZE: usize = 32 * 1024;

/// Configuration for the handshake stream adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandshakeConfig {
    /// Maximum size in bytes of one handshake message, terminator included
    pub max_message_size: usize,
}

impl Default for HandshakeConfig {
    fn default() -> Self {
        Self {
            max_message_size: MAX_HANDSHAKE_SIZE,
        }
    }
}

impl HandshakeConfig {
    /// Validate the configuration for common misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_message_size == 0 {
            errors.push("Max message size cannot be 0".to_string());
        } else if self.max_message_size < 16 {
            // smallest legal frame is `{}` + terminator; anything this low
            // cannot hold a real protocol name
            errors.push(format!(
                "Max message size too small: {} bytes (minimum: 16)",
                self.max_message_size
            ));
        } else if self.max_message_size > 16 * 1024 * 1024 {
            errors.push(format!(
                "Max message size too large: {} bytes (maximum recommended: 16 MB)",
                self.max_message_size
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(HandshakeError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}
