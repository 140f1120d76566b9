//! # Core Wire Components
//!
//! Low-level framing, buffer handling, and stream codecs.
//!
//! This module provides the foundation the handshake operations build on:
//! record-separator framing, a segmented view over non-contiguous input,
//! and a tokio codec for driving the handshake over a byte stream.
//!
//! ## Components
//! - **Frame**: single-byte record-separator framing
//! - **Segments**: a logical byte sequence split across memory segments
//! - **Codec**: tokio codec for framing handshake messages over byte streams
//!
//! ## Wire Format
//! ```text
//! [JSON document (UTF-8, no BOM)] [RS(1) = 0x1E]
//! ```
//!
//! ## Security
//! - Maximum message size enforced by the codec (prevents memory exhaustion)
//! - A frame is never parsed before its terminator is observed

pub mod codec;
pub mod frame;
pub mod segments;
