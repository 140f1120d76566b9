//! # Handshake Protocol
//!
//! Connection handshake core for real-time bidirectional connections.
//!
//! Before any ordinary traffic flows, the two peers of a connection agree on
//! which application-level message protocol they will speak: the initiator
//! sends one handshake request naming a protocol, the receiver answers with
//! one handshake response that either accepts or rejects it. This crate
//! implements that exchange: the wire format, a safe incremental decoder for
//! byte streams that arrive in arbitrary fragments, and the validity checks
//! that fail a connection rather than let it proceed on garbage.
//!
//! ## Wire Format
//! ```text
//! [JSON document (UTF-8, no BOM)] [RS(1) = 0x1E]
//! ```
//! Requests are `{"protocol": "<name>"}` (an optional numeric `version` is
//! tolerated on decode); responses are `{}` for acceptance or
//! `{"error": "<reason>"}` for rejection. No length prefix exists anywhere.
//!
//! ## Components
//! - **[`protocol::handshake`]**: encode/decode operations. All of them are
//!   stateless, synchronous, and reentrant; the incremental decoder reports
//!   `consumed`/`examined` cursors so callers never re-scan bytes.
//! - **[`segments`](crate::core::segments)**: a logical byte sequence over
//!   non-contiguous memory segments, copied into contiguous storage at most
//!   once per message.
//! - **[`codec`](crate::core::codec)**: a tokio codec for driving the
//!   handshake from a `Framed` transport.
//! - **[`protocol::negotiation`]**: the receiving peer's accept/reject
//!   decision over a registry of supported protocols.
//!
//! ## Example
//! ```rust
//! use handshake_protocol::core::segments::SegmentedBuf;
//! use handshake_protocol::protocol::handshake::{self, RequestParse};
//! use handshake_protocol::HandshakeRequest;
//!
//! # fn main() -> handshake_protocol::error::Result<()> {
//! // Initiator side: emit a request
//! let mut wire = Vec::new();
//! handshake::write_request(&HandshakeRequest::new("json"), &mut wire)?;
//!
//! // Receiver side: feed accumulated bytes to the incremental decoder
//! let buffer = SegmentedBuf::from(wire.as_slice());
//! match handshake::try_parse_request(&buffer)? {
//!     RequestParse::Parsed { request, cursor } => {
//!         assert_eq!(request.protocol, "json");
//!         assert_eq!(cursor.consumed, cursor.examined);
//!     }
//!     RequestParse::NeedMoreData { .. } => unreachable!("buffer held a whole frame"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

// Re-exports for convenience
pub use crate::core::codec::HandshakeCodec;
pub use crate::core::segments::SegmentedBuf;
pub use config::HandshakeConfig;
pub use error::{HandshakeError, Result};
pub use protocol::handshake::{ParseCursor, RequestParse};
pub use protocol::message::{HandshakeRequest, HandshakeResponse};
pub use protocol::negotiation::ProtocolRegistry;
