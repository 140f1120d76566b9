//! # Handshake Protocol
//!
//! Message types and the operations that move them across the wire.
//!
//! ## Components
//! - **Message**: the request/response value types exchanged during the handshake
//! - **Handshake**: encoders and decoders for the wire format
//! - **Negotiation**: the receiving peer's accept/reject decision

pub mod handshake;
pub mod message;
pub mod negotiation;
