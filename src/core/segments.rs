//! # Segmented Buffers
//!
//! A logical byte sequence assembled from non-contiguous memory segments.
//!
//! Callers accumulating bytes from a transport often end up with the data
//! split across several allocations. `SegmentedBuf` presents those segments
//! as one cursor-addressable sequence so the decoder can scan for a frame
//! terminator without forcing the caller to flatten anything up front.
//! Copying into contiguous storage happens at a single explicit point, and
//! only when the requested range actually spans a segment boundary.
//!
//! ## Usage
//! ```rust
//! use bytes::Bytes;
//! use handshake_protocol::core::segments::SegmentedBuf;
//!
//! let mut buf = SegmentedBuf::new();
//! buf.push(Bytes::from_static(b"hello "));
//! buf.push(Bytes::from_static(b"world"));
//! assert_eq!(buf.len(), 11);
//! assert_eq!(buf.find_byte(b'w'), Some(6));
//! ```

use bytes::{Bytes, BytesMut};

/// An ordered sequence of byte segments forming one logical buffer.
///
/// Segments are reference-counted `Bytes`; pushing a segment never copies.
/// Positions reported by [`find_byte`](Self::find_byte) and accepted by
/// [`copy_to_contiguous`](Self::copy_to_contiguous) are offsets into the
/// logical sequence, not into any single segment.
#[derive(Debug, Clone, Default)]
pub struct SegmentedBuf {
    segments: Vec<Bytes>,
    len: usize,
}

impl SegmentedBuf {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment to the logical sequence. Empty segments are ignored.
    pub fn push(&mut self, segment: impl Into<Bytes>) {
        let segment = segment.into();
        if segment.is_empty() {
            return;
        }
        self.len += segment.len();
        self.segments.push(segment);
    }

    /// Total length of the logical sequence in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical sequence is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of underlying segments
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Logical position of the first occurrence of `needle`, if any.
    pub fn find_byte(&self, needle: u8) -> Option<usize> {
        let mut offset = 0;
        for segment in &self.segments {
            if let Some(pos) = segment.iter().position(|&b| b == needle) {
                return Some(offset + pos);
            }
            offset += segment.len();
        }
        None
    }

    /// Materialize the prefix `[0, end)` as one contiguous block.
    ///
    /// When the prefix lies entirely within the first segment this is a
    /// zero-copy slice of that segment; otherwise the bytes are copied into
    /// a fresh allocation. This is the only place the decoder ever copies.
    ///
    /// # Panics
    /// Panics if `end` exceeds [`len`](Self::len).
    pub fn copy_to_contiguous(&self, end: usize) -> Bytes {
        assert!(
            end <= self.len,
            "prefix end {end} out of bounds (len {})",
            self.len
        );

        if let Some(first) = self.segments.first() {
            if end <= first.len() {
                return first.slice(..end);
            }
        }

        let mut block = BytesMut::with_capacity(end);
        let mut remaining = end;
        for segment in &self.segments {
            let take = remaining.min(segment.len());
            block.extend_from_slice(&segment[..take]);
            remaining -= take;
            if remaining == 0 {
                break;
            }
        }
        block.freeze()
    }
}

impl From<Bytes> for SegmentedBuf {
    fn from(segment: Bytes) -> Self {
        let mut buf = Self::new();
        buf.push(segment);
        buf
    }
}

impl From<Vec<u8>> for SegmentedBuf {
    fn from(segment: Vec<u8>) -> Self {
        Self::from(Bytes::from(segment))
    }
}

impl From<&[u8]> for SegmentedBuf {
    fn from(segment: &[u8]) -> Self {
        Self::from(Bytes::copy_from_slice(segment))
    }
}

impl FromIterator<Bytes> for SegmentedBuf {
    fn from_iter<I: IntoIterator<Item = Bytes>>(iter: I) -> Self {
        let mut buf = Self::new();
        for segment in iter {
            buf.push(segment);
        }
        buf
    }
}
