//! Borrowed frame views.

/// A borrowed view of one encoded video frame.
///
/// The buffer belongs to the host's capture/encode stage. A transport
/// reads it for the duration of a single
/// [`send_frame`](crate::plugin::TransportPlugin::send_frame) call and
/// must never retain or free it; the lifetime parameter enforces
/// exactly that scope.
#[derive(Debug, Clone, Copy)]
pub struct FrameRef<'a> {
    data: &'a [u8],
    timestamp: u32,
}

impl<'a> FrameRef<'a> {
    /// Wrap an encoded frame together with its presentation timestamp.
    pub fn new(data: &'a [u8], timestamp: u32) -> Self {
        Self { data, timestamp }
    }

    /// The raw encoded bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Presentation timestamp supplied by the host. Accepted on every
    /// send but not consumed by any shipping transport; it never
    /// affects framing, pacing, or ordering.
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }
}
