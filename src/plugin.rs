//! The transport plugin contract.
//!
//! Every transport backend implements [`TransportPlugin`] so the host
//! compositor can drive them polymorphically: construct once (via the
//! backend's own constructor, selected through [`create`]), send zero
//! or more frames, shut down once. [`PluginSlot`] is the host-side
//! holder that turns that lifecycle into a checked state machine:
//!
//! ```text
//! Uninitialized ──install──► Ready ──destroy──► Destroyed
//!                              │ ▲
//!                              └─┘ send_frame / usage (re-entrant)
//! ```

use std::str::FromStr;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::frame::FrameRef;
use crate::udp::UdpTransport;

// ── SendOutcome ──────────────────────────────────────────────────

/// Structured result of one best-effort send.
///
/// A send call never fails from the caller's point of view; the
/// outcome says whether the datagram actually left. Hosts that do not
/// care can ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The full payload left the socket as a single datagram.
    Sent {
        /// Payload length in bytes.
        bytes: usize,
    },
    /// The OS rejected the send (destination unreachable, payload
    /// over the datagram limit, ...). The frame is gone; nobody
    /// retries. Detail goes to the log, not the caller.
    Dropped,
}

impl SendOutcome {
    /// Whether the datagram was transmitted.
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }
}

// ── TransportPlugin ──────────────────────────────────────────────

/// Contract between the host and one transport backend.
///
/// `Send + Sync` so the host may park the instance behind an `Arc`;
/// the contract itself is serial — the host calls these methods one
/// at a time on one instance.
#[async_trait]
pub trait TransportPlugin: Send + Sync + std::fmt::Debug {
    /// Transmit one frame, best effort.
    ///
    /// Never blocks the capture pipeline on delivery problems: a
    /// failed send is logged and reported as
    /// [`SendOutcome::Dropped`], not raised. The frame buffer is
    /// borrowed only for this call.
    async fn send_frame(&self, frame: FrameRef<'_>) -> SendOutcome;

    /// Usage text for the options this transport recognizes.
    fn usage(&self) -> &'static str;

    /// Release the socket and backing state. Consumes the transport;
    /// there is no way back to Ready.
    async fn shutdown(self: Box<Self>);
}

// ── TransportKind / factory ──────────────────────────────────────

/// Transport backends the host can select at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// One UDP datagram per frame, payload verbatim.
    Udp,
}

impl FromStr for TransportKind {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "udp" => Ok(TransportKind::Udp),
            other => Err(TransportError::UnknownKind(other.to_string())),
        }
    }
}

/// Usage text for a transport kind, available without a live instance.
pub fn usage(kind: TransportKind) -> &'static str {
    match kind {
        TransportKind::Udp => UdpTransport::USAGE,
    }
}

/// Construct the selected backend from the host's argument list.
pub async fn create(
    kind: TransportKind,
    args: &[String],
    verbose: bool,
) -> Result<Box<dyn TransportPlugin>, TransportError> {
    match kind {
        TransportKind::Udp => Ok(Box::new(UdpTransport::init(args, verbose).await?)),
    }
}

// ── PluginSlot ───────────────────────────────────────────────────

/// Host-side holder for one transport instance.
///
/// Owns the `Uninitialized → Ready → Destroyed` lifecycle. An empty
/// slot is the one place a send *is* an error
/// ([`TransportError::NotInitialized`]); destroying an empty slot is
/// a silent no-op.
#[derive(Default)]
pub struct PluginSlot {
    inner: Option<Box<dyn TransportPlugin>>,
}

impl PluginSlot {
    /// A slot with nothing installed.
    pub fn empty() -> Self {
        Self { inner: None }
    }

    /// A slot holding a freshly initialized transport.
    pub fn install(transport: Box<dyn TransportPlugin>) -> Self {
        Self {
            inner: Some(transport),
        }
    }

    /// Whether a transport is installed and usable.
    pub fn is_ready(&self) -> bool {
        self.inner.is_some()
    }

    /// Forward one frame to the installed transport.
    pub async fn send_frame(&self, frame: FrameRef<'_>) -> Result<SendOutcome, TransportError> {
        match &self.inner {
            Some(transport) => Ok(transport.send_frame(frame).await),
            None => Err(TransportError::NotInitialized),
        }
    }

    /// Usage text of the installed transport, if any.
    pub fn usage(&self) -> Option<&'static str> {
        self.inner.as_ref().map(|t| t.usage())
    }

    /// Shut down and discard the installed transport. The slot stays
    /// empty afterwards: further sends error, further destroys no-op.
    pub async fn destroy(&mut self) {
        if let Some(transport) = self.inner.take() {
            transport.shutdown().await;
        }
    }
}
