//! UDP transport: one datagram per frame, payload verbatim.
//!
//! ## Wire format
//!
//! None. Each datagram's payload is the encoded frame exactly as the
//! host handed it over — no header, no length prefix, no sequence
//! number. The receiving side is expected to feed concatenated
//! payloads into an elementary-stream parser (for example `udpsrc !
//! h264parse ...` in a GStreamer pipeline).
//!
//! Frames larger than a single datagram are not split: the OS rejects
//! them and the frame is dropped whole, so a receiver never observes a
//! partial frame.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::net::UdpSocket;
use tracing::{debug, info, trace, warn};

use crate::error::TransportError;
use crate::frame::FrameRef;
use crate::options::TransportOptions;
use crate::plugin::{SendOutcome, TransportPlugin};

// ── Constants ────────────────────────────────────────────────────

/// Largest UDP payload over IPv4: 65535 minus IP (20) + UDP (8)
/// headers. Frames beyond this cannot leave as a single datagram.
pub const MAX_DATAGRAM_SIZE: usize = 65_507;

// ── UdpTransport ─────────────────────────────────────────────────

/// Fire-and-forget UDP frame sender.
///
/// Holds exactly one unconnected socket and one resolved destination
/// for its whole lifetime; both are read-only after
/// [`init`](Self::init). Dropping the transport closes the socket.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    dest: SocketAddr,
    verbose: bool,
    frames_sent: AtomicU64,
    bytes_sent: AtomicU64,
}

impl UdpTransport {
    /// Usage text printed by hosts on `--help`.
    pub const USAGE: &'static str = "\
The udp transport uses the following parameters:
  --ipaddr=<ip_address>    IP address of receiver.
  --port=<port_number>     Port to use on receiver.

The receiver should be started using:
  \"gst-launch-1.0 udpsrc port=<port_number> ! h264parse ! avdec_h264 ! autovideosink\"
";

    /// Open a UDP transport from the host's argument list.
    ///
    /// Recognizes `--ipaddr` (required, non-empty) and `--port`
    /// (defaults to 0); everything else in `args` is ignored. On any
    /// error nothing stays allocated — the socket is only opened once
    /// the destination is known to be good.
    pub async fn init(args: &[String], verbose: bool) -> Result<Self, TransportError> {
        let opts = TransportOptions::parse(args);
        if !opts.has_address() {
            return Err(TransportError::MissingAddress);
        }

        let dest = resolve(&opts.ipaddr, opts.port).await?;

        // Unspecified local address in the destination's family; the
        // kernel assigns an ephemeral port.
        let bind_addr = match dest {
            SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        };
        let socket = UdpSocket::bind(bind_addr).await?;

        info!(%dest, "udp transport ready, sending to {}:{}", opts.ipaddr, opts.port);

        Ok(Self {
            socket,
            dest,
            verbose,
            frames_sent: AtomicU64::new(0),
            bytes_sent: AtomicU64::new(0),
        })
    }

    /// The resolved destination this transport targets.
    pub fn dest(&self) -> SocketAddr {
        self.dest
    }

    /// Frames transmitted since initialization (dropped frames not
    /// counted).
    pub fn frames_sent(&self) -> u64 {
        self.frames_sent.load(Ordering::Relaxed)
    }

    /// Payload bytes transmitted since initialization.
    pub fn bytes_sent(&self) -> u64 {
        self.bytes_sent.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TransportPlugin for UdpTransport {
    async fn send_frame(&self, frame: FrameRef<'_>) -> SendOutcome {
        if self.verbose {
            debug!(bytes = frame.len(), "sending frame over udp");
        }
        trace!(pts = frame.timestamp(), "frame presentation timestamp");

        match self.socket.send_to(frame.data(), self.dest).await {
            Ok(sent) if sent == frame.len() => {
                self.frames_sent.fetch_add(1, Ordering::Relaxed);
                self.bytes_sent.fetch_add(sent as u64, Ordering::Relaxed);
                SendOutcome::Sent { bytes: sent }
            }
            Ok(sent) => {
                // Short write: what left the socket is not the frame.
                warn!(
                    expected = frame.len(),
                    sent, "partial datagram, frame dropped"
                );
                SendOutcome::Dropped
            }
            Err(e) => {
                warn!(
                    dest = %self.dest,
                    bytes = frame.len(),
                    error = %e,
                    "send failed, frame dropped"
                );
                SendOutcome::Dropped
            }
        }
    }

    fn usage(&self) -> &'static str {
        Self::USAGE
    }

    async fn shutdown(self: Box<Self>) {
        if self.verbose {
            debug!(
                frames = self.frames_sent(),
                bytes = self.bytes_sent(),
                "closing udp transport"
            );
        }
        // Dropping `self` closes the socket descriptor.
    }
}

// ── Address resolution ───────────────────────────────────────────

/// Turn the configured address into a socket address: IP literals
/// pass through, anything else goes to the resolver.
async fn resolve(host: &str, port: u16) -> Result<SocketAddr, TransportError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    let mut addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|_| TransportError::InvalidAddress(host.to_string()))?;
    addrs
        .next()
        .ok_or_else(|| TransportError::InvalidAddress(host.to_string()))
}

// ── Tests ────────────────────────────────────────────────────────
