//! # remdis-transport
//!
//! Transport backend for a remote-display pipeline: takes encoded
//! video frames from a host compositor and pushes each one to a
//! remote endpoint as a single best-effort UDP datagram. The host
//! owns capture, encoding, and buffer lifetime; this crate owns one
//! socket and one destination.
//!
//! ```text
//! HOST (compositor)                       RECEIVER
//! ┌─────────────────────────┐             ┌──────────────────────┐
//! │ capture → encode        │     UDP     │ udpsrc               │
//! │   ↓                     │ ──────────► │   ↓                  │
//! │ TransportPlugin::       │  1 datagram │ h264parse → decode   │
//! │   send_frame            │  per frame  │   ↓ display          │
//! └─────────────────────────┘             └──────────────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module    | Purpose                                                |
//! |-----------|--------------------------------------------------------|
//! | `error`   | `TransportError` — typed, thiserror-based errors       |
//! | `options` | argv-style option parsing (`--ipaddr`, `--port`)       |
//! | `frame`   | `FrameRef` — borrowed view of one encoded frame        |
//! | `plugin`  | Plugin contract, send outcomes, host-side `PluginSlot` |
//! | `udp`     | `UdpTransport` — one datagram per frame, best effort   |

pub mod error;
pub mod frame;
pub mod options;
pub mod plugin;
pub mod udp;

// ── Re-exports for ergonomic usage ───────────────────────────────

pub use error::TransportError;
pub use frame::FrameRef;
pub use options::TransportOptions;
pub use plugin::{PluginSlot, SendOutcome, TransportKind, TransportPlugin, create, usage};
pub use udp::{MAX_DATAGRAM_SIZE, UdpTransport};
