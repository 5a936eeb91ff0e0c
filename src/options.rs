//! Argv-style option parsing for transport plugins.
//!
//! The host hands each transport the remainder of its command line as
//! a plain argument list. A transport picks out the options it
//! recognizes and leaves everything else alone — unknown options
//! belong to other components and are never an error here.
//!
//! Recognized forms: `--name=value` and `--name value`.

use tracing::warn;

/// Options recognized by the UDP transport, parsed from an argv-style
/// list. Immutable once the transport is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportOptions {
    /// Destination address (`--ipaddr`). Required, non-empty.
    pub ipaddr: String,
    /// Destination UDP port (`--port`). Defaults to 0 when absent,
    /// which is almost certainly not a usable receiver — a caller
    /// configuration problem, not validated here.
    pub port: u16,
}

impl TransportOptions {
    /// Extract `--ipaddr` and `--port` from `args`, ignoring
    /// everything unrecognized. A later occurrence of an option
    /// overrides an earlier one.
    pub fn parse(args: &[String]) -> Self {
        let mut opts = Self::default();
        let mut iter = args.iter().peekable();

        while let Some(arg) = iter.next() {
            if let Some(value) = arg.strip_prefix("--ipaddr=") {
                opts.ipaddr = value.to_string();
            } else if arg == "--ipaddr" {
                if let Some(value) = next_value(&mut iter) {
                    opts.ipaddr = value;
                }
            } else if let Some(value) = arg.strip_prefix("--port=") {
                opts.set_port(value);
            } else if arg == "--port" {
                if let Some(value) = next_value(&mut iter) {
                    opts.set_port(&value);
                }
            }
            // Anything else is some other component's business.
        }

        opts
    }

    /// Whether a non-empty destination address was supplied.
    pub fn has_address(&self) -> bool {
        !self.ipaddr.is_empty()
    }

    fn set_port(&mut self, value: &str) {
        match value.parse::<u16>() {
            Ok(p) => self.port = p,
            Err(_) => warn!(value, "ignoring malformed --port value"),
        }
    }
}

/// Consume the next argument as an option value, unless it looks like
/// the start of another option.
fn next_value(iter: &mut std::iter::Peekable<std::slice::Iter<'_, String>>) -> Option<String> {
    match iter.peek() {
        Some(next) if !next.starts_with("--") => iter.next().cloned(),
        _ => None,
    }
}
