//! Source dialects recognized when resolving a request.
//!
//! Only Go has a projector; Protobuf is probed on the remote host but
//! rejected by the projector registry.

use serde::Serialize;
use std::fmt;

/// Target extension used when the request path has none.
pub const TYPESCRIPT_EXT: &str = ".ts";

/// Content type of every successful stub response.
pub const TYPESCRIPT_CONTENT_TYPE: &str = "application/typescript";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Go,
    Protobuf,
}

impl Dialect {
    /// Dialects probed on the remote host, highest priority first.
    pub const CANDIDATES: [Dialect; 2] = [Dialect::Go, Dialect::Protobuf];

    pub fn extension(self) -> &'static str {
        match self {
            Dialect::Go => ".go",
            Dialect::Protobuf => ".proto",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Go => write!(f, "Go"),
            Dialect::Protobuf => write!(f, "Protocol Buffers"),
        }
    }
}
