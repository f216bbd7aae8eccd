use std::io;
use thiserror::Error;

/// A single process-record field that could not be read.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("pid 0 does not name a process")]
    InvalidPid,

    #[error("cannot read {field} of pid {pid}: {source}")]
    Unreadable {
        pid: u32,
        field: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("malformed {field} record for pid {pid}")]
    Malformed { pid: u32, field: &'static str },
}

/// Failures of the windowing capability.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("not connected to a display")]
    NotConnected,

    #[error("window query failed: {0}")]
    QueryFailed(String),
}

/// Transport-level failures of the native host loop.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("message too large: {len} bytes (max: {max} bytes)")]
    MessageTooLarge { len: usize, max: usize },

    #[error("invalid message: {0}")]
    InvalidMessage(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HostError {
    /// EOF on the input stream is how the peer closes the connection.
    pub fn is_disconnect(&self) -> bool {
        matches!(self, HostError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
