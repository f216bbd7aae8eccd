use crate::constants::{DEFAULT_PROC_ROOT, MAX_MESSAGE_SIZE};
use std::path::PathBuf;

/// Runtime settings shared by the inspector and the native host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Directory holding per-process records, `/proc` on Linux.
    pub proc_root: PathBuf,
    /// Largest frame accepted from or written to the peer.
    pub max_message_size: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            max_message_size: MAX_MESSAGE_SIZE,
        }
    }
}

impl HostConfig {
    #[must_use]
    pub fn with_proc_root(mut self, proc_root: impl Into<PathBuf>) -> Self {
        self.proc_root = proc_root.into();
        self
    }

    /// Clamps the frame limit to the native messaging maximum.
    #[must_use]
    pub fn with_max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size.min(MAX_MESSAGE_SIZE);
        self
    }
}
