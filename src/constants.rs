/// Name reported by the identity operation and in full snapshots.
pub const EXTENSION_NAME: &str = "focuslens";

/// Version reported by the identity operation.
pub const EXTENSION_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const EXTENSION_DESCRIPTION: &str =
    "Reports the focused window, its process and detected application context";

/// Schema version of the full snapshot payload.
pub const DATA_COLLECTION_VERSION: &str = "1.0";

/// Default location of per-process records.
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Native messaging frames are capped at 1MB (1024 * 1024 bytes).
pub const MAX_MESSAGE_SIZE: usize = 1024 * 1024;

/// Active-file candidates must be shorter than this many characters.
pub const MAX_ACTIVE_FILE_LEN: usize = 50;

pub const NO_FOCUSED_WINDOW: &str = "No focused window found";
