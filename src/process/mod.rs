//! Best-effort reads of per-process records.
//!
//! Every field is read on its own; a failure for one field never affects
//! another. Callers collapse errors to empty values at the response boundary.

use crate::error::ProcessError;
use log::debug;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Reader for the records under a `/proc`-style directory.
#[derive(Debug, Clone)]
pub struct ProcessRecords {
    root: PathBuf,
}

impl ProcessRecords {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, pid: u32, record: &str) -> Result<PathBuf, ProcessError> {
        if pid == 0 {
            return Err(ProcessError::InvalidPid);
        }
        Ok(self.root.join(pid.to_string()).join(record))
    }

    /// Short command name (`comm`).
    pub fn name(&self, pid: u32) -> Result<String, ProcessError> {
        let path = self.record_path(pid, "comm")?;
        let comm = read_record(pid, "name", fs::read_to_string(path))?;
        Ok(comm.trim().to_string())
    }

    /// Resolved path of the executable, falling back to the raw link target.
    pub fn executable_path(&self, pid: u32) -> Result<String, ProcessError> {
        let path = self.record_path(pid, "exe")?;
        let resolved = fs::canonicalize(&path).or_else(|e| {
            debug!("canonicalize {} failed ({e}), reading link target", path.display());
            fs::read_link(&path)
        });
        let target = read_record(pid, "executable path", resolved)?;
        Ok(target.to_string_lossy().into_owned())
    }

    /// Argument vector with NUL separators turned into spaces.
    pub fn cmdline(&self, pid: u32) -> Result<String, ProcessError> {
        let path = self.record_path(pid, "cmdline")?;
        let raw = read_record(pid, "cmdline", fs::read(path))?;
        let joined = String::from_utf8_lossy(&raw).replace('\0', " ");
        Ok(joined.trim().to_string())
    }

    /// Current working directory.
    pub fn cwd(&self, pid: u32) -> Result<String, ProcessError> {
        let path = self.record_path(pid, "cwd")?;
        let target = read_record(pid, "cwd", fs::read_link(path))?;
        Ok(target.to_string_lossy().into_owned())
    }

    /// Parent pid, the fourth field of the `stat` record.
    pub fn parent_id(&self, pid: u32) -> Result<u32, ProcessError> {
        let path = self.record_path(pid, "stat")?;
        let stat = read_record(pid, "parent id", fs::read_to_string(path))?;
        parse_parent_id(&stat).ok_or(ProcessError::Malformed {
            pid,
            field: "stat",
        })
    }
}

fn read_record<T>(pid: u32, field: &'static str, result: io::Result<T>) -> Result<T, ProcessError> {
    result.map_err(|source| {
        debug!("process record read failed: {field} of pid {pid}: {source}");
        ProcessError::Unreadable { pid, field, source }
    })
}

/// Extracts the ppid column of a `stat` line.
///
/// Columns are counted after the `)` closing the command name, which may
/// itself contain spaces or parentheses. For ordinary names this is the
/// fourth whitespace-delimited field.
fn parse_parent_id(stat: &str) -> Option<u32> {
    let close = stat.rfind(')')?;
    let rest = stat.get(close + 1..)?;
    // state, then ppid
    rest.split_whitespace().nth(1)?.parse().ok()
}

/// Collapses a field read to the string published on the wire.
pub fn or_empty(result: Result<String, ProcessError>) -> String {
    result.unwrap_or_default()
}
