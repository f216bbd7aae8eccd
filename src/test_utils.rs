//! Shared test utilities for focuslens.
//!
//! Provides an in-memory window system and a temporary process-record tree
//! so the inspector can be exercised without a display or real processes.

#![cfg(test)]

use crate::error::WindowError;
use crate::platform::{Geometry, WindowHandle, WindowSystem, Workspace};
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

#[derive(Debug, Clone, Default)]
pub struct FakeWindow {
    title: String,
    wm_class: String,
    role: String,
    pid: Option<u32>,
    geometry: Geometry,
    workspace: Workspace,
    focused: bool,
    broken: bool,
}

impl FakeWindow {
    pub fn new(wm_class: &str, title: &str) -> Self {
        Self {
            title: title.to_string(),
            wm_class: wm_class.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    #[must_use]
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, x: i32, y: i32, width: u32, height: u32) -> Self {
        self.geometry = Geometry { x, y, width, height };
        self
    }

    #[must_use]
    pub fn with_workspace(mut self, index: u32, name: &str) -> Self {
        self.workspace = Workspace {
            index,
            name: name.to_string(),
        };
        self
    }

    /// Every getter except title and class fails.
    #[must_use]
    pub fn broken_attributes(mut self) -> Self {
        self.broken = true;
        self
    }

    fn check(&self) -> Result<(), WindowError> {
        if self.broken {
            Err(WindowError::QueryFailed("window vanished".into()))
        } else {
            Ok(())
        }
    }
}

impl WindowHandle for FakeWindow {
    fn has_focus(&self) -> bool {
        self.focused
    }

    fn title(&self) -> Result<String, WindowError> {
        Ok(self.title.clone())
    }

    fn wm_class(&self) -> Result<String, WindowError> {
        Ok(self.wm_class.clone())
    }

    fn role(&self) -> Result<String, WindowError> {
        self.check().map(|()| self.role.clone())
    }

    fn pid(&self) -> Result<Option<u32>, WindowError> {
        self.check().map(|()| self.pid)
    }

    fn frame_rect(&self) -> Result<Geometry, WindowError> {
        self.check().map(|()| self.geometry)
    }

    fn workspace(&self) -> Result<Workspace, WindowError> {
        self.check().map(|()| self.workspace.clone())
    }
}

pub struct FakeWindowSystem {
    windows: Vec<FakeWindow>,
    failing: bool,
}

impl FakeWindowSystem {
    pub fn new(windows: Vec<FakeWindow>) -> Self {
        Self {
            windows,
            failing: false,
        }
    }

    /// A window system whose listing always fails.
    pub fn failing() -> Self {
        Self {
            windows: Vec::new(),
            failing: true,
        }
    }

    /// Convenience for the common single-focused-window case.
    pub fn focused(window: FakeWindow) -> Self {
        Self::new(vec![window.focused()])
    }
}

impl WindowSystem for FakeWindowSystem {
    fn list_windows(&self) -> Result<Vec<Box<dyn WindowHandle + '_>>, WindowError> {
        if self.failing {
            return Err(WindowError::NotConnected);
        }
        Ok(self
            .windows
            .iter()
            .cloned()
            .map(|w| -> Box<dyn WindowHandle + '_> { Box::new(w) })
            .collect())
    }
}

/// Temporary directory laid out like `/proc`.
///
/// The directory lives as long as the `FakeProc` value.
pub struct FakeProc {
    dir: TempDir,
}

impl FakeProc {
    pub fn new() -> Self {
        Self {
            dir: tempdir().expect("Failed to create temp directory for fake proc"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn process(&self, pid: u32) -> FakeProcess {
        let dir = self.dir.path().join(pid.to_string());
        std::fs::create_dir_all(&dir).expect("Failed to create fake process directory");
        FakeProcess { dir }
    }
}

pub struct FakeProcess {
    dir: PathBuf,
}

impl FakeProcess {
    pub fn comm(&self, name: &str) -> &Self {
        std::fs::write(self.dir.join("comm"), name).expect("Failed to write comm");
        self
    }

    pub fn cmdline(&self, raw: &[u8]) -> &Self {
        std::fs::write(self.dir.join("cmdline"), raw).expect("Failed to write cmdline");
        self
    }

    pub fn stat(&self, line: &str) -> &Self {
        std::fs::write(self.dir.join("stat"), line).expect("Failed to write stat");
        self
    }

    pub fn cwd(&self, target: impl AsRef<Path>) -> &Self {
        symlink(target, self.dir.join("cwd")).expect("Failed to link cwd");
        self
    }

    pub fn exe(&self, target: impl AsRef<Path>) -> &Self {
        symlink(target, self.dir.join("exe")).expect("Failed to link exe");
        self
    }
}
