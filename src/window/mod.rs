//! Focused window lookup and attribute capture.

use crate::error::WindowError;
use crate::platform::{Geometry, WindowHandle, WindowSystem, Workspace};
use log::{debug, warn};

/// Attributes of the focused window, captured once per operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub title: String,
    pub window_class: String,
    pub role: String,
    pub pid: Option<u32>,
    pub geometry: Geometry,
    pub workspace: Workspace,
}

/// Returns the first window reporting input focus.
///
/// A windowing fault is logged and treated the same as "nothing focused".
pub fn locate_focused(system: &dyn WindowSystem) -> Option<Box<dyn WindowHandle + '_>> {
    let windows = match system.list_windows() {
        Ok(windows) => windows,
        Err(e) => {
            warn!("Listing windows failed: {e}");
            return None;
        }
    };

    let focused = windows.into_iter().find(|w| w.has_focus());
    if focused.is_none() {
        debug!("No window holds input focus");
    }
    focused
}

pub(crate) fn attribute<T: Default>(name: &str, result: Result<T, WindowError>) -> T {
    result.unwrap_or_else(|e| {
        debug!("Reading window {name} failed: {e}");
        T::default()
    })
}

impl WindowSnapshot {
    /// Reads every attribute of `window`; each failed getter degrades to its default.
    pub fn capture(window: &dyn WindowHandle) -> Self {
        Self {
            title: attribute("title", window.title()),
            window_class: attribute("class", window.wm_class()),
            role: attribute("role", window.role()),
            pid: attribute("pid", window.pid()).filter(|&pid| pid != 0),
            geometry: attribute("geometry", window.frame_rect()),
            workspace: attribute("workspace", window.workspace()),
        }
    }

    /// Locates the focused window and captures it.
    pub fn focused(system: &dyn WindowSystem) -> Option<Self> {
        locate_focused(system).map(|window| Self::capture(window.as_ref()))
    }

    /// Process id for the wire: `0` when unknown.
    pub fn pid_or_zero(&self) -> u32 {
        self.pid.unwrap_or(0)
    }
}
