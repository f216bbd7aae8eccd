use crate::error::WindowError;
use serde::Serialize;

/// Window frame in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Workspace a window lives on; `index` is 0-based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Workspace {
    pub index: u32,
    pub name: String,
}

/// One open window as reported by the windowing system.
///
/// Every getter is a separate query and may fail on its own, for example
/// when the window closes between two calls.
pub trait WindowHandle {
    fn has_focus(&self) -> bool;
    fn title(&self) -> Result<String, WindowError>;
    fn wm_class(&self) -> Result<String, WindowError>;
    fn role(&self) -> Result<String, WindowError>;
    fn pid(&self) -> Result<Option<u32>, WindowError>;
    fn frame_rect(&self) -> Result<Geometry, WindowError>;
    fn workspace(&self) -> Result<Workspace, WindowError>;
}

pub trait WindowSystem: Send + Sync {
    fn list_windows(&self) -> Result<Vec<Box<dyn WindowHandle + '_>>, WindowError>;
}
