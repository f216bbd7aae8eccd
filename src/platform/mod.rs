pub mod types;

pub use types::{Geometry, WindowHandle, WindowSystem, Workspace};

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::X11WindowSystem as NativeWindowSystem;

#[cfg(not(target_os = "linux"))]
pub use NullWindowSystem as NativeWindowSystem;

/// Window system with no windows, used where no display backend exists.
#[derive(Debug, Default)]
pub struct NullWindowSystem;

impl NullWindowSystem {
    pub fn new() -> Self {
        Self
    }
}

impl WindowSystem for NullWindowSystem {
    fn list_windows(&self) -> Result<Vec<Box<dyn WindowHandle + '_>>, crate::error::WindowError> {
        Ok(Vec::new())
    }
}
