use super::{Geometry, WindowHandle, WindowSystem, Workspace};
use crate::error::WindowError;
use log::{debug, warn};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, ConnectionExt, GetPropertyReply, Window};
use x11rb::rust_connection::RustConnection;

/// `_NET_WM_DESKTOP` value for windows shown on every workspace.
const ALL_DESKTOPS: u32 = 0xFFFF_FFFF;

/// Longest property read, in 32-bit units.
const PROPERTY_LENGTH: u32 = 1024;

fn query_failed(e: impl std::fmt::Display) -> WindowError {
    WindowError::QueryFailed(e.to_string())
}

/// Prefers the EWMH title; `WM_NAME` is read when it is empty or unreadable.
fn title_or_legacy(
    net_title: Result<String, WindowError>,
    legacy: impl FnOnce() -> Result<String, WindowError>,
) -> Result<String, WindowError> {
    match net_title {
        Ok(title) if !title.is_empty() => Ok(title),
        Ok(_) => legacy(),
        Err(e) => {
            debug!("_NET_WM_NAME unavailable ({e}), falling back to WM_NAME");
            legacy()
        }
    }
}

/// Entry `index` of a NUL-separated `_NET_DESKTOP_NAMES` value, empty when absent.
fn desktop_name_at(names: &str, index: u32) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|position| names.split('\0').nth(position))
        .unwrap_or_default()
        .to_string()
}

/// EWMH window list backed by an X11 connection.
pub struct X11WindowSystem {
    conn: Option<RustConnection>,
    root: Window,
}

impl Default for X11WindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl X11WindowSystem {
    pub fn new() -> Self {
        match x11rb::connect(None) {
            Ok((conn, screen_num)) => {
                let Some(root) = conn.setup().roots.get(screen_num).map(|s| s.root) else {
                    warn!(
                        "Invalid screen number {screen_num} ({} screens available). Window inspection disabled.",
                        conn.setup().roots.len()
                    );
                    return Self { conn: None, root: 0 };
                };
                Self {
                    conn: Some(conn),
                    root,
                }
            }
            Err(e) => {
                // Wayland-only or headless sessions still get empty results.
                warn!("Failed to connect to X server: {e}. Window inspection disabled.");
                Self { conn: None, root: 0 }
            }
        }
    }

    fn conn(&self) -> Result<&RustConnection, WindowError> {
        self.conn.as_ref().ok_or(WindowError::NotConnected)
    }

    fn get_atom(&self, name: &str) -> Result<u32, WindowError> {
        self.conn()?
            .intern_atom(false, name.as_bytes())
            .map_err(query_failed)?
            .reply()
            .map(|r| r.atom)
            .map_err(query_failed)
    }

    fn get_property(
        &self,
        window: Window,
        property: u32,
        type_: impl Into<u32>,
    ) -> Result<GetPropertyReply, WindowError> {
        self.conn()?
            .get_property(false, window, property, type_, 0, PROPERTY_LENGTH)
            .map_err(query_failed)?
            .reply()
            .map_err(query_failed)
    }

    fn get_cardinal(&self, window: Window, name: &str) -> Result<Option<u32>, WindowError> {
        let atom = self.get_atom(name)?;
        let reply = self.get_property(window, atom, AtomEnum::CARDINAL)?;
        Ok(reply.value32().and_then(|mut values| values.next()))
    }

    fn get_text(&self, window: Window, property: u32) -> Result<String, WindowError> {
        let reply = self.get_property(window, property, AtomEnum::ANY)?;
        Ok(String::from_utf8_lossy(&reply.value).into_owned())
    }

    fn active_window_id(&self) -> Result<Option<Window>, WindowError> {
        let atom = self.get_atom("_NET_ACTIVE_WINDOW")?;
        let reply = self.get_property(self.root, atom, AtomEnum::WINDOW)?;
        Ok(reply
            .value32()
            .and_then(|mut values| values.next())
            .filter(|&id| id != 0))
    }

    fn client_list(&self) -> Result<Vec<Window>, WindowError> {
        let atom = self.get_atom("_NET_CLIENT_LIST")?;
        let reply = self.get_property(self.root, atom, AtomEnum::WINDOW)?;
        Ok(reply.value32().map(Iterator::collect).unwrap_or_default())
    }

    fn desktop_name(&self, index: u32) -> Result<String, WindowError> {
        let atom = self.get_atom("_NET_DESKTOP_NAMES")?;
        let names = self.get_text(self.root, atom)?;
        Ok(desktop_name_at(&names, index))
    }
}

impl WindowSystem for X11WindowSystem {
    fn list_windows(&self) -> Result<Vec<Box<dyn WindowHandle + '_>>, WindowError> {
        let active = self.active_window_id()?;
        let mut ids = self.client_list()?;

        // Window managers without _NET_CLIENT_LIST still publish the active window.
        if let Some(active_id) = active {
            if !ids.contains(&active_id) {
                ids.push(active_id);
            }
        }

        Ok(ids
            .into_iter()
            .map(|id| -> Box<dyn WindowHandle + '_> {
                Box::new(X11Window {
                    system: self,
                    id,
                    focused: Some(id) == active,
                })
            })
            .collect())
    }
}

pub struct X11Window<'a> {
    system: &'a X11WindowSystem,
    id: Window,
    focused: bool,
}

impl WindowHandle for X11Window<'_> {
    fn has_focus(&self) -> bool {
        self.focused
    }

    fn title(&self) -> Result<String, WindowError> {
        let net_title = self
            .system
            .get_atom("_NET_WM_NAME")
            .and_then(|atom| self.system.get_text(self.id, atom));
        title_or_legacy(net_title, || {
            self.system.get_text(self.id, AtomEnum::WM_NAME.into())
        })
    }

    fn wm_class(&self) -> Result<String, WindowError> {
        // WM_CLASS holds "instance\0class\0"; the class is the application name.
        let raw = self.system.get_text(self.id, AtomEnum::WM_CLASS.into())?;
        let mut parts = raw.split('\0');
        let instance = parts.next().unwrap_or_default();
        let class = parts.next().unwrap_or_default();
        let name = if class.is_empty() { instance } else { class };
        Ok(name.to_string())
    }

    fn role(&self) -> Result<String, WindowError> {
        let atom = self.system.get_atom("WM_WINDOW_ROLE")?;
        let role = self.system.get_text(self.id, atom)?;
        Ok(role.trim_end_matches('\0').to_string())
    }

    fn pid(&self) -> Result<Option<u32>, WindowError> {
        self.system
            .get_cardinal(self.id, "_NET_WM_PID")
            .map(|pid| pid.filter(|&p| p != 0))
    }

    fn frame_rect(&self) -> Result<Geometry, WindowError> {
        let conn = self.system.conn()?;
        let geometry = conn
            .get_geometry(self.id)
            .map_err(query_failed)?
            .reply()
            .map_err(query_failed)?;
        let origin = conn
            .translate_coordinates(self.id, self.system.root, 0, 0)
            .map_err(query_failed)?
            .reply()
            .map_err(query_failed)?;

        Ok(Geometry {
            x: i32::from(origin.dst_x),
            y: i32::from(origin.dst_y),
            width: u32::from(geometry.width),
            height: u32::from(geometry.height),
        })
    }

    fn workspace(&self) -> Result<Workspace, WindowError> {
        let index = match self.system.get_cardinal(self.id, "_NET_WM_DESKTOP")? {
            Some(ALL_DESKTOPS) | None => self
                .system
                .get_cardinal(self.system.root, "_NET_CURRENT_DESKTOP")?
                .unwrap_or(0),
            Some(index) => index,
        };
        let name = self.system.desktop_name(index).unwrap_or_else(|e| {
            debug!("Reading desktop names failed: {e}");
            String::new()
        });

        Ok(Workspace { index, name })
    }
}
