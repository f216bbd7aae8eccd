//! Assembles operation responses from the window, process and context layers.
//!
//! Every method re-locates the focused window; nothing is cached between
//! calls. No method fails: absence and faults become empty strings or an
//! `error` key in the JSON payload.

mod responses;

pub use responses::{
    ApplicationContext, CoreData, ErrorResponse, ExtensionIdentity, ExtensionInfo,
    NoWindowResponse, Performance, SpecificContext, UnifiedContext, WindowDataSnapshot,
};

use crate::categorizer::{classify, AppCategory};
use crate::config::HostConfig;
use crate::constants::DATA_COLLECTION_VERSION;
use crate::context::{browser, document, file_manager, ide, terminal};
use crate::platform::{NativeWindowSystem, WindowHandle, WindowSystem};
use crate::process::{or_empty, ProcessRecords};
use crate::window::{attribute, locate_focused, WindowSnapshot};
use log::{debug, warn};
use serde::Serialize;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        warn!("Serializing response failed: {e}");
        String::from("{}")
    })
}

fn no_window_error() -> String {
    to_json(&ErrorResponse::no_focused_window())
}

pub struct Inspector<W: WindowSystem> {
    windows: W,
    records: ProcessRecords,
}

impl Inspector<NativeWindowSystem> {
    /// Inspector over the platform window system.
    pub fn native(config: &HostConfig) -> Self {
        Self::new(NativeWindowSystem::new(), config)
    }
}

impl<W: WindowSystem> Inspector<W> {
    pub fn new(windows: W, config: &HostConfig) -> Self {
        Self {
            windows,
            records: ProcessRecords::new(config.proc_root.clone()),
        }
    }

    fn snapshot(&self) -> Option<WindowSnapshot> {
        WindowSnapshot::focused(&self.windows)
    }

    /// Reads one attribute of the focused window.
    fn read_focused<T>(&self, read: impl FnOnce(&dyn WindowHandle) -> T) -> Option<T> {
        locate_focused(&self.windows).map(|window| read(window.as_ref()))
    }

    fn focused_pid(&self) -> Option<u32> {
        self.read_focused(|w| attribute("pid", w.pid()))
            .flatten()
            .filter(|&pid| pid != 0)
    }

    fn read_process(&self, pid: Option<u32>, read: impl FnOnce(&ProcessRecords, u32) -> String) -> String {
        pid.map(|pid| read(&self.records, pid)).unwrap_or_default()
    }

    fn process_field(&self, read: impl FnOnce(&ProcessRecords, u32) -> String) -> String {
        self.read_process(self.focused_pid(), read)
    }

    // ── Core ───────────────────────────────────────────────────────────

    pub fn focused_window_title(&self) -> String {
        self.read_focused(|w| attribute("title", w.title()))
            .unwrap_or_default()
    }

    pub fn focused_window_pid(&self) -> String {
        self.focused_pid()
            .map(|pid| pid.to_string())
            .unwrap_or_default()
    }

    pub fn focused_window_class(&self) -> String {
        self.read_focused(|w| attribute("class", w.wm_class()))
            .unwrap_or_default()
    }

    pub fn focused_window_role(&self) -> String {
        self.read_focused(|w| attribute("role", w.role()))
            .unwrap_or_default()
    }

    pub fn process_name(&self) -> String {
        self.process_field(|records, pid| or_empty(records.name(pid)))
    }

    pub fn process_executable_path(&self) -> String {
        self.process_field(|records, pid| or_empty(records.executable_path(pid)))
    }

    pub fn process_command_line(&self) -> String {
        self.process_field(|records, pid| or_empty(records.cmdline(pid)))
    }

    pub fn process_working_directory(&self) -> String {
        self.process_field(|records, pid| or_empty(records.cwd(pid)))
    }

    /// Parent pid, `"0"` when the status record cannot be read.
    pub fn process_parent_pid(&self) -> String {
        self.process_field(|records, pid| records.parent_id(pid).unwrap_or(0).to_string())
    }

    pub fn window_geometry(&self) -> String {
        self.read_focused(|w| to_json(&attribute("geometry", w.frame_rect())))
            .unwrap_or_else(no_window_error)
    }

    pub fn window_workspace(&self) -> String {
        self.read_focused(|w| to_json(&attribute("workspace", w.workspace())))
            .unwrap_or_else(no_window_error)
    }

    // ── Context ────────────────────────────────────────────────────────

    pub fn browser_url(&self) -> String {
        self.snapshot()
            .map_or_else(no_window_error, |s| {
                to_json(&browser::extract(&s.window_class, &s.title))
            })
    }

    pub fn browser_tab_info(&self) -> String {
        self.snapshot()
            .map_or_else(no_window_error, |s| {
                to_json(&browser::tab_info(&s.window_class, &s.title, now_millis()))
            })
    }

    pub fn ide_project_info(&self) -> String {
        self.snapshot()
            .map_or_else(no_window_error, |s| {
                to_json(&ide::project(&self.records, &s.window_class, &s.title, s.pid))
            })
    }

    pub fn ide_active_file(&self) -> String {
        self.snapshot()
            .map_or_else(no_window_error, |s| {
                to_json(&ide::active_file(&s.window_class, &s.title))
            })
    }

    pub fn terminal_context(&self) -> String {
        self.snapshot()
            .map_or_else(no_window_error, |s| {
                to_json(&terminal::extract(&self.records, &s.window_class, &s.title, s.pid))
            })
    }

    pub fn file_manager_path(&self) -> String {
        self.snapshot()
            .map_or_else(no_window_error, |s| {
                to_json(&file_manager::extract(&s.window_class, &s.title))
            })
    }

    pub fn document_path(&self) -> String {
        self.snapshot()
            .map_or_else(no_window_error, |s| {
                to_json(&document::extract(&s.window_class, &s.title))
            })
    }

    /// Classifies once and runs only the matching extractors.
    fn specific_context(&self, category: AppCategory, snapshot: &WindowSnapshot) -> SpecificContext {
        let class = snapshot.window_class.as_str();
        let title = snapshot.title.as_str();
        match category {
            AppCategory::Browser => SpecificContext::Browser(browser::extract(class, title)),
            AppCategory::Ide => SpecificContext::Ide {
                project_info: ide::project(&self.records, class, title, snapshot.pid),
                active_file_info: ide::active_file(class, title),
            },
            AppCategory::Terminal => {
                SpecificContext::Terminal(terminal::extract(&self.records, class, title, snapshot.pid))
            }
            AppCategory::FileManager => {
                SpecificContext::FileManager(file_manager::extract(class, title))
            }
            AppCategory::Document => SpecificContext::Document(document::extract(class, title)),
            AppCategory::Unknown => SpecificContext::Unknown(serde_json::Map::new()),
        }
    }

    pub fn app_context(&self) -> UnifiedContext {
        let Some(snapshot) = self.snapshot() else {
            return UnifiedContext::NoWindow(NoWindowResponse::new(now_millis()));
        };

        let category = classify(&snapshot.window_class, &snapshot.title);
        debug!("{} classified as {}", snapshot.window_class, category.as_str());
        UnifiedContext::Found {
            app_type: category,
            context: Box::new(self.specific_context(category, &snapshot)),
            pid: snapshot.pid_or_zero(),
            window_class: snapshot.window_class,
            window_title: snapshot.title,
            timestamp: now_millis(),
        }
    }

    pub fn app_context_json(&self) -> String {
        to_json(&self.app_context())
    }

    // ── Aggregate ──────────────────────────────────────────────────────

    pub fn all_window_data(&self) -> WindowDataSnapshot {
        let started = Instant::now();
        let Some(snapshot) = self.snapshot() else {
            return WindowDataSnapshot::NoWindow(NoWindowResponse::new(now_millis()));
        };

        let pid = snapshot.pid;
        let category = classify(&snapshot.window_class, &snapshot.title);
        let specific_data = self.specific_context(category, &snapshot);

        let core = CoreData {
            process_name: self.read_process(pid, |r, pid| or_empty(r.name(pid))),
            executable_path: self.read_process(pid, |r, pid| or_empty(r.executable_path(pid))),
            command_line: self.read_process(pid, |r, pid| or_empty(r.cmdline(pid))),
            working_directory: self.read_process(pid, |r, pid| or_empty(r.cwd(pid))),
            parent_pid: pid.map_or(0, |pid| self.records.parent_id(pid).unwrap_or(0)),
            pid: snapshot.pid_or_zero(),
            title: snapshot.title,
            window_class: snapshot.window_class,
            role: snapshot.role,
            geometry: snapshot.geometry,
            workspace: snapshot.workspace,
        };

        let collection_duration = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        WindowDataSnapshot::Found {
            timestamp: now_millis(),
            data_collection_version: DATA_COLLECTION_VERSION,
            extension_info: ExtensionInfo::current(),
            core: Box::new(core),
            application_context: Box::new(ApplicationContext {
                detected_type: category,
                specific_data,
            }),
            performance: Performance { collection_duration },
        }
    }

    pub fn all_window_data_json(&self) -> String {
        to_json(&self.all_window_data())
    }

    // ── Identity ───────────────────────────────────────────────────────

    pub fn extension_info(&self) -> String {
        to_json(&ExtensionIdentity::current())
    }
}

#[cfg(test)]
mod tests;
