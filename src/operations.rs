use crate::inspector::Inspector;
use crate::platform::WindowSystem;

/// Every exported query. Each takes no arguments and returns one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Core
    FocusedWindowTitle,
    FocusedWindowPid,
    FocusedWindowClass,
    FocusedWindowRole,
    ProcessName,
    ProcessExecutablePath,
    ProcessCommandLine,
    ProcessWorkingDirectory,
    WindowGeometry,
    WindowWorkspace,
    ProcessParentPid,
    // Context
    BrowserUrl,
    BrowserTabInfo,
    IdeProjectInfo,
    IdeActiveFile,
    TerminalContext,
    FileManagerPath,
    DocumentPath,
    AppContext,
    // Aggregate
    AllWindowData,
    // Identity
    ExtensionInfo,
}

impl Operation {
    pub const ALL: [Operation; 21] = [
        Operation::FocusedWindowTitle,
        Operation::FocusedWindowPid,
        Operation::FocusedWindowClass,
        Operation::FocusedWindowRole,
        Operation::ProcessName,
        Operation::ProcessExecutablePath,
        Operation::ProcessCommandLine,
        Operation::ProcessWorkingDirectory,
        Operation::WindowGeometry,
        Operation::WindowWorkspace,
        Operation::ProcessParentPid,
        Operation::BrowserUrl,
        Operation::BrowserTabInfo,
        Operation::IdeProjectInfo,
        Operation::IdeActiveFile,
        Operation::TerminalContext,
        Operation::FileManagerPath,
        Operation::DocumentPath,
        Operation::AppContext,
        Operation::AllWindowData,
        Operation::ExtensionInfo,
    ];

    pub fn method_name(self) -> &'static str {
        match self {
            Operation::FocusedWindowTitle => "GetFocusedWindowTitle",
            Operation::FocusedWindowPid => "GetFocusedWindowPid",
            Operation::FocusedWindowClass => "GetFocusedWindowClass",
            Operation::FocusedWindowRole => "GetFocusedWindowRole",
            Operation::ProcessName => "GetProcessName",
            Operation::ProcessExecutablePath => "GetProcessExecutablePath",
            Operation::ProcessCommandLine => "GetProcessCommandLine",
            Operation::ProcessWorkingDirectory => "GetProcessWorkingDirectory",
            Operation::WindowGeometry => "GetWindowGeometry",
            Operation::WindowWorkspace => "GetWindowWorkspace",
            Operation::ProcessParentPid => "GetProcessParentPid",
            Operation::BrowserUrl => "GetBrowserUrl",
            Operation::BrowserTabInfo => "GetBrowserTabInfo",
            Operation::IdeProjectInfo => "GetIdeProjectInfo",
            Operation::IdeActiveFile => "GetIdeActiveFile",
            Operation::TerminalContext => "GetTerminalContext",
            Operation::FileManagerPath => "GetFileManagerPath",
            Operation::DocumentPath => "GetDocumentPath",
            Operation::AppContext => "GetAppContext",
            Operation::AllWindowData => "GetAllWindowData",
            Operation::ExtensionInfo => "GetExtensionInfo",
        }
    }

    pub fn from_method(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.method_name() == name)
    }

    pub fn invoke<W: WindowSystem>(self, inspector: &Inspector<W>) -> String {
        match self {
            Operation::FocusedWindowTitle => inspector.focused_window_title(),
            Operation::FocusedWindowPid => inspector.focused_window_pid(),
            Operation::FocusedWindowClass => inspector.focused_window_class(),
            Operation::FocusedWindowRole => inspector.focused_window_role(),
            Operation::ProcessName => inspector.process_name(),
            Operation::ProcessExecutablePath => inspector.process_executable_path(),
            Operation::ProcessCommandLine => inspector.process_command_line(),
            Operation::ProcessWorkingDirectory => inspector.process_working_directory(),
            Operation::WindowGeometry => inspector.window_geometry(),
            Operation::WindowWorkspace => inspector.window_workspace(),
            Operation::ProcessParentPid => inspector.process_parent_pid(),
            Operation::BrowserUrl => inspector.browser_url(),
            Operation::BrowserTabInfo => inspector.browser_tab_info(),
            Operation::IdeProjectInfo => inspector.ide_project_info(),
            Operation::IdeActiveFile => inspector.ide_active_file(),
            Operation::TerminalContext => inspector.terminal_context(),
            Operation::FileManagerPath => inspector.file_manager_path(),
            Operation::DocumentPath => inspector.document_path(),
            Operation::AppContext => inspector.app_context_json(),
            Operation::AllWindowData => inspector.all_window_data_json(),
            Operation::ExtensionInfo => inspector.extension_info(),
        }
    }
}

/// All method names, in registry order.
pub fn method_names() -> Vec<&'static str> {
    Operation::ALL.iter().map(|op| op.method_name()).collect()
}
