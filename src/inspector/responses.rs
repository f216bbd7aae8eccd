use crate::categorizer::AppCategory;
use crate::constants::{
    DATA_COLLECTION_VERSION, EXTENSION_DESCRIPTION, EXTENSION_NAME, EXTENSION_VERSION,
    NO_FOCUSED_WINDOW,
};
use crate::context::browser::BrowserContext;
use crate::context::document::DocumentContext;
use crate::context::file_manager::FileManagerContext;
use crate::context::ide::{IdeActiveFile, IdeProject};
use crate::context::terminal::TerminalContext;
use crate::context::Detection;
use crate::platform::{Geometry, Workspace};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl ErrorResponse {
    pub fn no_focused_window() -> Self {
        Self {
            error: NO_FOCUSED_WINDOW,
        }
    }
}

/// Aggregate answer when nothing holds focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoWindowResponse {
    pub error: &'static str,
    pub timestamp: u64,
    pub data_available: bool,
}

impl NoWindowResponse {
    pub fn new(timestamp: u64) -> Self {
        Self {
            error: NO_FOCUSED_WINDOW,
            timestamp,
            data_available: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SpecificContext {
    Browser(Detection<BrowserContext>),
    Ide {
        #[serde(rename = "projectInfo")]
        project_info: Detection<IdeProject>,
        #[serde(rename = "activeFileInfo")]
        active_file_info: Detection<IdeActiveFile>,
    },
    Terminal(Detection<TerminalContext>),
    FileManager(Detection<FileManagerContext>),
    Document(Detection<DocumentContext>),
    /// Serialized as `{}`.
    Unknown(serde_json::Map<String, serde_json::Value>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UnifiedContext {
    #[serde(rename_all = "camelCase")]
    Found {
        app_type: AppCategory,
        window_class: String,
        window_title: String,
        pid: u32,
        context: Box<SpecificContext>,
        timestamp: u64,
    },
    NoWindow(NoWindowResponse),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl ExtensionInfo {
    pub fn current() -> Self {
        Self {
            name: EXTENSION_NAME,
            version: EXTENSION_VERSION,
            description: EXTENSION_DESCRIPTION,
        }
    }
}

/// Payload of the identity operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionIdentity {
    #[serde(flatten)]
    pub info: ExtensionInfo,
    pub data_collection_version: &'static str,
}

impl ExtensionIdentity {
    pub fn current() -> Self {
        Self {
            info: ExtensionInfo::current(),
            data_collection_version: DATA_COLLECTION_VERSION,
        }
    }
}

/// Every core field, gathered from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreData {
    pub title: String,
    pub window_class: String,
    pub pid: u32,
    pub role: String,
    pub geometry: Geometry,
    pub workspace: Workspace,
    pub process_name: String,
    pub executable_path: String,
    pub command_line: String,
    pub working_directory: String,
    pub parent_pid: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationContext {
    pub detected_type: AppCategory,
    pub specific_data: SpecificContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Whole milliseconds spent collecting, possibly 0.
    pub collection_duration: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WindowDataSnapshot {
    #[serde(rename_all = "camelCase")]
    Found {
        timestamp: u64,
        data_collection_version: &'static str,
        extension_info: ExtensionInfo,
        core: Box<CoreData>,
        application_context: Box<ApplicationContext>,
        performance: Performance,
    },
    NoWindow(NoWindowResponse),
}
