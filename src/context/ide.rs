use super::{first_dash_segment, CategoryLabel, Detection, ExtractionMethod};
use crate::categorizer::AppCategory;
use crate::constants::MAX_ACTIVE_FILE_LEN;
use crate::process::{or_empty, ProcessRecords};
use serde::Serialize;
use std::path::Path;

pub const LABEL: CategoryLabel = CategoryLabel {
    category: AppCategory::Ide,
    noun: "an IDE",
    flag: "isIde",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeProject {
    pub project_path: String,
    pub project_name: String,
    pub ide_type: String,
    pub window_title: String,
    pub is_ide: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeActiveFile {
    pub active_file: String,
    pub window_title: String,
    pub ide_type: String,
    pub extraction_method: ExtractionMethod,
}

/// Last component of `path`, or empty when there is none.
fn project_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Filename named by an editor title such as `"main.rs - project - Code"`.
///
/// The first segment counts only if it has a `.`, no `/`, and is shorter
/// than [`MAX_ACTIVE_FILE_LEN`] characters.
pub fn active_file_from_title(title: &str) -> String {
    first_dash_segment(title)
        .filter(|segment| {
            segment.contains('.')
                && !segment.contains('/')
                && segment.chars().count() < MAX_ACTIVE_FILE_LEN
        })
        .map(str::to_string)
        .unwrap_or_default()
}

/// Project directory is the editor process's working directory.
pub fn project(
    records: &ProcessRecords,
    window_class: &str,
    window_title: &str,
    pid: Option<u32>,
) -> Detection<IdeProject> {
    Detection::check(LABEL, window_class, window_title, || {
        let project_path = pid.map(|pid| or_empty(records.cwd(pid))).unwrap_or_default();
        IdeProject {
            project_name: project_name(&project_path),
            project_path,
            ide_type: window_class.to_string(),
            window_title: window_title.to_string(),
            is_ide: true,
        }
    })
}

pub fn active_file(window_class: &str, window_title: &str) -> Detection<IdeActiveFile> {
    Detection::check(LABEL, window_class, window_title, || {
        let active_file = active_file_from_title(window_title);
        IdeActiveFile {
            extraction_method: ExtractionMethod::for_value(&active_file),
            active_file,
            window_title: window_title.to_string(),
            ide_type: window_class.to_string(),
        }
    })
}
