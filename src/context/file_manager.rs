use super::{first_match, CategoryLabel, Detection, ExtractionMethod};
use crate::categorizer::AppCategory;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const LABEL: CategoryLabel = CategoryLabel {
    category: AppCategory::FileManager,
    noun: "a file manager",
    flag: "isFileManager",
};

fn path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/\S*").expect("valid path pattern"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileManagerContext {
    pub current_path: String,
    pub window_title: String,
    pub file_manager_type: String,
    pub is_file_manager: bool,
    pub extraction_method: ExtractionMethod,
}

/// First `/`-rooted run in the title.
pub fn path_from_title(title: &str) -> String {
    if title.contains('/') {
        first_match(path_pattern(), title)
    } else {
        String::new()
    }
}

pub fn extract(window_class: &str, window_title: &str) -> Detection<FileManagerContext> {
    Detection::check(LABEL, window_class, window_title, || {
        let current_path = path_from_title(window_title);
        FileManagerContext {
            extraction_method: ExtractionMethod::for_value(&current_path),
            current_path,
            window_title: window_title.to_string(),
            file_manager_type: window_class.to_string(),
            is_file_manager: true,
        }
    })
}
