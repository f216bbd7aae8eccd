use super::{first_dash_segment, first_match, CategoryLabel, Detection, ExtractionMethod};
use crate::categorizer::AppCategory;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const LABEL: CategoryLabel = CategoryLabel {
    category: AppCategory::Document,
    noun: "a document",
    flag: "isDocument",
};

fn document_path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/\S*\.[A-Za-z0-9]+").expect("valid document pattern"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContext {
    pub document_path: String,
    pub window_title: String,
    pub document_type: String,
    pub is_document: bool,
    pub extraction_method: ExtractionMethod,
}

/// Full path with an extension if the title has one, else a dotted first segment.
pub fn document_from_title(title: &str) -> String {
    let path = first_match(document_path_pattern(), title);
    if !path.is_empty() {
        return path;
    }

    first_dash_segment(title)
        .filter(|segment| segment.contains('.'))
        .map(str::to_string)
        .unwrap_or_default()
}

pub fn extract(window_class: &str, window_title: &str) -> Detection<DocumentContext> {
    Detection::check(LABEL, window_class, window_title, || {
        let document_path = document_from_title(window_title);
        DocumentContext {
            extraction_method: ExtractionMethod::for_value(&document_path),
            document_path,
            window_title: window_title.to_string(),
            document_type: window_class.to_string(),
            is_document: true,
        }
    })
}
