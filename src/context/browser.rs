use super::{first_match, CategoryLabel, Detection, ExtractionMethod};
use crate::categorizer::AppCategory;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const LABEL: CategoryLabel = CategoryLabel {
    category: AppCategory::Browser,
    noun: "a browser",
    flag: "isBrowser",
};

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("valid URL pattern"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserContext {
    pub url: String,
    pub title: String,
    pub browser_type: String,
    pub is_browser: bool,
    pub extraction_method: ExtractionMethod,
}

/// Window-level tab facts; tabs themselves are not inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserTabInfo {
    pub title: String,
    pub window_class: String,
    pub is_browser: bool,
    pub timestamp: u64,
}

/// Pulls a URL out of a browser title.
///
/// Titles like `"Page - https://host - Browser"` yield the first segment
/// mentioning `http` or `www`; otherwise the first `http(s)://` run is used.
pub fn url_from_title(title: &str) -> String {
    let mentions_url = |s: &str| s.contains("http") || s.contains("www");

    if title.contains(" - ") && mentions_url(title) {
        return title
            .split(" - ")
            .find(|segment| mentions_url(segment))
            .map(|segment| segment.trim().to_string())
            .unwrap_or_default();
    }

    if title.contains("://") {
        return first_match(url_pattern(), title);
    }

    String::new()
}

pub fn extract(window_class: &str, window_title: &str) -> Detection<BrowserContext> {
    Detection::check(LABEL, window_class, window_title, || {
        let url = url_from_title(window_title);
        BrowserContext {
            extraction_method: ExtractionMethod::for_value(&url),
            url,
            title: window_title.to_string(),
            browser_type: window_class.to_string(),
            is_browser: true,
        }
    })
}

pub fn tab_info(window_class: &str, window_title: &str, timestamp: u64) -> Detection<BrowserTabInfo> {
    Detection::check(LABEL, window_class, window_title, || BrowserTabInfo {
        title: window_title.to_string(),
        window_class: window_class.to_string(),
        is_browser: true,
        timestamp,
    })
}
