//! Category-specific context extraction.
//!
//! Every extractor first checks that the window classifies as its category.
//! On a match it returns its own record; otherwise the uniform
//! `{error, windowClass, is<Category>: false}` shape.

pub mod browser;
pub mod document;
pub mod file_manager;
pub mod ide;
pub mod terminal;

use crate::categorizer::{classify, AppCategory};
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Names used in the negative shape of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLabel {
    pub category: AppCategory,
    /// Noun phrase with article, as in "Not a browser window".
    pub noun: &'static str,
    /// Boolean discriminator key, e.g. `isBrowser`.
    pub flag: &'static str,
}

/// How a title-derived field was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    WindowTitle,
    TitleParsingFailed,
}

impl ExtractionMethod {
    /// `WindowTitle` when `value` was found, else `TitleParsingFailed`.
    pub fn for_value(value: &str) -> Self {
        if value.is_empty() {
            ExtractionMethod::TitleParsingFailed
        } else {
            ExtractionMethod::WindowTitle
        }
    }
}

/// Returned when a window is not of the extractor's category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub label: CategoryLabel,
    pub window_class: String,
}

impl Mismatch {
    pub fn error(&self) -> String {
        format!("Not {} window", self.label.noun)
    }
}

impl Serialize for Mismatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("error", &self.error())?;
        map.serialize_entry("windowClass", &self.window_class)?;
        map.serialize_entry(self.label.flag, &false)?;
        map.end()
    }
}

/// Outcome of running one extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Detection<T> {
    Matched(T),
    Mismatch(Mismatch),
}

impl<T> Detection<T> {
    /// Runs `extract` only when the window classifies as `label.category`.
    pub fn check(
        label: CategoryLabel,
        window_class: &str,
        window_title: &str,
        extract: impl FnOnce() -> T,
    ) -> Self {
        if classify(window_class, window_title) == label.category {
            Detection::Matched(extract())
        } else {
            Detection::Mismatch(Mismatch {
                label,
                window_class: window_class.to_string(),
            })
        }
    }

    pub fn matched(&self) -> Option<&T> {
        match self {
            Detection::Matched(value) => Some(value),
            Detection::Mismatch(_) => None,
        }
    }
}

/// First segment of a `" - "`-separated title, if the title has a separator.
pub(crate) fn first_dash_segment(title: &str) -> Option<&str> {
    if title.contains(" - ") {
        title.split(" - ").next()
    } else {
        None
    }
}

/// First match of `pattern` in `text`, or an empty string.
pub(crate) fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
