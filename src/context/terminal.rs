use super::{CategoryLabel, Detection};
use crate::categorizer::AppCategory;
use crate::process::{or_empty, ProcessRecords};
use serde::Serialize;

pub const LABEL: CategoryLabel = CategoryLabel {
    category: AppCategory::Terminal,
    noun: "a terminal",
    flag: "isTerminal",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalContext {
    pub working_directory: String,
    pub window_title: String,
    pub terminal_type: String,
    pub is_terminal: bool,
}

pub fn extract(
    records: &ProcessRecords,
    window_class: &str,
    window_title: &str,
    pid: Option<u32>,
) -> Detection<TerminalContext> {
    Detection::check(LABEL, window_class, window_title, || TerminalContext {
        working_directory: pid.map(|pid| or_empty(records.cwd(pid))).unwrap_or_default(),
        window_title: window_title.to_string(),
        terminal_type: window_class.to_string(),
        is_terminal: true,
    })
}
