use serde::Serialize;

/// Application category of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppCategory {
    Browser,
    Ide,
    Terminal,
    FileManager,
    Document,
    Unknown,
}

impl AppCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AppCategory::Browser => "browser",
            AppCategory::Ide => "ide",
            AppCategory::Terminal => "terminal",
            AppCategory::FileManager => "file_manager",
            AppCategory::Document => "document",
            AppCategory::Unknown => "unknown",
        }
    }
}

/// A category and the class keywords that select it.
pub struct CategoryRule {
    pub category: AppCategory,
    pub keywords: &'static [&'static str],
    /// Also try each keyword with its hyphens removed ("bravebrowser").
    pub match_unhyphenated: bool,
}

/// Rules in precedence order; the first match wins.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: AppCategory::Browser,
        keywords: &["firefox", "chrome", "brave-browser", "chromium", "safari", "edge"],
        match_unhyphenated: true,
    },
    CategoryRule {
        category: AppCategory::Ide,
        keywords: &[
            "code", "cursor", "atom", "sublime", "intellij", "pycharm", "vscode", "vim", "emacs",
            "gedit",
        ],
        match_unhyphenated: false,
    },
    CategoryRule {
        category: AppCategory::Terminal,
        keywords: &["gnome-terminal", "terminal", "konsole", "xterm", "alacritty", "terminator"],
        match_unhyphenated: false,
    },
    CategoryRule {
        category: AppCategory::FileManager,
        keywords: &["nautilus", "files", "dolphin", "thunar", "pcmanfm", "nemo"],
        match_unhyphenated: false,
    },
    CategoryRule {
        category: AppCategory::Document,
        keywords: &[
            "evince", "okular", "libreoffice", "writer", "calc", "impress", "draw", "math",
            "acroread", "xpdf",
        ],
        match_unhyphenated: false,
    },
];

impl CategoryRule {
    fn matches(&self, class_lower: &str) -> bool {
        self.keywords.iter().any(|keyword| {
            class_lower.contains(keyword)
                || (self.match_unhyphenated && class_lower.contains(&keyword.replace('-', "")))
        })
    }
}

/// Classifies a window by case-insensitive keyword match on its class.
///
/// The title is accepted for future title-based rules but does not take part
/// in matching today.
pub fn classify(window_class: &str, _window_title: &str) -> AppCategory {
    let class_lower = window_class.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&class_lower))
        .map_or(AppCategory::Unknown, |rule| rule.category)
}
