//! Closed language tag set used for editor selection and content types.

mod content_type;

pub use content_type::{content_type_to_language, language_to_content_type, parse_content_type};

/// A named group of language tags for selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageGroup {
    pub label: &'static str,
    pub tags: &'static [&'static str],
}

/// Every recognized language tag, grouped the way selectors present them.
pub const LANGUAGE_GROUPS: &[LanguageGroup] = &[
    LanguageGroup {
        label: "config",
        tags: &["yaml", "json", "xml", "ini"],
    },
    LanguageGroup {
        label: "code",
        tags: &[
            "java",
            "javascript",
            "typescript",
            "python",
            "kotlin",
            "cpp",
            "csharp",
            "shell",
            "ruby",
            "rust",
            "sql",
            "go",
        ],
    },
    LanguageGroup {
        label: "web",
        tags: &["html", "css", "php"],
    },
    LanguageGroup {
        label: "misc",
        tags: &["plain", "dockerfile", "markdown"],
    },
];

/// Iterate over all recognized tags in group order.
pub fn language_ids() -> impl Iterator<Item = &'static str> {
    LANGUAGE_GROUPS
        .iter()
        .flat_map(|group| group.tags.iter().copied())
}

/// Look up `tag` in the closed set.
///
/// # Returns
/// The interned tag when `tag` matches exactly.
pub fn find_language(tag: &str) -> Option<&'static str> {
    language_ids().find(|known| *known == tag)
}

/// Exact membership test against the closed set.
pub fn is_known_language(tag: &str) -> bool {
    find_language(tag).is_some()
}
