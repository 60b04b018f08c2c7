//! Post document model

use std::fmt;

/// Locale tag written into every generated post
pub const LANGUAGE: &str = "en-GB";

/// A generated post, held in memory only until it is written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDocument {
    /// Post title
    pub title: String,

    /// Creation time, RFC 3339 in UTC
    pub timestamp: String,

    /// Locale tag, e.g. `en-GB`
    pub language: String,

    /// Comma separated tags; always empty for generated posts
    pub tags: String,

    /// Markdown body
    pub content: String,
}

impl PostDocument {
    /// Create a post with no tags
    pub fn new(
        title: impl Into<String>,
        timestamp: impl Into<String>,
        language: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            timestamp: timestamp.into(),
            language: language.into(),
            tags: String::new(),
            content: content.into(),
        }
    }

    /// Render the post as a markdown file with front-matter
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PostDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "---\ntitle: {}\ntimestamp: {}\nlanguage: {}\ntags: {}\n---\n\n{}",
            self.title, self.timestamp, self.language, self.tags, self.content
        )
    }
}
