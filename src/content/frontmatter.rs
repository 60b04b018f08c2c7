//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Accepts `tags:` left empty, a comma separated string, or a list
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::List(tags)) => tags,
        Some(Tags::Joined(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    })
}

/// Front-matter of a post file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// The full title of the post
    pub title: String,
    /// Parsed as RFC 3339
    pub timestamp: DateTime<FixedOffset>,
    /// Locale tag of the post body
    pub language: String,
    /// Topics the post is related to
    #[serde(deserialize_with = "deserialize_tags", default)]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Split a post file into its front-matter and body
    ///
    /// The file must open with `---` and close the block with a `---` line;
    /// the blank line after the closing delimiter is not part of the body.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let rest = content
            .strip_prefix("---")
            .ok_or_else(|| anyhow!("missing opening `---`"))?;
        let rest = strip_newline(rest);

        let end_pos = if rest.starts_with("---") {
            0
        } else {
            rest.find("\n---")
                .map(|pos| pos + 1)
                .ok_or_else(|| anyhow!("missing closing `---`"))?
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 3..];
        // End of the closing delimiter line, then the blank separator line
        let remaining = strip_newline(strip_newline(remaining));

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?;

        Ok((fm, remaining))
    }
}

fn strip_newline(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}
