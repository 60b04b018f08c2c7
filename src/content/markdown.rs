//! Markdown body statistics

use pulldown_cmark::{Event, Options, Parser, Tag};

/// Word and heading counts of a markdown body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyStats {
    pub words: usize,
    pub headings: usize,
}

impl BodyStats {
    /// Count the words of rendered text and the headings in `markdown`
    pub fn of(markdown: &str) -> Self {
        let mut stats = BodyStats::default();

        for event in Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH) {
            match event {
                Event::Start(Tag::Heading { .. }) => stats.headings += 1,
                Event::Text(text) | Event::Code(text) => {
                    stats.words += text.split_whitespace().count();
                }
                _ => {}
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let md = "## First heading\n\nOne **two** three.\n\n- four\n- five\n\n## Second\n\n```\nsix seven\n```\n";
        let stats = BodyStats::of(md);
        assert_eq!(stats.headings, 2);
        assert_eq!(stats.words, 10);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(BodyStats::of(""), BodyStats::default());
    }
}
