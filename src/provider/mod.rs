//! Content providers - the source of titles, bodies and timestamps for posts

mod fake;
mod lorem;
mod markdown;

pub use fake::FakeProvider;

use std::fmt;

/// Size category of a generated post body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl PostSize {
    /// Inclusive range of `##` sections a body of this size contains
    pub fn sections(self) -> (usize, usize) {
        match self {
            PostSize::Small => (1, 2),
            PostSize::Medium => (3, 5),
            PostSize::Large => (6, 10),
        }
    }
}

impl fmt::Display for PostSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostSize::Small => "small",
            PostSize::Medium => "medium",
            PostSize::Large => "large",
        };
        f.write_str(name)
    }
}

/// Supplies the random parts of a post
///
/// The generator only talks to this trait, so tests can swap in a provider
/// with fixed output.
pub trait ContentProvider {
    /// A short sentence used as the post title
    fn random_title(&mut self) -> String;

    /// A markdown body of the given size
    fn random_post(&mut self, size: PostSize) -> String;

    /// A markdown body of the size used for generated posts
    fn random_large_body(&mut self) -> String {
        self.random_post(PostSize::Large)
    }

    /// The current time in UTC as an RFC 3339 string with a `T` separator
    fn now_utc_iso(&mut self) -> String;
}
