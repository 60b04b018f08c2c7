//! Content module - post documents, front-matter and markdown bodies

mod frontmatter;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use markdown::BodyStats;
pub use post::{PostDocument, LANGUAGE};
