//! List generated posts

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::content::{BodyStats, FrontMatter};
use crate::PostsGen;

/// Summary of one post file on disk
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub file_name: String,
    pub front_matter: FrontMatter,
    pub stats: BodyStats,
}

/// Read and summarise every markdown file in the output directory
///
/// Files are returned in file name order. Files that cannot be read as UTF-8
/// text or have no valid front-matter are skipped with a warning.
pub fn load(output_dir: &Path) -> Result<Vec<PostSummary>> {
    let paths: Vec<PathBuf> = WalkDir::new(output_dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_markdown_file(p))
        .collect();

    let mut posts = Vec::with_capacity(paths.len());
    for path in paths {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read post {:?}: {}", path, e);
                continue;
            }
        };

        match FrontMatter::parse(&content) {
            Ok((front_matter, body)) => posts.push(PostSummary {
                file_name: file_name(&path),
                front_matter,
                stats: BodyStats::of(body),
            }),
            Err(e) => {
                tracing::warn!("Failed to parse post {:?}: {}", path, e);
            }
        }
    }

    Ok(posts)
}

/// Print a one-line summary per post
pub fn run(posts_gen: &PostsGen) -> Result<()> {
    if !posts_gen.output_dir.is_dir() {
        anyhow::bail!("Output directory not found: {:?}", posts_gen.output_dir);
    }

    let posts = load(&posts_gen.output_dir)?;
    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {}  {}  {} ({} words, {} headings)",
            post.file_name,
            post.front_matter.timestamp.format("%Y-%m-%d %H:%M:%S"),
            post.front_matter.title,
            post.stats.words,
            post.stats.headings
        );
    }

    Ok(())
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("markdown"))
        .unwrap_or(false)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
