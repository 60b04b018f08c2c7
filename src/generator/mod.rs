//! Post generator - writes numbered fake posts into an output directory

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::content::{PostDocument, LANGUAGE};
use crate::error::{GenerateError, Result};
use crate::provider::ContentProvider;

/// File name of the `index`-th post, e.g. `post007.md`
pub fn post_filename(index: usize) -> String {
    format!("post{:03}.md", index)
}

/// Lazily yields `(index, filename)` for posts `1..=count`
pub fn post_filenames(count: usize) -> impl Iterator<Item = (usize, String)> {
    (1..=count).map(|i| (i, post_filename(i)))
}

/// Writes fake posts using a content provider
pub struct Generator<P> {
    provider: P,
}

impl<P: ContentProvider> Generator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Assemble one post from fresh provider output
    pub fn build_post(&mut self) -> PostDocument {
        let title = self.provider.random_title();
        let timestamp = self.provider.now_utc_iso();
        let content = self.provider.random_large_body();
        PostDocument::new(title, timestamp, LANGUAGE, content)
    }

    /// Write `count` posts into `output_dir`, returning the written paths
    ///
    /// The directory must already exist. The first failed write aborts the
    /// run; posts written before it stay on disk.
    pub fn generate(&mut self, output_dir: &Path, count: usize) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for (_, filename) in post_filenames(count) {
            let path = output_dir.join(&filename);
            let post = self.build_post();
            write_post(&path, &post)?;
            tracing::debug!("Wrote {:?}", path);
            written.push(path);
        }

        tracing::info!("Generated {} posts in {:?}", written.len(), output_dir);
        Ok(written)
    }
}

/// Create or truncate `path` and write the rendered post into it
fn write_post(path: &Path, post: &PostDocument) -> Result<()> {
    let to_error = |source: std::io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(post.to_markdown().as_bytes())
        .map_err(to_error)?;
    Ok(())
}
