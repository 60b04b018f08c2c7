//! Generate fake posts

use anyhow::Result;
use std::path::PathBuf;

use crate::generator::Generator;
use crate::provider::FakeProvider;
use crate::PostsGen;

/// Write the configured number of posts into the output directory
pub fn run(posts_gen: &PostsGen) -> Result<Vec<PathBuf>> {
    let start = std::time::Instant::now();
    let config = &posts_gen.config;

    let provider = match config.seed {
        Some(seed) => {
            tracing::debug!("Using fixed seed {}", seed);
            FakeProvider::with_seed(seed)
        }
        None => FakeProvider::new(),
    }
    .title_words(config.title_words);

    let mut generator = Generator::new(provider);
    let written = generator.generate(&posts_gen.output_dir, config.count)?;

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_uses_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();
        fs::write(
            dir.path().join(crate::config::CONFIG_FILE),
            "count: 4\noutput_dir: out\nseed: 11\n",
        )
        .unwrap();

        let posts_gen = PostsGen::new(dir.path()).unwrap();
        let written = run(&posts_gen).unwrap();

        assert_eq!(written.len(), 4);
        assert!(dir.path().join("out/post004.md").is_file());
        assert!(!dir.path().join("out/post005.md").exists());
    }

    #[test]
    fn test_language_is_fixed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("posts")).unwrap();
        fs::write(
            dir.path().join(crate::config::CONFIG_FILE),
            "count: 1\nlanguage: \"fr: FR\"\n",
        )
        .unwrap();

        let posts_gen = PostsGen::new(dir.path()).unwrap();
        let written = run(&posts_gen).unwrap();

        let text = fs::read_to_string(&written[0]).unwrap();
        assert_eq!(text.lines().nth(3), Some("language: en-GB"));
    }

    #[test]
    fn test_run_without_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let posts_gen = PostsGen::new(dir.path()).unwrap();
        assert!(run(&posts_gen).is_err());
        assert!(!dir.path().join("posts").exists());
    }
}
