//! Random content provider backed by `lipsum`

use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{lorem, markdown, ContentProvider, PostSize};

/// Produces lorem ipsum titles and markdown bodies
///
/// Titles and bodies are reproducible when built with [`FakeProvider::with_seed`];
/// timestamps always come from the system clock.
pub struct FakeProvider {
    rng: StdRng,
    title_words: usize,
}

impl FakeProvider {
    /// Create a provider seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a provider with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Set the nominal number of words in generated titles
    pub fn title_words(mut self, n: usize) -> Self {
        self.title_words = n.max(1);
        self
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            title_words: 3,
        }
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for FakeProvider {
    fn random_title(&mut self) -> String {
        lorem::sentence(&mut self.rng, self.title_words)
    }

    fn random_post(&mut self, size: PostSize) -> String {
        markdown::post(&mut self.rng, size)
    }

    fn now_utc_iso(&mut self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}
