//! Lorem ipsum sentences and paragraphs on top of `lipsum`

use rand::Rng;

/// A capitalized sentence ending in a period
///
/// The word count is varied to 60-140% of `nb_words`, never below one.
/// Only letters, digits, spaces and commas are kept so the sentence can be
/// used as a plain YAML value.
pub(crate) fn sentence<R: Rng + ?Sized>(rng: &mut R, nb_words: usize) -> String {
    let n = vary(rng, nb_words);
    let text: String = lipsum::lipsum_words_with_rng(&mut *rng, n)
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == ',')
        .collect();
    let mut sentence = capitalize(text.trim().trim_end_matches(','));
    sentence.push('.');
    sentence
}

/// A paragraph of roughly `nb_sentences` sentences
pub(crate) fn paragraph<R: Rng + ?Sized>(rng: &mut R, nb_sentences: usize) -> String {
    let n = vary(rng, nb_sentences);
    (0..n)
        .map(|_| sentence(rng, 8))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A title-cased phrase without trailing punctuation
pub(crate) fn title<R: Rng + ?Sized>(rng: &mut R) -> String {
    lipsum::lipsum_title_with_rng(&mut *rng)
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}

/// A single lowercase word
pub(crate) fn word<R: Rng + ?Sized>(rng: &mut R) -> String {
    lipsum::lipsum_words_with_rng(&mut *rng, 1)
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Scale `n` by a random factor in [0.6, 1.4), with a floor of one
fn vary<R: Rng + ?Sized>(rng: &mut R, n: usize) -> usize {
    let factor: f64 = rng.gen_range(0.6..1.4);
    ((n as f64 * factor) as usize).max(1)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let sentence = sentence(&mut rng, 3);
            assert!(sentence.ends_with('.'));
            assert!(!sentence.ends_with(",."));
            assert!(!sentence.contains(':'));
            assert!(sentence.chars().next().unwrap().is_uppercase());
            let words = sentence.split_whitespace().count();
            assert!((1..=4).contains(&words), "{} words in {:?}", words, sentence);
        }
    }

    #[test]
    fn test_seeded_text_repeats() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        assert_eq!(paragraph(&mut a, 4), paragraph(&mut b, 4));
        assert_eq!(title(&mut a), title(&mut b));
    }

    #[test]
    fn test_word_is_clean() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let w = word(&mut rng);
            assert!(!w.is_empty());
            assert!(w.chars().all(|c| c.is_alphanumeric() && !c.is_uppercase()));
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("dolor sit"), "Dolor sit");
        assert_eq!(capitalize(""), "");
    }
}
