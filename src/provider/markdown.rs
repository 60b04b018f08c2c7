//! Markdown-structured fake post bodies

use rand::Rng;

use super::lorem;
use super::PostSize;

/// Build a markdown body made of `##` sections
pub(crate) fn post<R: Rng + ?Sized>(rng: &mut R, size: PostSize) -> String {
    let (min, max) = size.sections();
    let count = rng.gen_range(min..=max);

    let sections: Vec<String> = (0..count).map(|_| section(rng)).collect();
    let mut body = sections.join("\n\n");
    body.push('\n');
    body
}

fn section<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut blocks = vec![heading(rng)];

    for _ in 0..rng.gen_range(1..=3) {
        blocks.push(paragraph(rng));
    }

    match rng.gen_range(0..5) {
        0 => blocks.push(bullet_list(rng)),
        1 => blocks.push(numbered_list(rng)),
        2 => blocks.push(quote(rng)),
        3 => blocks.push(code_block(rng)),
        _ => {}
    }

    blocks.join("\n\n")
}

fn heading<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("## {}", lorem::title(rng))
}

/// A paragraph with the occasional bold or italic word
fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let text = lorem::paragraph(rng, 5);
    let mut words: Vec<String> = text.split(' ').map(str::to_string).collect();

    if words.len() > 2 && rng.gen_bool(0.5) {
        let i = rng.gen_range(1..words.len() - 1);
        let marker = if rng.gen_bool(0.5) { "**" } else { "_" };
        let word = words[i]
            .trim_end_matches(|c: char| !c.is_alphanumeric())
            .to_string();
        if !word.is_empty() {
            let tail = words[i][word.len()..].to_string();
            words[i] = format!("{marker}{word}{marker}{tail}");
        }
    }

    words.join(" ")
}

fn bullet_list<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..rng.gen_range(2..=5))
        .map(|_| format!("- {}", lorem::sentence(rng, 6)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered_list<R: Rng + ?Sized>(rng: &mut R) -> String {
    (1..=rng.gen_range(2..=5))
        .map(|i| format!("{}. {}", i, lorem::sentence(rng, 6)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("> {}", lorem::paragraph(rng, 2))
}

fn code_block<R: Rng + ?Sized>(rng: &mut R) -> String {
    let lines: Vec<String> = (0..rng.gen_range(2..=4))
        .map(|_| format!("{} = \"{}\"", lorem::word(rng), lorem::sentence(rng, 3)))
        .collect();
    format!("```\n{}\n```", lines.join("\n"))
}
