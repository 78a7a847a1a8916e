use crate::font::Font;
use crate::units::Pt;

/// Calculate the width of a given string of text given the font and font size. Characters
/// the font has no glyph for take up no space.
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    let scaling = size / font.units_per_em() as f32;
    text.chars()
        .filter_map(|ch| font.glyph_advance(ch))
        .map(|advance| scaling * advance as f32)
        .sum()
}

/// Greedily wraps `text` into lines no wider than `max_width`, measured with `font` at `size`.
///
/// Words are separated by any run of whitespace and re-joined with single spaces. A word is
/// moved onto a new line only when appending it would push the current line past
/// `max_width`; a single word that is wider than `max_width` on its own still gets a line
/// to itself rather than being split. Empty (or all-whitespace) text produces no lines.
pub fn wrap_text(text: &str, max_width: Pt, font: &Font, size: Pt) -> Vec<String> {
    let mut lines: Vec<String> = Vec::default();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if width_of_text(&candidate, font, size) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
