//! Strips the small markdown dialect that generated document bodies tend to contain.
//!
//! Each rule is a single left-to-right pass over the whole string, applied in this order:
//!
//! 1. `**strong**` → `strong`
//! 2. `*em*` → `em`
//! 3. `__strong__` → `strong`
//! 4. `_em_` → `em`
//! 5. leading `#` heading markers (and the whitespace after them) are removed
//! 6. a leading `-` or `*` list marker becomes a `•` bullet
//!
//! Numbered list items are left alone. There is no nesting: the passes are plain
//! substitutions, not a markdown parser.
//!
//! ```
//! use doc_layout::layout::normalize;
//!
//! assert_eq!(normalize("## Summary"), "Summary");
//! assert_eq!(normalize("- **Fast** and _simple_"), "• Fast and simple");
//! assert_eq!(normalize("1. First"), "1. First");
//! ```

/// Remove the supported markdown markers from `text`, keeping the text they decorate
pub fn normalize(text: &str) -> String {
    let text = strip_emphasis(text, "**");
    let text = strip_emphasis(&text, "*");
    let text = strip_emphasis(&text, "__");
    let text = strip_emphasis(&text, "_");
    let text = strip_headings(&text);
    replace_bullets(&text)
}

fn is_line_start(text: &str, i: usize) -> bool {
    i == 0 || text.as_bytes()[i - 1] == b'\n'
}

fn push_char_at(out: &mut String, text: &str, i: usize) -> usize {
    match text[i..].chars().next() {
        Some(ch) => {
            out.push(ch);
            i + ch.len_utf8()
        }
        None => text.len(),
    }
}

/// Replace every `<delimiter>inner<delimiter>` with `inner`, where `inner` is one or more
/// characters other than the delimiter's own character. Matches never overlap.
fn strip_emphasis(text: &str, delimiter: &str) -> String {
    let marker = delimiter.as_bytes()[0];
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        if text[i..].starts_with(delimiter) {
            let inner_start = i + delimiter.len();
            let inner_end = text.as_bytes()[inner_start..]
                .iter()
                .position(|&b| b == marker)
                .map(|offset| inner_start + offset);

            if let Some(inner_end) = inner_end {
                if inner_end > inner_start && text[inner_end..].starts_with(delimiter) {
                    out.push_str(&text[inner_start..inner_end]);
                    i = inner_end + delimiter.len();
                    continue;
                }
            }
        }

        i = push_char_at(&mut out, text, i);
    }

    out
}

/// Drop `#` runs at the start of a line along with all whitespace that follows them
fn strip_headings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        if is_line_start(text, i) && text.as_bytes()[i] == b'#' {
            let rest = text[i..].trim_start_matches('#').trim_start();
            i = text.len() - rest.len();
            continue;
        }

        i = push_char_at(&mut out, text, i);
    }

    out
}

/// Turn a `-` or `*` at the start of a line, followed by whitespace, into a bullet glyph
fn replace_bullets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let b = text.as_bytes()[i];
        if is_line_start(text, i) && (b == b'-' || b == b'*') {
            let rest = &text[i + 1..];
            let trimmed = rest.trim_start();
            if trimmed.len() < rest.len() {
                out.push_str("• ");
                i = text.len() - trimmed.len();
                continue;
            }
        }

        i = push_char_at(&mut out, text, i);
    }

    out
}
