use super::{normalize, wrap_text};
use crate::colour::Colour;
use crate::document::Document;
use crate::page::{DrawOp, SpanFont, SpanLayout};
use crate::units::Pt;

/// Extra space left after every paragraph, as a fraction of the line height
pub const PARAGRAPH_GAP: f32 = 0.3;

/// The part of the page body text flows through
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyRegion {
    /// Left edge of every line, unless `centered` is set
    pub margin_x: Pt,
    /// The widest a line may be before it wraps
    pub usable_width: Pt,
    /// The font lines are both measured and drawn with
    pub font: SpanFont,
    /// Distance between consecutive baselines
    pub line_height: Pt,
    /// Nothing is laid out once the cursor has dropped below this
    pub min_y: Pt,
    /// Center each line on the page instead of aligning it to `margin_x`
    pub centered: bool,
    pub page_width: Pt,
    pub colour: Colour,
}

/// Lays out `body` as a column of paragraphs starting with a baseline at `start_y`.
///
/// The body is split into paragraphs on blank lines. Each paragraph has its markdown
/// stripped with [normalize], is wrapped to `region.usable_width` and is then laid out one
/// line per `region.line_height`, with an extra [PARAGRAPH_GAP] of a line between
/// paragraphs.
///
/// Layout stops as soon as the cursor is below `region.min_y`, either between paragraphs or
/// in the middle of one; whatever hasn't been laid out at that point is dropped. This never
/// fails.
///
/// Returns the laid out lines, and the cursor where the next line would have gone.
pub fn layout_paragraphs(
    document: &Document,
    body: &str,
    start_y: Pt,
    region: &BodyRegion,
) -> (Vec<DrawOp>, Pt) {
    let body = body.replace("\r\n", "\n").replace('\r', "\n");
    let paragraphs = split_paragraphs(&body);

    let font = &document.fonts[region.font.id];
    let mut ops: Vec<DrawOp> = Vec::default();
    let mut y = start_y;

    for (index, paragraph) in paragraphs.iter().enumerate() {
        if y < region.min_y {
            log::debug!(
                "body truncated at y={y}: dropped {} of {} paragraphs",
                paragraphs.len() - index,
                paragraphs.len()
            );
            break;
        }

        let text = normalize(paragraph.trim());
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let lines = wrap_text(text, region.usable_width, font, region.font.size);
        let line_count = lines.len();
        for (line_index, line) in lines.into_iter().enumerate() {
            if y < region.min_y {
                log::debug!(
                    "body truncated at y={y}: dropped {} of {} lines in paragraph {}",
                    line_count - line_index,
                    line_count,
                    index + 1
                );
                break;
            }

            let x = if region.centered {
                (region.page_width - document.width_of(&line, region.font)) / 2.0
            } else {
                region.margin_x
            };

            ops.push(DrawOp::Text(SpanLayout {
                text: line,
                font: region.font,
                colour: region.colour,
                coords: (x, y),
            }));
            y -= region.line_height;
        }

        y -= region.line_height * PARAGRAPH_GAP;
    }

    (ops, y)
}

/// Split on every run of two or more newlines
fn split_paragraphs(body: &str) -> Vec<&str> {
    let mut paragraphs = Vec::default();
    let mut start = 0;
    let mut i = 0;
    let bytes = body.as_bytes();

    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let run = bytes[i..].iter().take_while(|&&b| b == b'\n').count();
            if run >= 2 {
                paragraphs.push(&body[start..i]);
                start = i + run;
            }
            i += run;
        } else {
            i += 1;
        }
    }
    paragraphs.push(&body[start..]);

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::font::{Font, StandardFont};
    use crate::page::Page;
    use crate::pagesize;

    fn setup() -> (Document, SpanFont) {
        let mut document = Document::new(Page::new(pagesize::A4, None));
        let id = document.add_font(Font::Standard(StandardFont::Helvetica));
        (document, SpanFont { id, size: Pt(11.0) })
    }

    fn region(font: SpanFont, min_y: f32) -> BodyRegion {
        BodyRegion {
            margin_x: Pt(50.0),
            usable_width: Pt(495.28),
            font,
            line_height: Pt(17.0),
            min_y: Pt(min_y),
            centered: false,
            page_width: Pt(595.28),
            colour: colours::INK,
        }
    }

    fn baselines(ops: &[DrawOp]) -> Vec<f32> {
        ops.iter()
            .map(|op| match op {
                DrawOp::Text(span) => span.coords.1 .0,
                other => panic!("unexpected op {other:?}"),
            })
            .collect()
    }

    #[test]
    fn splits_on_blank_lines_only() {
        assert_eq!(split_paragraphs("a\nb\n\nc"), vec!["a\nb", "c"]);
        assert_eq!(split_paragraphs("a\n\n\n\nb"), vec!["a", "b"]);
        assert_eq!(split_paragraphs(""), vec![""]);
        assert_eq!(split_paragraphs("\n\na"), vec!["", "a"]);
    }

    #[test]
    fn paragraphs_are_spaced_by_a_gap() {
        let (document, font) = setup();
        let region = region(font, 100.0);
        let (ops, end) = layout_paragraphs(&document, "Hello.\n\nWorld.", Pt(700.0), &region);

        assert_eq!(ops.len(), 2);
        let ys = baselines(&ops);
        assert_eq!(ys[0], 700.0);
        assert!((ys[0] - ys[1] - 17.0 * 1.3).abs() < 1e-3);
        assert!((end.0 - (700.0 - 2.0 * 17.0 * 1.3)).abs() < 1e-3);
        assert_eq!(ops[0].text(), Some("Hello."));
        assert_eq!(ops[1].text(), Some("World."));
    }

    #[test]
    fn lines_within_a_paragraph_use_the_line_height() {
        let (document, font) = setup();
        let mut region = region(font, 100.0);
        region.usable_width = Pt(60.0);
        let body = "one two three four five six";
        let (ops, _) = layout_paragraphs(&document, body, Pt(700.0), &region);

        assert!(ops.len() > 1);
        let ys = baselines(&ops);
        for pair in ys.windows(2) {
            assert!((pair[0] - pair[1] - 17.0).abs() < 1e-3);
        }
    }

    #[test]
    fn crlf_bodies_split_like_lf_bodies() {
        let (document, font) = setup();
        let region = region(font, 100.0);
        let (lf, _) = layout_paragraphs(&document, "one\n\ntwo", Pt(700.0), &region);
        let (crlf, _) = layout_paragraphs(&document, "one\r\n\r\ntwo", Pt(700.0), &region);
        assert_eq!(lf, crlf);
    }

    #[test]
    fn markdown_is_stripped_and_blank_paragraphs_skipped() {
        let (document, font) = setup();
        let (ops, end) = layout_paragraphs(
            &document,
            "## Heading\n\n   \n\n- **point**",
            Pt(700.0),
            &region(font, 100.0),
        );
        assert_eq!(ops[0].text(), Some("Heading"));
        assert_eq!(ops[1].text(), Some("• point"));
        assert_eq!(ops.len(), 2);
        // the whitespace-only paragraph takes no space at all
        assert!((end.0 - (700.0 - 2.0 * 17.0 * 1.3)).abs() < 1e-3);
    }

    #[test]
    fn indented_markers_are_still_recognised() {
        let (document, font) = setup();
        let (ops, _) = layout_paragraphs(
            &document,
            "  - item\n\n  ## Heading\n\n\t* star",
            Pt(700.0),
            &region(font, 100.0),
        );
        assert_eq!(ops[0].text(), Some("• item"));
        assert_eq!(ops[1].text(), Some("Heading"));
        assert_eq!(ops[2].text(), Some("• star"));
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn stops_below_the_floor() {
        let (document, font) = setup();
        let body = (0..20)
            .map(|i| format!("Paragraph number {i}."))
            .collect::<Vec<_>>()
            .join("\n\n");
        let (ops, end) = layout_paragraphs(&document, &body, Pt(300.0), &region(font, 200.0));

        // each paragraph costs 22.1pt: 300, 277.9, 255.8, 233.7, 211.6 all start above 200
        assert_eq!(ops.len(), 5);
        assert_eq!(ops[4].text(), Some("Paragraph number 4."));
        for y in baselines(&ops) {
            assert!(y >= 200.0);
        }
        assert!(end.0 < 200.0);
    }

    #[test]
    fn stops_in_the_middle_of_a_paragraph() {
        let (document, font) = setup();
        let mut region = region(font, 660.0);
        region.usable_width = Pt(40.0);
        let body = "one two three four five six seven";
        let (ops, _) = layout_paragraphs(&document, body, Pt(700.0), &region);

        // baselines at 700, 683 and 666 are above the floor, 649 is not
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn starting_below_the_floor_lays_out_nothing() {
        let (document, font) = setup();
        let (ops, end) = layout_paragraphs(&document, "text", Pt(50.0), &region(font, 100.0));
        assert!(ops.is_empty());
        assert_eq!(end, Pt(50.0));
    }

    #[test]
    fn centered_lines_are_centered_on_the_page() {
        let (document, font) = setup();
        let mut region = region(font, 100.0);
        region.centered = true;
        let (ops, _) = layout_paragraphs(&document, "centered", Pt(700.0), &region);

        let DrawOp::Text(span) = &ops[0] else {
            panic!("expected text");
        };
        let width = document.width_of("centered", font);
        let left = span.coords.0;
        let right = Pt(595.28) - (left + width);
        assert!((left.0 - right.0).abs() < 1e-3);
    }

    #[test]
    fn lines_are_drawn_with_the_measuring_font() {
        let (document, font) = setup();
        let region = region(font, 100.0);
        let (ops, _) = layout_paragraphs(&document, "same font", Pt(700.0), &region);
        let DrawOp::Text(span) = &ops[0] else {
            panic!("expected text");
        };
        assert_eq!(span.font, region.font);
        assert_eq!(span.colour, colours::INK);
    }
}
