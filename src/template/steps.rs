use crate::colour::Colour;
use crate::document::{Document, Typefaces};
use crate::font::FontStyle;
use crate::page::{DrawOp, LineLayout, RectLayout, SpanLayout, Stroke};
use crate::rect::Rect;
use crate::request::RenderRequest;
use crate::units::Pt;

/// Long-form date used by the templates, e.g. `January 5, 2024`
pub const LONG_DATE: &str = "%B %-d, %Y";

/// The page a recipe is being drawn onto
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
    pub margin: Pt,
    /// Height kept free at the bottom of the page for a signature block, or zero if the
    /// document isn't signed
    pub signature_band: Pt,
}

/// A length or coordinate expressed in terms of the page it is drawn on: each coefficient
/// multiplies the matching [PageGeometry] dimension, and `offset` is added in points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measure {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub band: f32,
    pub offset: f32,
}

impl Measure {
    pub const fn new(width: f32, height: f32, margin: f32, offset: f32) -> Measure {
        Measure {
            width,
            height,
            margin,
            band: 0.0,
            offset,
        }
    }

    /// A fixed number of points
    pub const fn fixed(offset: f32) -> Measure {
        Measure::new(0.0, 0.0, 0.0, offset)
    }

    /// `offset` points below the top edge of the page
    pub const fn from_top(offset: f32) -> Measure {
        Measure::new(0.0, 1.0, 0.0, -offset)
    }

    /// `offset` points in from the left margin
    pub const fn margin(offset: f32) -> Measure {
        Measure::new(0.0, 0.0, 1.0, offset)
    }

    /// `offset` points above the top of the signature band
    pub const fn above_band(offset: f32) -> Measure {
        Measure {
            width: 0.0,
            height: 0.0,
            margin: 1.0,
            band: 1.0,
            offset,
        }
    }

    pub fn resolve(&self, page: &PageGeometry) -> Pt {
        page.width * self.width
            + page.height * self.height
            + page.margin * self.margin
            + page.signature_band * self.band
            + Pt(self.offset)
    }
}

/// The left margin
pub const MARGIN: Measure = Measure::margin(0.0);
/// The right margin
pub const RIGHT_MARGIN: Measure = Measure::new(1.0, 0.0, -1.0, 0.0);
/// The full width of the page
pub const PAGE_WIDTH: Measure = Measure::new(1.0, 0.0, 0.0, 0.0);
/// The width between the margins
pub const USABLE_WIDTH: Measure = Measure::new(1.0, 0.0, -2.0, 0.0);

/// Where a text step starts horizontally
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HAnchor {
    /// Left edge at the given x
    At(Measure),
    /// Centered on the page
    Centered,
    /// Right edge at the given x
    RightAt(Measure),
}

/// Where the baseline of a text step or a rule goes
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VAnchor {
    /// At the cursor
    Cursor,
    /// At a fixed height, leaving the cursor alone
    At(Measure),
    /// At a fixed height which depends on whether the document is signed
    BySignature { unsigned: Measure, signed: Measure },
}

/// What a field falls back to when it is absent
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Fallback {
    Text(&'static str),
    Title,
}

/// A single piece of document data
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Title,
    /// The creation date, long form
    CreatedDate,
    /// A template field; absent when missing or empty
    Field(&'static str),
    /// A template field, or a fallback when the key is missing. An empty value is kept.
    FieldOr(&'static str, Fallback),
    /// The first of several template fields whose key is set; absent when that value is empty
    FirstOf(&'static [&'static str]),
}

impl Value {
    /// The value's text, or [None] when it is absent
    pub fn resolve(&self, request: &RenderRequest) -> Option<String> {
        match self {
            Value::Title => Some(request.title.clone()),
            Value::CreatedDate => Some(request.created_at.format(LONG_DATE).to_string()),
            Value::Field(key) => request
                .field_value(key)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            Value::FieldOr(key, fallback) => Some(match request.field_value(key) {
                Some(value) => value.to_string(),
                None => match fallback {
                    Fallback::Text(text) => text.to_string(),
                    Fallback::Title => request.title.clone(),
                },
            }),
            Value::FirstOf(keys) => keys
                .iter()
                .find_map(|key| request.field_value(key))
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }
}

/// The text a text step draws
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Content {
    Literal(&'static str),
    Value(Value),
    /// Each `{}` in the pattern is replaced by the next value, absent values by nothing.
    /// Absent altogether when every value is absent or empty.
    Pattern(&'static str, &'static [Value]),
    /// The non-empty values joined by a separator; absent when there are none
    Join(&'static str, &'static [Value]),
    Upper(Value),
}

impl Content {
    /// The text to draw, or [None] when the step should be skipped
    pub fn resolve(&self, request: &RenderRequest) -> Option<String> {
        match self {
            Content::Literal(text) => Some(text.to_string()),
            Content::Value(value) => value.resolve(request),
            Content::Pattern(pattern, values) => {
                let resolved: Vec<Option<String>> =
                    values.iter().map(|value| value.resolve(request)).collect();
                if resolved.iter().flatten().all(String::is_empty) {
                    return None;
                }

                let mut resolved = resolved.into_iter();
                let mut out = String::with_capacity(pattern.len());
                for (i, piece) in pattern.split("{}").enumerate() {
                    if i > 0 {
                        out.push_str(&resolved.next().flatten().unwrap_or_default());
                    }
                    out.push_str(piece);
                }
                Some(out)
            }
            Content::Join(separator, values) => {
                let present: Vec<String> = values
                    .iter()
                    .filter_map(|value| value.resolve(request))
                    .filter(|text| !text.is_empty())
                    .collect();
                if present.is_empty() {
                    None
                } else {
                    Some(present.join(separator))
                }
            }
            Content::Upper(value) => value.resolve(request).map(|text| text.to_uppercase()),
        }
    }
}

/// A single line of text in a template
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStep {
    pub content: Content,
    pub style: FontStyle,
    pub size: f32,
    pub colour: Colour,
    pub x: HAnchor,
    pub y: VAnchor,
    /// How far the cursor moves down after the text is drawn. Skipped steps don't move it.
    pub advance: f32,
}

impl TextStep {
    /// Text at the left margin on the cursor, which stays put afterwards
    pub const fn new(content: Content, style: FontStyle, size: f32, colour: Colour) -> TextStep {
        TextStep {
            content,
            style,
            size,
            colour,
            x: HAnchor::At(MARGIN),
            y: VAnchor::Cursor,
            advance: 0.0,
        }
    }

    pub const fn centered(self) -> TextStep {
        TextStep {
            x: HAnchor::Centered,
            ..self
        }
    }

    pub const fn at_x(self, x: Measure) -> TextStep {
        TextStep {
            x: HAnchor::At(x),
            ..self
        }
    }

    pub const fn right_at(self, x: Measure) -> TextStep {
        TextStep {
            x: HAnchor::RightAt(x),
            ..self
        }
    }

    pub const fn at_y(self, y: VAnchor) -> TextStep {
        TextStep { y, ..self }
    }

    pub const fn advance(self, advance: f32) -> TextStep {
        TextStep { advance, ..self }
    }
}

/// One instruction of a template recipe
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// A rectangle with its lower-left corner at `(x, y)`
    Rect {
        x: Measure,
        y: Measure,
        width: Measure,
        height: Measure,
        fill: Option<Colour>,
        stroke: Option<Stroke>,
    },
    /// A horizontal rule
    Rule {
        from: Measure,
        to: Measure,
        y: VAnchor,
        stroke: Stroke,
    },
    Text(TextStep),
    /// Move the cursor down
    Advance(f32),
    /// Put the cursor at an absolute height
    MoveTo(Measure),
}

/// Everything a step needs to know to draw itself
#[derive(Copy, Clone, Debug)]
pub struct StepContext<'a> {
    pub request: &'a RenderRequest,
    pub page: PageGeometry,
    pub typefaces: Typefaces,
}

impl StepContext<'_> {
    fn y(&self, anchor: &VAnchor, cursor: Pt) -> Pt {
        match anchor {
            VAnchor::Cursor => cursor,
            VAnchor::At(y) => y.resolve(&self.page),
            VAnchor::BySignature { unsigned, signed } => {
                if self.request.is_signed() {
                    signed.resolve(&self.page)
                } else {
                    unsigned.resolve(&self.page)
                }
            }
        }
    }
}

impl Step {
    /// Draw this step with the cursor at `cursor`, returning what was drawn (if anything)
    /// and where the cursor ends up
    pub fn draw(
        &self,
        document: &Document,
        context: &StepContext,
        cursor: Pt,
    ) -> (Option<DrawOp>, Pt) {
        let page = &context.page;
        match self {
            Step::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                let position = Rect::from_origin(
                    x.resolve(page),
                    y.resolve(page),
                    width.resolve(page),
                    height.resolve(page),
                );
                let rect = RectLayout {
                    position,
                    fill: *fill,
                    stroke: *stroke,
                };
                (Some(DrawOp::Rect(rect)), cursor)
            }
            Step::Rule { from, to, y, stroke } => {
                let y = context.y(y, cursor);
                let line = LineLayout {
                    from: (from.resolve(page), y),
                    to: (to.resolve(page), y),
                    stroke: *stroke,
                };
                (Some(DrawOp::Line(line)), cursor)
            }
            Step::Text(text) => text.draw(document, context, cursor),
            Step::Advance(by) => (None, cursor - Pt(*by)),
            Step::MoveTo(y) => (None, y.resolve(page)),
        }
    }
}

impl TextStep {
    fn draw(&self, document: &Document, context: &StepContext, cursor: Pt) -> (Option<DrawOp>, Pt) {
        let Some(text) = self.content.resolve(context.request) else {
            return (None, cursor);
        };

        let font = context.typefaces.span(self.style, Pt(self.size));
        let x = match &self.x {
            HAnchor::At(x) => x.resolve(&context.page),
            HAnchor::Centered => (context.page.width - document.width_of(&text, font)) / 2.0,
            HAnchor::RightAt(x) => x.resolve(&context.page) - document.width_of(&text, font),
        };
        let y = context.y(&self.y, cursor);

        let span = SpanLayout {
            text,
            font,
            colour: self.colour,
            coords: (x, y),
        };
        (Some(DrawOp::Text(span)), cursor - Pt(self.advance))
    }
}

/// Draw `steps` in order starting at `cursor`, returning everything drawn and the final cursor
pub fn draw_steps(
    steps: &[Step],
    document: &Document,
    context: &StepContext,
    cursor: Pt,
) -> (Vec<DrawOp>, Pt) {
    let mut ops = Vec::with_capacity(steps.len());
    let mut cursor = cursor;
    for step in steps {
        let (op, next) = step.draw(document, context, cursor);
        ops.extend(op);
        cursor = next;
    }
    (ops, cursor)
}
