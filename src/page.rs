use crate::colour::Colour;
use crate::font::Font;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;

/// Which font, and at which size, a span of text is measured and drawn with
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single run of text placed with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// The pen used to outline a rectangle or draw a line
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Stroke {
    pub colour: Colour,
    pub width: Pt,
}

/// A rectangle, filled, outlined, or both
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub position: Rect,
    pub fill: Option<Colour>,
    pub stroke: Option<Stroke>,
}

/// A straight line segment
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub stroke: Stroke,
}

/// An image from the document's image arena, stretched to fill `position`
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image: Id<Image>,
    pub position: Rect,
}

/// One absolute-positioned drawing instruction. Operations are painted in order, so later
/// operations cover earlier ones where they overlap.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawOp {
    Text(SpanLayout),
    Rect(RectLayout),
    Line(LineLayout),
    Image(ImageLayout),
}

impl DrawOp {
    /// The text of a [DrawOp::Text], if this is one
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text(span) => Some(span.text.as_str()),
            _ => None,
        }
    }
}

/// A single fixed-size page. Contents are append-only: nothing that has been laid out is
/// ever revisited.
#[derive(Clone, Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out contents, in painting order
    pub contents: Vec<DrawOp>,
}

impl Page {
    /// Create a new page with the given size and optional margins. Without margins the
    /// content box covers the whole page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(DrawOp::Text(span));
    }

    /// Append a batch of already laid out operations, keeping their order
    pub fn extend<I: IntoIterator<Item = DrawOp>>(&mut self, ops: I) {
        self.contents.extend(ops);
    }

    /// All text spans on the page, in painting order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().filter_map(|op| match op {
            DrawOp::Text(span) => Some(span),
            _ => None,
        })
    }
}
