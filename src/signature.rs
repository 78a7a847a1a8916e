//! The signature block: a fixed-size box near the bottom of the page holding the signature
//! mark, a rule, and the signer's name, role and signing date.

use crate::colour::Colour;
use crate::document::{Document, Typefaces};
use crate::font::FontStyle;
use crate::image::Image;
use crate::page::{DrawOp, ImageLayout, LineLayout, SpanLayout, Stroke};
use crate::rect::Rect;
use crate::request::{SignatureDescriptor, SignatureMark};
use crate::template::PageGeometry;
use crate::units::Pt;

pub const BLOCK_WIDTH: Pt = Pt(180.0);
pub const BLOCK_HEIGHT: Pt = Pt(75.0);
/// Distance from the bottom of the page to the bottom of the block, clear of the footer
pub const BLOCK_BOTTOM: Pt = Pt(45.0);
/// The largest an image mark is scaled to
pub const MARK_MAX_WIDTH: Pt = Pt(160.0);
pub const MARK_MAX_HEIGHT: Pt = Pt(28.0);

/// Long-form short-month date used under the signature, e.g. `Jan 5, 2024`
pub const SHORT_DATE: &str = "%b %-d, %Y";

/// Where the signature block sits horizontally
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SignatureAnchor {
    /// Against the left margin
    Left,
    /// Centered on the page
    Center,
    /// Against the right margin
    #[default]
    Right,
}

impl SignatureAnchor {
    /// The left edge of the block
    pub fn block_x(&self, page: &PageGeometry) -> Pt {
        match self {
            SignatureAnchor::Left => page.margin,
            SignatureAnchor::Center => (page.width - BLOCK_WIDTH) / 2.0,
            SignatureAnchor::Right => page.width - page.margin - BLOCK_WIDTH,
        }
    }
}

/// Lays out the signature block for `signature`, top to bottom:
///
/// 1. the mark: the signature image scaled to fit, or the signer's name in italics for typed
///    signatures
/// 2. a rule across the block
/// 3. the signer's name, in bold
/// 4. the signer's role, if there is one
/// 5. the date the document was signed
///
/// Decoded signature images are added to the document's image arena. If the image can't be
/// decoded the mark is left out and the rest of the block is laid out as usual.
pub fn compose_signature(
    document: &mut Document,
    typefaces: &Typefaces,
    signature: &SignatureDescriptor,
    anchor: SignatureAnchor,
    page: &PageGeometry,
) -> Vec<DrawOp> {
    let start_x = anchor.block_x(page);
    let mut ops: Vec<DrawOp> = Vec::with_capacity(6);
    let mut y = BLOCK_BOTTOM + BLOCK_HEIGHT - Pt(10.0);

    let centered = |document: &Document, text: &str, style: FontStyle, size: f32| {
        let font = typefaces.span(style, Pt(size));
        start_x + (BLOCK_WIDTH - document.width_of(text, font)) / 2.0
    };

    match &signature.mark {
        SignatureMark::Drawn(bytes) | SignatureMark::Uploaded(bytes) => {
            match Image::decode(bytes.clone()) {
                Ok(image) => {
                    let scale =
                        (MARK_MAX_WIDTH.0 / image.width).min(MARK_MAX_HEIGHT.0 / image.height);
                    let width = Pt(image.width * scale);
                    let height = Pt(image.height * scale);
                    let id = document.add_image(image);

                    ops.push(DrawOp::Image(ImageLayout {
                        image: id,
                        position: Rect::from_origin(
                            start_x + (BLOCK_WIDTH - width) / 2.0,
                            y - height,
                            width,
                            height,
                        ),
                    }));
                    y -= height + Pt(2.0);
                }
                Err(e) => {
                    log::warn!(
                        "could not decode {:?} signature image for {}: {e}",
                        signature.kind(),
                        signature.signer_name
                    );
                }
            }
        }
        SignatureMark::Typed => {
            let name = signature.signer_name.as_str();
            ops.push(DrawOp::Text(SpanLayout {
                text: name.to_string(),
                font: typefaces.span(FontStyle::Italic, Pt(18.0)),
                colour: Colour::new_rgb(0.15, 0.15, 0.25),
                coords: (centered(document, name, FontStyle::Italic, 18.0), y - Pt(15.0)),
            }));
            y -= Pt(22.0);
        }
    }

    ops.push(DrawOp::Line(LineLayout {
        from: (start_x, y),
        to: (start_x + BLOCK_WIDTH, y),
        stroke: Stroke {
            colour: Colour::new_rgb(0.4, 0.4, 0.45),
            width: Pt(0.75),
        },
    }));
    y -= Pt(12.0);

    let name = signature.signer_name.as_str();
    ops.push(DrawOp::Text(SpanLayout {
        text: name.to_string(),
        font: typefaces.span(FontStyle::Bold, Pt(9.0)),
        colour: Colour::new_rgb(0.2, 0.2, 0.25),
        coords: (centered(document, name, FontStyle::Bold, 9.0), y),
    }));
    y -= Pt(10.0);

    if let Some(role) = signature.role() {
        ops.push(DrawOp::Text(SpanLayout {
            text: role.to_string(),
            font: typefaces.span(FontStyle::Italic, Pt(8.0)),
            colour: Colour::new_rgb(0.45, 0.45, 0.5),
            coords: (centered(document, role, FontStyle::Italic, 8.0), y),
        }));
        y -= Pt(10.0);
    }

    let date = signature.signed_at.format(SHORT_DATE).to_string();
    ops.push(DrawOp::Text(SpanLayout {
        font: typefaces.span(FontStyle::Regular, Pt(7.0)),
        colour: crate::colours::MUTED,
        coords: (centered(document, &date, FontStyle::Regular, 7.0), y),
        text: date,
    }));

    ops
}
