//! Renders a [RenderRequest] onto a single page.
//!
//! A render always runs the same sequence, top to bottom:
//!
//! 1. the template's furniture and metadata lines
//! 2. the body, flowed until it runs out or reaches the content floor
//! 3. anything the template draws after the body
//! 4. the signature block, if the document is signed
//! 5. the footer
//!
//! When a document is signed, the content floor is raised by the signature band before
//! the body is laid out, so body text can never run into the signature block.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use doc_layout::render::{render, RenderOptions};
//! use doc_layout::{RenderRequest, StandardFonts};
//!
//! let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
//! let mut request = RenderRequest::new("3f9a2c1b-77", "Team Update", "Hello **team**!", created);
//! request.template("business_report").field("period", "Q1");
//!
//! let output = render(&request, &StandardFonts, &RenderOptions::default()).unwrap();
//! assert_eq!(output.file_name, "team_update_3f9a2c1b.pdf");
//! assert!(output.ops().iter().any(|op| op.text() == Some("Hello team!")));
//! ```

use crate::colours;
use crate::document::{Document, Typefaces};
use crate::font::{FontProvider, FontStyle};
use crate::layout::{layout_paragraphs, Margins};
use crate::page::{DrawOp, Page, SpanLayout};
use crate::pagesize::{self, PageSize};
use crate::request::RenderRequest;
use crate::signature::compose_signature;
use crate::template::{self, draw_steps, PageGeometry, StepContext};
use crate::units::Pt;
use crate::RenderError;

/// How far above the bottom margin body text may go on an unsigned page
pub const CONTENT_FLOOR: Pt = Pt(50.0);
/// Where the first line of a template starts, below the top margin
pub const TOP_INSET: Pt = Pt(20.0);
/// The footer's baseline
pub const FOOTER_Y: Pt = Pt(20.0);
pub const FOOTER_SIZE: Pt = Pt(9.0);

/// The caption centered along the bottom of every page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footer {
    pub unsigned: String,
    pub signed: String,
}

impl Footer {
    /// Captions for documents rendered for their owner
    pub fn owner() -> Footer {
        Footer {
            unsigned: "Generated with DocVerify".to_string(),
            signed: "Generated & Signed with DocVerify".to_string(),
        }
    }

    /// Captions for documents rendered through a public share link
    pub fn public() -> Footer {
        Footer {
            unsigned: "Public view - DocVerify".to_string(),
            signed: "Public view - Signed with DocVerify".to_string(),
        }
    }

    pub fn caption(&self, signed: bool) -> &str {
        if signed {
            &self.signed
        } else {
            &self.unsigned
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Footer::owner()
    }
}

/// Page-level settings shared by every template
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub page_size: PageSize,
    pub margin: Pt,
    /// The height kept clear above the content floor for the signature block
    pub signature_band: Pt,
    pub footer: Footer,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            page_size: pagesize::A4,
            margin: Pt(50.0),
            signature_band: Pt(100.0),
            footer: Footer::owner(),
        }
    }
}

impl RenderOptions {
    /// Create options with the default A4 page, 50pt margins and owner footer
    pub fn new() -> RenderOptions {
        RenderOptions::default()
    }

    /// Set the page size, modifying `self`
    pub fn page_size(&mut self, page_size: PageSize) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Set the page margin, modifying `self`
    pub fn margin<D: Into<Pt>>(&mut self, margin: D) -> &mut Self {
        self.margin = margin.into();
        self
    }

    /// Set the height reserved for the signature block, modifying `self`
    pub fn signature_band<D: Into<Pt>>(&mut self, band: D) -> &mut Self {
        self.signature_band = band.into();
        self
    }

    /// Set the footer captions, modifying `self`
    pub fn footer(&mut self, footer: Footer) -> &mut Self {
        self.footer = footer;
        self
    }
}

/// A rendered page along with the fonts and images it refers to
pub struct RenderOutput {
    pub document: Document,
    /// A file name for the document, e.g. `quarterly_report_3f9a2c1b.pdf`
    pub file_name: String,
}

impl RenderOutput {
    /// Every draw operation on the page, in painting order
    pub fn ops(&self) -> &[DrawOp] {
        &self.document.page.contents
    }
}

/// Lay out `request` on a single page using the fonts from `fonts`.
///
/// Only a font provider failure stops a render. Unknown templates, missing fields, overlong
/// bodies and broken signature images all degrade instead.
pub fn render<P: FontProvider + ?Sized>(
    request: &RenderRequest,
    fonts: &P,
    options: &RenderOptions,
) -> Result<RenderOutput, RenderError> {
    let recipe = template::recipe(request.template_id.as_deref());
    log::debug!(
        "rendering document {} with the {} template",
        request.document_id,
        recipe.id
    );

    let page = Page::new(options.page_size, Some(Margins::all(options.margin)));
    let mut document = Document::new(page);
    let typefaces = Typefaces::embed(&mut document, fonts)?;

    let signed = request.is_signed();
    let geometry = PageGeometry {
        width: document.page.width(),
        height: document.page.height(),
        margin: options.margin,
        signature_band: if signed {
            options.signature_band
        } else {
            Pt(0.0)
        },
    };
    let min_y = geometry.margin + CONTENT_FLOOR + geometry.signature_band;
    let context = StepContext {
        request,
        page: geometry,
        typefaces,
    };

    let cursor = geometry.height - geometry.margin - TOP_INSET;
    let (ops, cursor) = draw_steps(recipe.steps, &document, &context, cursor);
    document.page.extend(ops);

    let region = recipe.body.region(&geometry, &typefaces, min_y);
    let (ops, cursor) = layout_paragraphs(&document, &request.body, cursor, &region);
    document.page.extend(ops);

    let (ops, _) = draw_steps(recipe.after_body, &document, &context, cursor);
    document.page.extend(ops);

    if let Some(signature) = &request.signature {
        let ops = compose_signature(
            &mut document,
            &typefaces,
            signature,
            recipe.signature_anchor,
            &geometry,
        );
        document.page.extend(ops);
    }

    let caption = options.footer.caption(signed).to_string();
    let font = typefaces.span(FontStyle::Italic, FOOTER_SIZE);
    let x = (geometry.width - document.width_of(&caption, font)) / 2.0;
    document.page.add_span(SpanLayout {
        text: caption,
        font,
        colour: colours::FOOTER,
        coords: (x, FOOTER_Y),
    });

    Ok(RenderOutput {
        file_name: file_name(&request.title, &request.document_id),
        document,
    })
}

/// A file name for a document: the title with everything but ASCII letters and digits
/// replaced by `_`, lower-cased, followed by the first 8 characters of the document id
///
/// ```
/// use doc_layout::render::file_name;
///
/// assert_eq!(file_name("Q3 Report: Final!", "a1b2c3d4e5f6"), "q3_report__final__a1b2c3d4.pdf");
/// assert_eq!(file_name("", "abc"), "document_abc.pdf");
/// ```
pub fn file_name(title: &str, document_id: &str) -> String {
    let safe: String = title
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let safe = if safe.is_empty() {
        "document".to_string()
    } else {
        safe
    };
    let id: String = document_id.chars().take(8).collect();
    format!("{safe}_{id}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardFonts;
    use crate::request::{SignatureDescriptor, SignatureMark};
    use chrono::{TimeZone, Utc};

    fn request(body: &str) -> RenderRequest {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        RenderRequest::new("0f1e2d3c4b5a", "Weekly Notes", body, created)
    }

    fn typed_signature() -> SignatureDescriptor {
        SignatureDescriptor {
            signer_name: "Jane Doe".to_string(),
            signer_role: None,
            signed_at: Utc.with_ymd_and_hms(2024, 1, 6, 9, 0, 0).unwrap(),
            mark: SignatureMark::Typed,
        }
    }

    fn footer(output: &RenderOutput) -> &SpanLayout {
        match output.ops().last() {
            Some(DrawOp::Text(span)) => span,
            other => panic!("expected the footer last, got {other:?}"),
        }
    }

    #[test]
    fn file_names_are_sanitised() {
        assert_eq!(file_name("Hello World", "abcdefghijk"), "hello_world_abcdefgh.pdf");
        assert_eq!(file_name("Café", "12"), "caf__12.pdf");
        assert_eq!(file_name("", ""), "document_.pdf");
    }

    #[test]
    fn footer_depends_on_signature() {
        let options = RenderOptions::default();
        let output = render(&request("Body"), &StandardFonts, &options).unwrap();
        assert_eq!(footer(&output).text, "Generated with DocVerify");
        assert_eq!(footer(&output).coords.1, FOOTER_Y);

        let mut signed = request("Body");
        signed.signed(typed_signature());
        let output = render(&signed, &StandardFonts, &options).unwrap();
        assert_eq!(footer(&output).text, "Generated & Signed with DocVerify");
    }

    #[test]
    fn public_footer() {
        let mut options = RenderOptions::new();
        options.footer(Footer::public());
        let output = render(&request("Body"), &StandardFonts, &options).unwrap();
        assert_eq!(footer(&output).text, "Public view - DocVerify");

        let mut signed = request("Body");
        signed.signed(typed_signature());
        let output = render(&signed, &StandardFonts, &options).unwrap();
        assert_eq!(footer(&output).text, "Public view - Signed with DocVerify");
    }

    #[test]
    fn footer_is_centered() {
        let output = render(&request(""), &StandardFonts, &RenderOptions::default()).unwrap();
        let span = footer(&output);
        let width = output.document.width_of(&span.text, span.font);
        let right = output.document.page.width() - span.coords.0 - width;
        assert!((span.coords.0 - right).0.abs() < 1e-3);
    }

    #[test]
    fn options_builder() {
        let mut options = RenderOptions::new();
        options
            .page_size(pagesize::LETTER)
            .margin(72.0)
            .signature_band(Pt(120.0));
        assert_eq!(options.page_size, pagesize::LETTER);
        assert_eq!(options.margin, Pt(72.0));
        assert_eq!(options.signature_band, Pt(120.0));

        let output = render(&request("Body"), &StandardFonts, &options).unwrap();
        assert_eq!(output.document.page.width(), Pt(612.0));
        // freeform title starts 20pt under the top margin
        assert_eq!(output.ops()[0].text(), Some("Weekly Notes"));
        let DrawOp::Text(title) = &output.ops()[0] else {
            panic!("expected the title first");
        };
        assert_eq!(title.coords, (Pt(72.0), Pt(792.0 - 72.0 - 20.0)));
    }

    struct NoItalics;

    impl FontProvider for NoItalics {
        fn load(&self, style: FontStyle) -> Result<crate::Font, RenderError> {
            match style {
                FontStyle::Italic => Err(RenderError::FontProvider("no italic face".to_string())),
                _ => StandardFonts.load(style),
            }
        }
    }

    #[test]
    fn font_provider_failures_abort_the_render() {
        let result = render(&request("Body"), &NoItalics, &RenderOptions::default());
        assert!(matches!(result, Err(RenderError::FontProvider(_))));

        let broken = crate::TrueTypeFonts {
            regular: b"not a font".to_vec(),
            bold: Vec::new(),
            italic: Vec::new(),
        };
        let result = render(&request("Body"), &broken, &RenderOptions::default());
        assert!(matches!(result, Err(RenderError::FontEmbedding(_))));
    }

    #[test]
    fn body_is_drawn_with_the_regular_face() {
        let output = render(&request("Just text."), &StandardFonts, &RenderOptions::default())
            .unwrap();
        let body = output
            .document
            .page
            .spans()
            .find(|span| span.text == "Just text.")
            .unwrap();
        assert_eq!(output.document.fonts[body.font.id].name(), "Helvetica");
        assert_eq!(body.font.size, Pt(11.0));
        assert_eq!(body.colour, colours::INK);
    }
}
