use crate::{
    font::{Font, FontProvider, FontStyle},
    image::Image,
    layout::width_of_text,
    page::{Page, SpanFont},
    units::Pt,
    RenderError,
};
use id_arena::{Arena, Id};

/// A document is the main object that stores the laid out page along with every font
/// and image its contents refer to. Fonts and images are stored "globally" within the
/// document, and draw operations refer to them by their [Id].
pub struct Document {
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
    pub page: Page,
}

impl Document {
    pub fn new(page: Page) -> Document {
        Document {
            fonts: Arena::new(),
            images: Arena::new(),
            page,
        }
    }

    /// Add a font to the document structure, returning the id text spans refer to it by
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add an image to the document structure, returning the id image layouts refer to it by
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Measure `text` exactly as it will be drawn with `font`
    pub fn width_of(&self, text: &str, font: SpanFont) -> Pt {
        width_of_text(text, &self.fonts[font.id], font.size)
    }
}

/// The ids of the three faces a render draws with, after they have been embedded into
/// a [Document]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Typefaces {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
    pub italic: Id<Font>,
}

impl Typefaces {
    /// Load every style from the provider and add it to the document
    pub fn embed<P: FontProvider + ?Sized>(
        document: &mut Document,
        provider: &P,
    ) -> Result<Typefaces, RenderError> {
        let regular = document.add_font(provider.load(FontStyle::Regular)?);
        let bold = document.add_font(provider.load(FontStyle::Bold)?);
        let italic = document.add_font(provider.load(FontStyle::Italic)?);

        log::debug!(
            "embedded typefaces: {} / {} / {}",
            document.fonts[regular].name(),
            document.fonts[bold].name(),
            document.fonts[italic].name()
        );

        Ok(Typefaces {
            regular,
            bold,
            italic,
        })
    }

    pub fn get(&self, style: FontStyle) -> Id<Font> {
        match style {
            FontStyle::Regular => self.regular,
            FontStyle::Bold => self.bold,
            FontStyle::Italic => self.italic,
        }
    }

    /// A [SpanFont] for `style` at `size`
    pub fn span(&self, style: FontStyle, size: Pt) -> SpanFont {
        SpanFont {
            id: self.get(style),
            size,
        }
    }
}
