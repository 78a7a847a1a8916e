use crate::{afm, RenderError};
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// The three faces every template draws with
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Body copy and dates
    Regular,
    /// Titles, headers and the signer's name
    Bold,
    /// Asides, captions and typed signatures
    Italic,
}

/// The standard Helvetica faces that every PDF reader ships with. These need no font
/// data at all; their metrics are compiled into the crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl StandardFont {
    /// The PostScript name of the face
    pub fn postscript_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }
}

/// A font that text can be measured and drawn with. Fonts are either one of the
/// [StandardFont]s, or TTF / OTF faces parsed from raw bytes.
///
/// Typically, fonts are referred to throughout the layout by their _id_ within
/// the [Document](crate::Document), and not by any typed references
pub enum Font {
    Standard(StandardFont),
    TrueType(OwnedFace),
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, RenderError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font::TrueType(face))
    }

    /// Obtain the full name of the font
    pub fn name(&self) -> String {
        match self {
            Font::Standard(font) => font.postscript_name().to_string(),
            Font::TrueType(face) => face
                .as_face_ref()
                .names()
                .into_iter()
                .find(|name| {
                    name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode()
                })
                .and_then(|name| name.to_string())
                .unwrap_or_else(|| "Unnamed".to_string()),
        }
    }

    /// The number of font units in one em; advances are expressed in these units
    pub fn units_per_em(&self) -> u16 {
        match self {
            Font::Standard(_) => afm::UNITS_PER_EM,
            Font::TrueType(face) => face.as_face_ref().units_per_em(),
        }
    }

    /// The horizontal advance of `ch` in font units, or [None] if the font has no glyph for it
    pub fn glyph_advance(&self, ch: char) -> Option<u16> {
        match self {
            Font::Standard(font) => afm::advance(*font, ch),
            Font::TrueType(face) => {
                let face = face.as_face_ref();
                face.glyph_index(ch)
                    .and_then(|gid| face.glyph_hor_advance(gid))
            }
        }
    }
}

/// The font-metrics collaborator: supplies a font for each [FontStyle] a template needs.
/// Whatever is returned here is used both to measure text and to draw it.
pub trait FontProvider {
    fn load(&self, style: FontStyle) -> Result<Font, RenderError>;
}

/// Provides the standard Helvetica family, requiring no font files
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardFonts;

impl FontProvider for StandardFonts {
    fn load(&self, style: FontStyle) -> Result<Font, RenderError> {
        let font = match style {
            FontStyle::Regular => StandardFont::Helvetica,
            FontStyle::Bold => StandardFont::HelveticaBold,
            FontStyle::Italic => StandardFont::HelveticaOblique,
        };
        Ok(Font::Standard(font))
    }
}

/// Provides TTF / OTF faces from raw font data, one face per style
#[derive(Clone, Debug)]
pub struct TrueTypeFonts {
    pub regular: Vec<u8>,
    pub bold: Vec<u8>,
    pub italic: Vec<u8>,
}

impl FontProvider for TrueTypeFonts {
    fn load(&self, style: FontStyle) -> Result<Font, RenderError> {
        let bytes = match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        };
        Font::load(bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fonts_map_styles_to_helvetica() {
        let bold = StandardFonts.load(FontStyle::Bold).unwrap();
        assert_eq!(bold.name(), "Helvetica-Bold");
        assert_eq!(bold.units_per_em(), 1000);
        assert_eq!(bold.glyph_advance('a'), Some(556));

        let italic = StandardFonts.load(FontStyle::Italic).unwrap();
        assert_eq!(italic.name(), "Helvetica-Oblique");
    }

    #[test]
    fn garbage_font_data_is_an_embedding_error() {
        let fonts = TrueTypeFonts {
            regular: b"definitely not a font".to_vec(),
            bold: Vec::new(),
            italic: Vec::new(),
        };
        let err = fonts.load(FontStyle::Regular).err().unwrap();
        assert!(matches!(err, RenderError::FontEmbedding(_)));
    }
}
