use crate::ImageError;

/// The encodings a signature image may arrive in
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

/// A decoded raster image, ready to be placed on a page. The original encoded bytes are
/// kept so the serializer can embed them as-is; decoding here only validates them and
/// recovers the pixel dimensions needed for layout.
#[derive(Clone, Debug)]
pub struct Image {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub width: f32,
    pub height: f32,
}

impl Image {
    /// Decode PNG or JPEG bytes. Any other format, or bytes that fail to decode, is an error
    pub fn decode(bytes: Vec<u8>) -> Result<Image, ImageError> {
        let format = image::guess_format(&bytes)?;
        let ours = match format {
            image::ImageFormat::Png => ImageFormat::Png,
            image::ImageFormat::Jpeg => ImageFormat::Jpeg,
            other => return Err(ImageError::Unsupported(other)),
        };

        let decoded = image::load_from_memory_with_format(&bytes, format)?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(ImageError::Empty);
        }

        Ok(Image {
            width: decoded.width() as f32,
            height: decoded.height() as f32,
            bytes,
            format: ours,
        })
    }
}
