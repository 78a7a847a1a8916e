use thiserror::Error;

/// Errors that abort a render. Everything the engine can recover from (unknown templates,
/// missing fields, overflowing content, broken signature images) degrades instead of
/// surfacing here; only collaborator failures do.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to embed font: {0}")]
    /// [owned_ttf_parser] failed to parse a font handed over by the font provider
    FontEmbedding(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font provider failed: {0}")]
    /// The font provider could not supply a face for some other reason
    FontProvider(String),
}

/// Errors decoding signature image bytes. These never abort a render; the signature
/// block falls back to its text-only form.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error("unsupported signature image format {0:?}, expected PNG or JPEG")]
    Unsupported(image::ImageFormat),

    #[error("image has no pixels")]
    Empty,
}

/// Errors retrieving signature image bytes from the storage collaborator
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("image not found at {0}")]
    NotFound(String),

    #[error("fetching image failed: {0}")]
    Transport(String),
}
