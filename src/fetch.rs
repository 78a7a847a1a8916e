//! Turning stored documents into render requests.
//!
//! Stored documents only carry a location for their signature image, so the image has to be
//! fetched before the document can be rendered. Fetching is the only asynchronous part of a
//! render; once [prepare_request] returns, laying out the page is entirely synchronous.

use crate::request::{RenderRequest, StoredDocument};
use crate::FetchError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Something that can retrieve the bytes of a signature image given its stored location
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, FetchError>;
}

/// An [ImageFetcher] serving images which have already been loaded into memory
#[derive(Clone, Debug, Default)]
pub struct InMemoryImages {
    images: HashMap<String, Vec<u8>>,
}

impl InMemoryImages {
    pub fn new() -> InMemoryImages {
        InMemoryImages::default()
    }

    /// Make `bytes` available at `location`, modifying `self`
    pub fn insert<S: ToString>(&mut self, location: S, bytes: Vec<u8>) -> &mut Self {
        self.images.insert(location.to_string(), bytes);
        self
    }
}

#[async_trait]
impl ImageFetcher for InMemoryImages {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, FetchError> {
        self.images
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(location.to_string()))
    }
}

/// Fetch the signature image of `stored`, if it has one, and build a [RenderRequest].
///
/// A failed fetch never fails the request: the signature is kept with an empty image, which
/// the signature block then skips, leaving the signer's name and date in place.
pub async fn prepare_request<F: ImageFetcher + ?Sized>(
    stored: StoredDocument,
    fetcher: &F,
) -> RenderRequest {
    let bytes = match stored.signature_image_location() {
        Some(location) => match fetcher.fetch(location).await {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!(
                    "failed to fetch signature image for document {}: {e}",
                    stored.doc_id
                );
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    stored.into_request(bytes)
}
