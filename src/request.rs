use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Title used when a stored document never had one
pub const UNTITLED: &str = "Untitled Document";

/// Everything a single render needs to know about one document
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest {
    /// The document's public identifier; only its first characters end up in the file name
    pub document_id: String,
    pub title: String,
    /// Raw body text, possibly containing lightweight markdown
    pub body: String,
    /// Which template to lay the document out with. Unknown and missing ids fall back to
    /// the freeform template.
    pub template_id: Option<String>,
    /// Named template fields, such as `recipient_name` or `party_a`
    pub fields: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub signature: Option<SignatureDescriptor>,
}

impl RenderRequest {
    /// Create a request with no template, fields or signature
    pub fn new<S: ToString, T: ToString, B: ToString>(
        document_id: S,
        title: T,
        body: B,
        created_at: DateTime<Utc>,
    ) -> RenderRequest {
        RenderRequest {
            document_id: document_id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            template_id: None,
            fields: HashMap::default(),
            created_at,
            signature: None,
        }
    }

    /// Set the template id, modifying `self`
    pub fn template<S: ToString>(&mut self, template_id: S) -> &mut Self {
        self.template_id = Some(template_id.to_string());
        self
    }

    /// Set a template field, modifying `self`
    pub fn field<K: ToString, V: ToString>(&mut self, key: K, value: V) -> &mut Self {
        self.fields.insert(key.to_string(), value.to_string());
        self
    }

    /// Attach a signature, modifying `self`
    pub fn signed(&mut self, signature: SignatureDescriptor) -> &mut Self {
        self.signature = Some(signature);
        self
    }

    /// The value of a template field, if it is set at all. An empty value still counts as set.
    pub fn field_value(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}

/// How a signature was captured
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureKind {
    /// Drawn on a canvas and stored as an image
    Drawn,
    /// Uploaded as an image file
    Uploaded,
    /// Typed out; rendered from the signer's name alone
    Typed,
}

/// The visible mark of a signature. Image bytes exist exactly for the image-based kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum SignatureMark {
    Drawn(Vec<u8>),
    Uploaded(Vec<u8>),
    Typed,
}

impl SignatureMark {
    pub fn kind(&self) -> SignatureKind {
        match self {
            SignatureMark::Drawn(_) => SignatureKind::Drawn,
            SignatureMark::Uploaded(_) => SignatureKind::Uploaded,
            SignatureMark::Typed => SignatureKind::Typed,
        }
    }

    /// The encoded image bytes, for drawn and uploaded signatures
    pub fn image_bytes(&self) -> Option<&[u8]> {
        match self {
            SignatureMark::Drawn(bytes) | SignatureMark::Uploaded(bytes) => {
                Some(bytes.as_slice())
            }
            SignatureMark::Typed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignatureDescriptor {
    pub signer_name: String,
    pub signer_role: Option<String>,
    pub signed_at: DateTime<Utc>,
    pub mark: SignatureMark,
}

impl SignatureDescriptor {
    pub fn kind(&self) -> SignatureKind {
        self.mark.kind()
    }

    /// The signer's role, unless it is missing or empty
    pub fn role(&self) -> Option<&str> {
        self.signer_role.as_deref().filter(|role| !role.is_empty())
    }
}

/// A document record as the document store returns it
#[derive(Clone, Debug, Deserialize)]
pub struct StoredDocument {
    pub doc_id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<StoredMetadata>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMetadata {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub fields: Option<HashMap<String, Option<String>>>,
    #[serde(default)]
    pub signature: Option<StoredSignature>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSignature {
    pub signed_by_name: String,
    #[serde(default)]
    pub signed_by_role: Option<String>,
    pub signed_at: DateTime<Utc>,
    /// Where the drawn or uploaded signature image can be fetched from
    #[serde(default)]
    pub signature_image_url: Option<String>,
    pub signature_type: SignatureKind,
}

impl StoredDocument {
    /// Where the signature image lives, for drawn and uploaded signatures that have one
    pub fn signature_image_location(&self) -> Option<&str> {
        let signature = self.metadata.as_ref()?.signature.as_ref()?;
        match signature.signature_type {
            SignatureKind::Typed => None,
            SignatureKind::Drawn | SignatureKind::Uploaded => signature
                .signature_image_url
                .as_deref()
                .filter(|url| !url.trim().is_empty()),
        }
    }

    /// Turn the stored record into a render request. `image_bytes` are the already fetched
    /// signature image bytes; they are ignored for typed signatures.
    pub fn into_request(self, image_bytes: Vec<u8>) -> RenderRequest {
        let metadata = self.metadata.unwrap_or_default();

        let fields = metadata
            .fields
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect();

        let signature = metadata.signature.map(|stored| SignatureDescriptor {
            signer_name: stored.signed_by_name,
            signer_role: stored.signed_by_role,
            signed_at: stored.signed_at,
            mark: match stored.signature_type {
                SignatureKind::Drawn => SignatureMark::Drawn(image_bytes),
                SignatureKind::Uploaded => SignatureMark::Uploaded(image_bytes),
                SignatureKind::Typed => SignatureMark::Typed,
            },
        });

        RenderRequest {
            document_id: self.doc_id,
            title: self.title.unwrap_or_else(|| UNTITLED.to_string()),
            body: metadata.content.unwrap_or_default(),
            template_id: metadata.template_id,
            fields,
            created_at: self.created_at,
            signature,
        }
    }
}
