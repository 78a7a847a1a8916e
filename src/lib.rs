//! A template-driven, single-page document layout engine.
//!
//! Given a [RenderRequest] (a title, a body of lightweight-markdown text, a template id, a
//! handful of template fields and an optional signature), [render::render] lays out one
//! fixed-size page and returns its contents as absolute-positioned [DrawOp]s, together with
//! the fonts and images those operations refer to. Turning the operations into a binary
//! document format is left to the caller.
//!
//! The pieces can be used on their own too:
//!
//! - [layout] normalizes, measures, wraps and flows text
//! - [template] holds the built-in templates as static recipes
//! - [signature] composes the signature block
//! - [fetch] resolves stored documents into render requests

mod afm;

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

/// Text normalization, measurement, wrapping and paragraph flow
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

mod request;
pub use request::*;

pub mod fetch;
pub mod render;
pub mod signature;
pub mod template;

mod units;
pub use units::*;

mod error;
pub use error::*;
