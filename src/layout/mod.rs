//! Text layout utilities for positioning body copy on the page.
//!
//! Body text goes through three stages, each usable on its own:
//!
//! - [`normalize`](crate::layout::normalize) - strips lightweight markdown markers
//! - [`wrap_text`](crate::layout::wrap_text) - greedy word wrapping against a width budget,
//!   measured with [`width_of_text`](crate::layout::width_of_text)
//! - [`layout_paragraphs`](crate::layout::layout_paragraphs) - flows paragraphs down the
//!   page until they run out or the page does
//!
//! # Example
//!
//! ```
//! use doc_layout::{colours, Document, Font, Page, Pt, SpanFont, StandardFont};
//! use doc_layout::layout::{layout_paragraphs, BodyRegion, Margins};
//! use doc_layout::pagesize;
//!
//! let page = Page::new(pagesize::A4, Some(Margins::all(Pt(50.0))));
//! let mut doc = Document::new(page);
//! let font_id = doc.add_font(Font::Standard(StandardFont::Helvetica));
//!
//! let region = BodyRegion {
//!     margin_x: doc.page.content_box.x1,
//!     usable_width: doc.page.content_box.width(),
//!     font: SpanFont { id: font_id, size: Pt(11.0) },
//!     line_height: Pt(17.0),
//!     min_y: Pt(100.0),
//!     centered: false,
//!     page_width: doc.page.width(),
//!     colour: colours::INK,
//! };
//!
//! let (ops, end) = layout_paragraphs(&doc, "# Hello\n\nWorld!", Pt(700.0), &region);
//! assert_eq!(ops.len(), 2);
//! assert_eq!(ops[0].text(), Some("Hello"));
//! assert!(end < Pt(700.0));
//! doc.page.extend(ops);
//! ```

mod flow;
mod margins;
mod markdown;
mod text;

pub use flow::*;
pub use margins::*;
pub use markdown::*;
pub use text::*;
