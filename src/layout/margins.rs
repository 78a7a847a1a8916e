use crate::units::Pt;

/// The space kept clear around the edges of a [`Page`](crate::Page). Margins only shape the
/// page's `content_box`; templates are free to draw furniture outside of it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// The same margin on every edge
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// No margins at all; the content box covers the whole page
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }
}
