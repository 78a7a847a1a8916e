//! Page sizes documents can be rendered on, as (width, height) in points.
//!
//! Templates are designed against [A4]; every other size works, with the page furniture
//! stretching or shrinking along with the page.
//!
//! ```
//! use doc_layout::pagesize::{self, PageOrientation};
//!
//! let (width, height) = pagesize::A4;
//! assert!(width < height);
//!
//! let (width, height) = pagesize::LETTER.landscape();
//! assert!(width > height);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// ISO A4, rounded to the hundredth of a point
pub const A4: PageSize = (Pt(595.28), Pt(841.89));
/// ISO A5, rounded to the hundredth of a point
pub const A5: PageSize = (Pt(419.53), Pt(595.28));
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

/// Swap a page size between portrait and landscape.
pub trait PageOrientation {
    /// The size with width ≤ height
    fn portrait(self) -> Self;
    /// The size with width ≥ height
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> PageSize {
        let (width, height) = self;
        (width.min(height), width.max(height))
    }

    fn landscape(self) -> PageSize {
        let (width, height) = self;
        (width.max(height), width.min(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation() {
        assert_eq!(A4.landscape(), (Pt(841.89), Pt(595.28)));
        assert_eq!(A4.landscape().portrait(), A4);
        assert_eq!(LEGAL.portrait(), LEGAL);
    }
}
