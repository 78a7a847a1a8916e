/// A colour in the RGB colour space; r, g, b range from 0.0 to 1.0
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub const fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }
}

/// A list of pre-defined colour constants, covering the palette the built-in templates use
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::new_rgb(1.0, 1.0, 1.0);

    /// Body copy
    pub const INK: Colour = Colour::new_rgb(0.2, 0.2, 0.3);
    /// Headings and titles
    pub const SLATE: Colour = Colour::new_rgb(0.15, 0.18, 0.25);
    /// Dates and other secondary metadata
    pub const MUTED: Colour = Colour::new_rgb(0.5, 0.5, 0.55);
    /// Italic asides such as "Re:" and "Prepared for:" lines
    pub const SUBTLE: Colour = Colour::new_rgb(0.4, 0.4, 0.45);
    /// Hairline separators
    pub const HAIRLINE: Colour = Colour::new_rgb(0.85, 0.85, 0.88);
    /// Footer caption
    pub const FOOTER: Colour = Colour::new_rgb(0.6, 0.62, 0.7);
    /// Certificate border and rule
    pub const GOLD: Colour = Colour::new_rgb(0.75, 0.65, 0.45);
    pub const PALE_GOLD: Colour = Colour::new_rgb(0.85, 0.78, 0.6);
    pub const NAVY: Colour = Colour::new_rgb(0.15, 0.2, 0.35);
}
