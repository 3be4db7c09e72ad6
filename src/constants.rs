//! Named constants shared by the color value, its conversions and the
//! contrast configuration.

/// Textual form used by `Color::default()`
pub const DEFAULT_COLOR: &str = "#000";

/// Alpha of a fully opaque color; every direct representation assignment
/// resets alpha to this value
pub const OPAQUE: f64 = 1.0;

/// RGB channel limits
pub mod rgb {
    /// Number of channels in an rgb triplet
    pub const CHANNELS: usize = 3;

    /// Number of channels in an rgba quadruplet
    pub const CHANNELS_WITH_ALPHA: usize = 4;

    /// Largest value a channel can encode in a hex literal
    pub const CHANNEL_MAX: f64 = 255.0;
}

/// HSV component ranges
pub mod hsv {
    /// Number of components in an hsv triplet
    pub const CHANNELS: usize = 3;

    /// Full turn of the hue circle in degrees
    pub const HUE_TURN: f64 = 360.0;

    /// Scale of saturation and value (percent)
    pub const PERCENT: f64 = 100.0;

    /// Upper clamp applied when brightening.
    /// Note: this is the hue range, not the conventional 100 of value.
    /// Kept at 360 for compatibility with existing stored colors.
    pub const VALUE_CEILING: f64 = 360.0;

    /// Lower clamp applied when darkening
    pub const VALUE_FLOOR: f64 = 0.0;
}
