//! Application-wide constants
//!
//! All magic numbers and string literals used by the resolver and the
//! badge layout live here.

/// Config file location and naming
pub mod config {
    /// Name shown in user-facing error messages
    pub const APP_NAME: &str = "TooltipTags";

    /// Directory under the platform config dir
    pub const APP_DIR: &str = "tooltip-tags";

    /// Config file name
    pub const FILENAME: &str = "tooltip_tags.json";

    /// Label used for per-item override entries when deriving text
    pub const CUSTOM_TAG_ID: &str = "custom";
}

/// Badge colors
pub mod color {
    /// Fully opaque alpha byte in ARGB layout
    pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

    /// Mask for the 24-bit RGB part of a color
    pub const RGB_MASK: u32 = 0x00FF_FFFF;

    /// Minimum value of each derived channel, keeps badges readable
    pub const MIN_CHANNEL: u32 = 64;

    /// Badge background brightness relative to the badge color
    pub const BACKGROUND_FACTOR: f32 = 0.85;

    /// Badge frame brightness relative to the badge color
    pub const FRAME_FACTOR: f32 = 0.7;

    /// Badge text color (opaque white)
    pub const TEXT: u32 = 0xFFFF_FFFF;
}

/// Badge layout metrics (in host pixels)
pub mod layout {
    /// Visual scale applied to badge text
    pub const SCALE: f32 = 0.75;

    /// Horizontal padding on each side of the badge text
    pub const TAG_PADDING: u32 = 2;

    /// Gap between two badges on the same row
    pub const TAG_GAP: u32 = 3;

    /// Gap between rows
    pub const ROW_GAP: u32 = 2;

    /// Extra height added to each scaled line
    pub const ROW_PADDING: u32 = 2;

    /// Extra height added to the whole badge block
    pub const BLOCK_PADDING: u32 = 2;

    /// Vertical offset of text inside a badge, and of the first row
    pub const TEXT_OFFSET_Y: i32 = 1;

    /// Minimum distance kept from the right screen edge
    pub const SCREEN_EDGE_MARGIN: i32 = 8;
}

/// Font lookup
pub mod font {
    /// Fallback font locations tried in order
    pub const SYSTEM_FONT_PATHS: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
}
