//! Shared constants for zine layout
//!
//! This module centralizes the fixed sheet dimensions, resolution and
//! naming conventions used throughout the layout process.

// =============================================================================
// Resolution
// =============================================================================

/// Output resolution in dots per inch
pub const DPI: u32 = 300;

/// PDF points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert a pixel length at [`DPI`] to PDF points
#[inline]
pub fn px_to_pt(px: u32) -> f32 {
    px as f32 * POINTS_PER_INCH / DPI as f32
}

// =============================================================================
// Sheet Dimensions
// =============================================================================

/// Working canvas width in pixels (11" landscape at 300 DPI)
pub const CANVAS_WIDTH_PX: u32 = 3300;

/// Working canvas height in pixels (8.5" landscape at 300 DPI)
pub const CANVAS_HEIGHT_PX: u32 = 2550;

/// Full letter page width in pixels, portrait (8.5" at 300 DPI)
pub const LETTER_WIDTH_PX: u32 = 2550;

/// Full letter page height in pixels, portrait (11" at 300 DPI)
pub const LETTER_HEIGHT_PX: u32 = 3300;

/// Canvas background color (RGB)
pub const CANVAS_BACKGROUND: [u8; 3] = [255, 255, 255];

// =============================================================================
// Defaults
// =============================================================================

/// Default side margin in pixels
pub const DEFAULT_SIDE_MARGIN_PX: u32 = 60;

/// Default top/bottom margin in pixels
pub const DEFAULT_TOP_BOTTOM_MARGIN_PX: u32 = 60;

/// Default JPEG quality for raster output and embedded PDF pages
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

// =============================================================================
// Naming
// =============================================================================

/// Extensions probed when scanning an input directory, in priority order
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// File stem used when writing into an explicit output directory
pub const OUTPUT_STEM: &str = "zinerator_output";

/// Suffix appended to the input directory name for the default output file
pub const DEFAULT_NAME_SUFFIX: &str = "_zine_layout_printable";
