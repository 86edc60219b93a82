//! Per-cell image transform
//!
//! Each source photo is made portrait, stretched to the exact cell size and,
//! for the inverted row, turned upside down so it reads correctly once the
//! sheet is folded.

use crate::layout::SlotPlacement;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, ImageResult, RgbImage};
use std::path::Path;

/// Decode an image, sniffing the format from its contents
pub fn load_image(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Turn a landscape image a quarter turn counter-clockwise.
///
/// Portrait and square images are returned unchanged. The bounding box
/// grows to fit, so nothing is cropped.
pub fn orient_portrait(image: DynamicImage) -> DynamicImage {
    if image.width() > image.height() {
        log::debug!(
            "Landscape image {}x{}, rotating to portrait",
            image.width(),
            image.height()
        );
        image.rotate270()
    } else {
        image
    }
}

/// Produce the pixels pasted into one cell.
///
/// Aspect ratio is not preserved: the image is stretched to fill the cell.
pub fn prepare_cell(image: DynamicImage, placement: &SlotPlacement) -> RgbImage {
    let rect = placement.rect;
    let resized = orient_portrait(image).resize_exact(rect.width, rect.height, FilterType::Lanczos3);

    let oriented = if placement.is_inverted() {
        resized.rotate180()
    } else {
        resized
    };

    oriented.to_rgb8()
}
