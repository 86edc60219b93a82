//! Full-page back cover preparation

use crate::constants::{LETTER_HEIGHT_PX, LETTER_WIDTH_PX};
use image::imageops::FilterType;
use image::{ImageResult, RgbImage};
use std::path::Path;

use super::{load_image, orient_portrait};

/// Load the back cover and stretch it over a whole letter page at 300 DPI
pub fn prepare_full_page(path: &Path) -> ImageResult<RgbImage> {
    let image = orient_portrait(load_image(path)?);
    Ok(image
        .resize_exact(LETTER_WIDTH_PX, LETTER_HEIGHT_PX, FilterType::Lanczos3)
        .to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_landscape_cover_fills_page() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cover.png");
        RgbImage::from_pixel(300, 200, image::Rgb([0, 128, 0]))
            .save(&path)
            .unwrap();

        let page = prepare_full_page(&path).unwrap();
        assert_eq!(page.dimensions(), (2550, 3300));
    }

    #[test]
    fn test_unreadable_cover() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(prepare_full_page(&path).is_err());
    }
}
