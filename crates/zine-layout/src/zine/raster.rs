//! JPEG encoding of finished pages

use crate::constants::DPI;
use crate::types::Result;
use image::RgbImage;
use image::codecs::jpeg::{JpegEncoder, PixelDensity};

/// Encode an opaque RGB page as JPEG, tagged with the print resolution
pub(crate) fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
        encoder.set_pixel_density(PixelDensity::dpi(DPI as u16));
        encoder.encode_image(image)?;
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_encode_is_jpeg() {
        let img = RgbImage::from_pixel(16, 8, Rgb([200, 10, 10]));
        let bytes = encode_jpeg(&img, 95).unwrap();

        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn test_encode_deterministic() {
        let img = RgbImage::from_fn(32, 32, |x, y| Rgb([x as u8 * 8, y as u8 * 8, 0]));
        assert_eq!(encode_jpeg(&img, 90).unwrap(), encode_jpeg(&img, 90).unwrap());
    }
}
