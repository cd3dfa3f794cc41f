//! Avatar and media thumbnail transforms.
//!
//! Two stateless transforms used to prepare images for the preview card:
//! a centred square crop and a circular mask. Both take an RGBA buffer and
//! return a new one; sources are never mutated.

use image::{GrayImage, Luma, Rgba, RgbaImage, imageops};

use crate::error::RenderError;

/// Decode fetched media bytes into an RGBA buffer.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Centre-crop an image to a square of side `min(width, height)`.
///
/// The window is copied pixel for pixel with no interpolation; an
/// already-square input comes back unchanged.
pub fn crop_to_square(img: &RgbaImage) -> Result<RgbaImage, RenderError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidImage { width, height });
    }
    let size = width.min(height);
    let x = (width - size) / 2;
    let y = (height - size) / 2;
    Ok(imageops::crop_imm(img, x, y, size, size).to_image())
}

/// Clip an image to the largest centred circle that fits its bounds.
///
/// An opaque circular mask of radius `min(width, height) / 2` is drawn on
/// its own canvas, then the source is composited through it onto a
/// transparent buffer of the same bounds. Pixels outside the circle come
/// out fully transparent; pixels inside keep their source color and alpha.
pub fn round_mask(img: &RgbaImage) -> Result<RgbaImage, RenderError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidImage { width, height });
    }
    let radius = width.min(height) as f32 / 2.0;
    let mask = circle_mask(width, height, radius);

    let mut out = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels() {
        let coverage = mask.get_pixel(x, y)[0];
        if coverage > 0 {
            let Rgba([r, g, b, a]) = *pixel;
            let alpha = (u16::from(a) * u16::from(coverage) / 255) as u8;
            out.put_pixel(x, y, Rgba([r, g, b, alpha]));
        }
    }
    Ok(out)
}

/// Opaque circle of the given radius centred in a `width` x `height`
/// canvas; everything else stays at zero coverage.
fn circle_mask(width: u32, height: u32, radius: f32) -> GrayImage {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    GrayImage::from_fn(width, height, |x, y| {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        if dx * dx + dy * dy <= radius * radius {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}
