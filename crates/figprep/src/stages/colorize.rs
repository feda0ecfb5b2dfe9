use image::{Rgb, RgbaImage};

/// Recolor the foreground of a background-transparent image.
///
/// Every fully opaque pixel (alpha == 255, i.e. previously identified as
/// foreground) has its color channels replaced by `color`. Alpha values and
/// transparent pixels are left untouched, so the background stays
/// background.
pub fn colorize(image: &mut RgbaImage, color: Rgb<u8>) {
    for pixel in image.pixels_mut() {
        if pixel.0[3] == 255 {
            pixel.0[0] = color.0[0];
            pixel.0[1] = color.0[1];
            pixel.0[2] = color.0[2];
        }
    }
}
