use ab_glyph::FontVec;
use image::{DynamicImage, Rgb, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::font::measure_text_width;

const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Pixels between the label baseline and the bottom edge of the image.
const BOTTOM_MARGIN: i32 = 20;

/// Render `text` in black over a background-transparent image, horizontally
/// centered and anchored near the bottom edge.
///
/// The image is flattened to color before drawing and a fully opaque alpha
/// channel is re-attached afterwards, so any transparency present before
/// the call is lost. That is deliberate: labeled images are meant for
/// display, not further masking.
pub fn draw_label(image: RgbaImage, text: &str, font: &FontVec, scale: f32) -> RgbaImage {
    let (width, height) = (image.width(), image.height());
    let mut flattened = DynamicImage::ImageRgba8(image).to_rgb8();

    let text_width = measure_text_width(text, font, scale);
    let x = ((width as f32 - text_width) / 2.0).max(0.0) as i32;
    let y = (height as i32 - BOTTOM_MARGIN - scale as i32).max(0);

    draw_text_mut(&mut flattened, LABEL_COLOR, x, y, scale, font, text);

    DynamicImage::ImageRgb8(flattened).to_rgba8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::load_system_font;
    use image::Rgba;

    #[test]
    fn output_is_fully_opaque() {
        let Some(font) = load_system_font() else {
            return;
        };

        let mut img = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, Rgba([10, 10, 10, 0]));

        let labeled = draw_label(img, "circle", &font, 14.0);
        assert_eq!((labeled.width(), labeled.height()), (64, 64));
        for pixel in labeled.pixels() {
            assert_eq!(pixel.0[3], 255);
        }
    }

    #[test]
    fn label_pixels_land_near_the_bottom() {
        let Some(font) = load_system_font() else {
            return;
        };

        let img = RgbaImage::from_pixel(100, 100, Rgba([255, 255, 255, 255]));
        let labeled = draw_label(img, "triangle", &font, 14.0);

        let darkened = labeled
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] < 200)
            .collect::<Vec<_>>();
        assert!(!darkened.is_empty());
        assert!(darkened.iter().all(|(_, y, _)| *y >= 50));
    }
}
