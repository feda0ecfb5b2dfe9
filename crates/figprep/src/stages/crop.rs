use image::GrayImage;
use image::imageops::crop_imm;

/// Crop a grayscale image to the axis-aligned bounding box of its content.
///
/// Content is any pixel with intensity strictly below 255 (anything not
/// pure white). The box is inclusive of both bounds. An all-white image has
/// no content to crop to and is returned unchanged; that is a no-op, not an
/// error. One full-image scan, O(pixels).
pub fn crop_to_content(image: &GrayImage) -> GrayImage {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[0] < 255 {
            bounds = Some(match bounds {
                None => (x, x, y, y),
                Some((min_x, max_x, min_y, max_y)) => (
                    min_x.min(x),
                    max_x.max(x),
                    min_y.min(y),
                    max_y.max(y),
                ),
            });
        }
    }

    match bounds {
        Some((min_x, max_x, min_y, max_y)) => crop_imm(
            image,
            min_x,
            min_y,
            max_x - min_x + 1,
            max_y - min_y + 1,
        )
        .to_image(),
        None => image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn white_image(width: u32, height: u32) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([255u8]))
    }

    #[test]
    fn crops_to_inclusive_bounding_box() {
        let mut img = white_image(40, 40);
        for y in 10..=20 {
            for x in 5..=25 {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }

        let cropped = crop_to_content(&img);
        assert_eq!((cropped.width(), cropped.height()), (21, 11));
        assert_eq!(cropped.get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn single_dark_pixel_yields_one_by_one() {
        let mut img = white_image(10, 10);
        img.put_pixel(7, 3, Luma([254u8]));

        let cropped = crop_to_content(&img);
        assert_eq!((cropped.width(), cropped.height()), (1, 1));
        assert_eq!(cropped.get_pixel(0, 0).0[0], 254);
    }

    #[test]
    fn all_white_image_is_a_no_op() {
        let img = white_image(16, 12);
        let cropped = crop_to_content(&img);
        assert_eq!(cropped, img);
    }
}
