use std::path::Path;

use image::{DynamicImage, RgbaImage};
use imageproc::contrast::threshold;

use super::{ImageStage, run_stage};
use crate::error::Result;
use crate::io::ExtensionFilter;
use crate::types::StageReport;

/// Intensities above this are treated as background (near pure white).
pub const DEFAULT_WHITE_THRESHOLD: u8 = 250;

/// Turns near-white background into full transparency.
///
/// The image is reduced to intensity, thresholded into a binary foreground
/// mask (intensity <= threshold is foreground), and the mask becomes the
/// alpha channel of the 4-channel output. Alpha is strictly binary, 0 or
/// 255; there is no anti-aliased blending at the edges.
#[derive(Debug, Clone, Copy)]
pub struct TransparencyStage {
    pub white_threshold: u8,
}

impl Default for TransparencyStage {
    fn default() -> Self {
        Self {
            white_threshold: DEFAULT_WHITE_THRESHOLD,
        }
    }
}

impl ImageStage for TransparencyStage {
    fn name(&self) -> &'static str {
        "transparency"
    }

    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        Ok(DynamicImage::ImageRgba8(white_to_alpha(
            &image,
            self.white_threshold,
        )))
    }
}

/// Expand `image` to RGBA with alpha derived from an inverted intensity
/// threshold: grayscale > `white_threshold` becomes transparent (0),
/// everything else fully opaque (255).
pub fn white_to_alpha(image: &DynamicImage, white_threshold: u8) -> RgbaImage {
    let gray = image.to_luma8();
    // threshold marks background (> white_threshold) as 255; inverting
    // yields the foreground mask used as alpha.
    let mut mask = threshold(&gray, white_threshold);
    image::imageops::invert(&mut mask);

    let mut rgba = image.to_rgba8();
    for (pixel, mask_pixel) in rgba.pixels_mut().zip(mask.pixels()) {
        pixel.0[3] = mask_pixel.0[0];
    }
    rgba
}

/// Apply the transparency stage to every image under `source_dir`, writing
/// 4-channel results to `dest_dir` under the same file names.
pub fn apply_transparency(
    source_dir: &Path,
    dest_dir: &Path,
    extensions: &ExtensionFilter,
) -> Result<StageReport> {
    run_stage(
        &TransparencyStage::default(),
        source_dir,
        dest_dir,
        extensions,
    )
}
