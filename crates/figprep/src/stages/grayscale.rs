use std::path::Path;

use image::DynamicImage;

use super::{ImageStage, run_stage};
use crate::error::Result;
use crate::io::ExtensionFilter;
use crate::types::StageReport;

/// Reduces each image to single-channel intensity using the standard
/// luminance weighting of the color channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrayscaleStage;

impl ImageStage for GrayscaleStage {
    fn name(&self) -> &'static str {
        "grayscale"
    }

    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        Ok(DynamicImage::ImageLuma8(image.to_luma8()))
    }
}

/// Convert every image under `source_dir` to grayscale, writing results to
/// `dest_dir` under the same file names.
pub fn to_grayscale(
    source_dir: &Path,
    dest_dir: &Path,
    extensions: &ExtensionFilter,
) -> Result<StageReport> {
    run_stage(&GrayscaleStage, source_dir, dest_dir, extensions)
}
