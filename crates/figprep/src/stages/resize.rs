use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;

use super::{ImageStage, run_stage};
use crate::error::Result;
use crate::io::ExtensionFilter;
use crate::types::{StageReport, TargetSize};

/// Resizes each image to a fixed target size with a triangle (area-style
/// averaging) filter, suitable for downscaling without aliasing.
///
/// Aspect ratio is deliberately not preserved: the output always has
/// exactly the target dimensions.
#[derive(Debug, Clone, Copy)]
pub struct ResizeStage {
    pub target: TargetSize,
}

impl Default for ResizeStage {
    fn default() -> Self {
        Self {
            target: TargetSize::default(),
        }
    }
}

impl ImageStage for ResizeStage {
    fn name(&self) -> &'static str {
        "resize"
    }

    fn apply(&self, image: DynamicImage) -> Result<DynamicImage> {
        Ok(image.resize_exact(self.target.width, self.target.height, FilterType::Triangle))
    }
}

/// Resize every image under `source_dir` to `target`, writing results to
/// `dest_dir` under the same file names.
pub fn resize(
    source_dir: &Path,
    dest_dir: &Path,
    target: TargetSize,
    extensions: &ExtensionFilter,
) -> Result<StageReport> {
    run_stage(&ResizeStage { target }, source_dir, dest_dir, extensions)
}
