//! The per-image stage library.
//!
//! Directory-to-directory transforms (`grayscale`, `resize`, `transparency`)
//! share one runner that enumerates a source tree, applies an [`ImageStage`]
//! per image, and writes the result flat into the destination under the
//! original file name. Auxiliary per-image operations (`crop`, `colorize`,
//! `overlay`, `extremes`) work on in-memory buffers and are not wired into
//! the default pipeline.

pub mod colorize;
pub mod crop;
pub mod extremes;
pub mod grayscale;
pub mod overlay;
pub mod resize;
pub mod transparency;

pub use colorize::colorize;
pub use crop::crop_to_content;
pub use extremes::extreme_points;
pub use grayscale::{GrayscaleStage, to_grayscale};
pub use overlay::draw_label;
pub use resize::{ResizeStage, resize};
pub use transparency::{TransparencyStage, apply_transparency, white_to_alpha};

use std::fs;
use std::path::Path;

use image::DynamicImage;
use tracing::{info, warn};

use crate::error::{FigprepError, Result};
use crate::io::{ExtensionFilter, image_files};
use crate::types::StageReport;

/// One per-image transformation applied across a directory of images.
pub trait ImageStage: Send + Sync {
    /// Stage name used in progress logging.
    fn name(&self) -> &'static str;

    /// Transform a single decoded image into its output buffer.
    fn apply(&self, image: DynamicImage) -> Result<DynamicImage>;
}

/// Apply `stage` to every image under `source_dir`, writing outputs into
/// `dest_dir` under the same file name.
///
/// Decode failures are tolerated: the file is skipped with a warning and
/// counted in the report. Filesystem failures (directory creation, writes)
/// are fatal and abort the stage.
pub fn run_stage(
    stage: &dyn ImageStage,
    source_dir: &Path,
    dest_dir: &Path,
    extensions: &ExtensionFilter,
) -> Result<StageReport> {
    fs::create_dir_all(dest_dir)?;

    let mut report = StageReport::default();
    for path in image_files(source_dir, extensions)? {
        let image = match image::open(&path) {
            Ok(image) => image,
            Err(err) => {
                warn!("Skipping undecodable image {}: {err}", path.display());
                report.record_skipped();
                continue;
            }
        };

        if image.width() == 0 || image.height() == 0 {
            return Err(FigprepError::InvalidDimensions {
                path,
                width: image.width(),
                height: image.height(),
            });
        }

        let Some(file_name) = path.file_name() else {
            continue;
        };
        let output = stage.apply(image)?;
        output.save(dest_dir.join(file_name))?;
        report.record_processed();
    }

    info!(
        "Stage {}: {} images written to {}, {} skipped",
        stage.name(),
        report.processed,
        dest_dir.display(),
        report.skipped
    );
    Ok(report)
}
