//! Per-class pixel accumulation and the summary chart artifact.

pub mod chart;

pub use chart::{ChartConfig, render_bar_chart};

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::font::load_system_font;
use crate::io::{ExtensionFilter, image_files};
use crate::types::{ClassLabel, PixelCounts, StageReport};

/// Scan every image under `source_dir` and accumulate `width * height`
/// (channel count ignored) into the total of the class derived from its
/// file name.
///
/// Totals are returned as a value rather than held in shared state, so the
/// caller decides what to do with them. Undecodable images are skipped and
/// excluded from every total; the report carries the skip count.
pub fn count_pixels(
    source_dir: &Path,
    extensions: &ExtensionFilter,
) -> Result<(PixelCounts, StageReport)> {
    let mut counts = PixelCounts::new();
    let mut report = StageReport::default();

    for path in image_files(source_dir, extensions)? {
        let Some(label) = ClassLabel::from_path(&path) else {
            debug!("No class label derivable from {}, skipping", path.display());
            continue;
        };

        let image = match image::open(&path) {
            Ok(image) => image,
            Err(err) => {
                warn!("Skipping undecodable image {}: {err}", path.display());
                report.record_skipped();
                continue;
            }
        };

        let pixels = u64::from(image.width()) * u64::from(image.height());
        counts.add(label, pixels);
        report.record_processed();
    }

    Ok((counts, report))
}

/// Count pixels per class and render the summary bar chart into
/// `stats_dir` under the chart's fixed file name.
pub fn count_and_summarize(
    source_dir: &Path,
    stats_dir: &Path,
    extensions: &ExtensionFilter,
    chart: &ChartConfig,
) -> Result<PixelCounts> {
    fs::create_dir_all(stats_dir)?;

    let (counts, report) = count_pixels(source_dir, extensions)?;
    info!(
        "Counted pixels for {} classes over {} images ({} skipped)",
        counts.len(),
        report.processed,
        report.skipped
    );

    let font = load_system_font();
    let chart_image = render_bar_chart(&counts, chart, font.as_ref());
    let chart_path = stats_dir.join(&chart.file_name);
    chart_image.save(&chart_path)?;
    info!("Pixel summary chart written to {}", chart_path.display());

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    #[test]
    fn totals_are_width_times_height_per_class() {
        let dir = tempfile::tempdir().unwrap();
        GrayImage::new(10, 10)
            .save(dir.path().join("triangle_01.png"))
            .unwrap();
        GrayImage::new(10, 10)
            .save(dir.path().join("triangle_02.png"))
            .unwrap();
        GrayImage::new(5, 4)
            .save(dir.path().join("circle_01.png"))
            .unwrap();

        let (counts, report) =
            count_pixels(dir.path(), &ExtensionFilter::default()).unwrap();
        assert_eq!(report.processed, 3);
        assert_eq!(counts.get(&ClassLabel::new("triangle")), 200);
        assert_eq!(counts.get(&ClassLabel::new("circle")), 20);
    }

    #[test]
    fn undecodable_images_are_excluded() {
        let dir = tempfile::tempdir().unwrap();
        GrayImage::new(8, 8)
            .save(dir.path().join("square_01.png"))
            .unwrap();
        fs::write(dir.path().join("square_02.png"), b"garbage").unwrap();

        let (counts, report) =
            count_pixels(dir.path(), &ExtensionFilter::default()).unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(counts.get(&ClassLabel::new("square")), 64);
    }

    #[test]
    fn counting_disjoint_sets_is_additive() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        GrayImage::new(6, 6)
            .save(a.path().join("circle_01.png"))
            .unwrap();
        GrayImage::new(4, 4)
            .save(b.path().join("circle_02.png"))
            .unwrap();

        let (counts_a, _) = count_pixels(a.path(), &ExtensionFilter::default()).unwrap();
        let (counts_b, _) = count_pixels(b.path(), &ExtensionFilter::default()).unwrap();

        let mut merged = counts_a.clone();
        merged.merge(counts_b.clone());

        let circle = ClassLabel::new("circle");
        assert_eq!(
            merged.get(&circle),
            counts_a.get(&circle) + counts_b.get(&circle)
        );
    }

    #[test]
    fn summarize_writes_the_chart_artifact() {
        let src = tempfile::tempdir().unwrap();
        let stats = tempfile::tempdir().unwrap();
        GrayImage::new(12, 12)
            .save(src.path().join("triangle_01.png"))
            .unwrap();

        let chart = ChartConfig::default();
        let counts = count_and_summarize(
            src.path(),
            stats.path(),
            &ExtensionFilter::default(),
            &chart,
        )
        .unwrap();

        assert_eq!(counts.get(&ClassLabel::new("triangle")), 144);
        assert!(stats.path().join(&chart.file_name).is_file());
    }
}
