//! Filename-driven classification of raw images into per-class directories.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::io::{ExtensionFilter, image_files};
use crate::types::{ClassLabel, ClassifyReport};

/// Partition every image under `source_root` into `dest_root/<label>/`.
///
/// The label is derived from the file name (stem prefix before the first
/// underscore) and the file is copied unchanged, preserving its name, so a
/// rerun overwrites the same destinations and leaves the tree in an
/// identical state. Source files are never touched. Directory creation is
/// idempotent; any filesystem failure aborts the remaining copies.
pub fn classify_and_copy(
    source_root: &Path,
    dest_root: &Path,
    extensions: &ExtensionFilter,
) -> Result<ClassifyReport> {
    fs::create_dir_all(dest_root)?;

    let mut report = ClassifyReport::default();
    for path in image_files(source_root, extensions)? {
        let Some(label) = ClassLabel::from_path(&path) else {
            debug!("No class label derivable from {}, skipping", path.display());
            continue;
        };

        let class_dir = dest_root.join(label.as_str());
        fs::create_dir_all(&class_dir)?;

        // A derivable label implies a file name.
        let Some(file_name) = path.file_name() else {
            continue;
        };
        fs::copy(&path, class_dir.join(file_name))?;
        report.record(label);
    }

    info!(
        "Classified {} images into {} classes under {}",
        report.copied,
        report.per_class.len(),
        dest_root.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    fn write_png(dir: &Path, name: &str) {
        GrayImage::new(4, 4).save(dir.join(name)).unwrap();
    }

    #[test]
    fn copies_into_per_class_subdirectories() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_png(src.path(), "triangle_01.png");
        write_png(src.path(), "triangle_02.png");
        write_png(src.path(), "circle_01.png");

        let report =
            classify_and_copy(src.path(), dst.path(), &ExtensionFilter::default()).unwrap();

        assert_eq!(report.copied, 3);
        assert_eq!(report.per_class[&ClassLabel::new("triangle")], 2);
        assert!(dst.path().join("triangle/triangle_01.png").is_file());
        assert!(dst.path().join("triangle/triangle_02.png").is_file());
        assert!(dst.path().join("circle/circle_01.png").is_file());
    }

    #[test]
    fn name_without_underscore_uses_whole_stem() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_png(src.path(), "square.png");

        classify_and_copy(src.path(), dst.path(), &ExtensionFilter::default()).unwrap();
        assert!(dst.path().join("square/square.png").is_file());
    }

    #[test]
    fn rerun_is_idempotent() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_png(src.path(), "circle_01.png");

        let first =
            classify_and_copy(src.path(), dst.path(), &ExtensionFilter::default()).unwrap();
        let second =
            classify_and_copy(src.path(), dst.path(), &ExtensionFilter::default()).unwrap();

        assert_eq!(first, second);
        let entries: Vec<_> = fs::read_dir(dst.path().join("circle"))
            .unwrap()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn source_files_are_untouched() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_png(src.path(), "circle_01.png");

        classify_and_copy(src.path(), dst.path(), &ExtensionFilter::default()).unwrap();
        assert!(src.path().join("circle_01.png").is_file());
    }
}
