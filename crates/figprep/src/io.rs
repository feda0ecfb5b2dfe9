//! Directory enumeration shared by every stage of the pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Case-insensitive file-extension filter selecting which files count as
/// dataset images. Defaults to PNG only, matching the dataset convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionFilter(Vec<String>);

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self(vec!["png".to_string()])
    }
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            extensions
                .into_iter()
                .map(|ext| ext.into().to_ascii_lowercase())
                .collect(),
        )
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.0.iter().any(|candidate| *candidate == ext)
            })
    }
}

/// Recursively collect every matching image file under `root`, sorted by
/// path so stages process their input in a stable order. A missing root
/// yields an empty set rather than an error; stages treat that as an empty
/// input directory.
pub fn image_files(root: &Path, extensions: &ExtensionFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if root.exists() {
        collect_images(root, extensions, &mut files)?;
    }
    files.sort();
    Ok(files)
}

fn collect_images(dir: &Path, extensions: &ExtensionFilter, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_images(&path, extensions, out)?;
        } else if extensions.matches(&path) {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_accepts_png_only() {
        let filter = ExtensionFilter::default();
        assert!(filter.matches(Path::new("triangle_01.png")));
        assert!(filter.matches(Path::new("triangle_01.PNG")));
        assert!(!filter.matches(Path::new("triangle_01.jpg")));
        assert!(!filter.matches(Path::new("triangle_01")));
    }

    #[test]
    fn custom_filter_accepts_configured_extensions() {
        let filter = ExtensionFilter::new(["png", "JPG"]);
        assert!(filter.matches(Path::new("a.jpg")));
        assert!(filter.matches(Path::new("b.png")));
        assert!(!filter.matches(Path::new("c.tiff")));
    }

    #[test]
    fn enumeration_recurses_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("circle");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("b_1.png"), b"x").unwrap();
        fs::write(nested.join("a_1.png"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let files = image_files(dir.path(), &ExtensionFilter::default()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0] < files[1]);
    }

    #[test]
    fn missing_root_yields_empty_set() {
        let files = image_files(Path::new("/nonexistent/figprep"), &ExtensionFilter::default())
            .unwrap();
        assert!(files.is_empty());
    }
}
