use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use imageproc::point::Point;
use serde::{Deserialize, Serialize};

/// Class identity of an image, derived from its file name.
///
/// The label is the substring of the file stem before the first underscore
/// (`triangle_01.png` -> `triangle`); stems without an underscore yield the
/// whole stem. This naming rule is a public contract of the dataset format:
/// both the classifier and the pixel aggregator rely on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassLabel(String);

impl ClassLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Derive the label from a file path. Returns `None` when the path has
    /// no usable (non-empty, UTF-8) file stem.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        let label = stem.split('_').next().unwrap_or(stem);
        if label.is_empty() {
            return None;
        }
        Some(Self(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output dimensions enforced by the resize stage.
///
/// Aspect ratio is not preserved: every image comes out exactly this size,
/// distorting inputs whose aspect differs. That matches the upstream dataset
/// convention and is relied on by the pixel statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl Default for TargetSize {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
        }
    }
}

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// The four boundary-extremal coordinates of the dominant foreground region
/// in a binary mask.
///
/// When several boundary pixels share an extreme coordinate, which exact
/// point is reported follows the contour detector's native traversal order
/// and is implementation-defined; only the extreme coordinate itself is
/// guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtremePoints {
    pub leftmost: Point<i32>,
    pub rightmost: Point<i32>,
    pub topmost: Point<i32>,
    pub bottommost: Point<i32>,
}

/// Per-class pixel totals (`width * height` per image, channel count
/// ignored), accumulated monotonically over one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelCounts(BTreeMap<ClassLabel, u64>);

impl PixelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: ClassLabel, pixels: u64) {
        *self.0.entry(label).or_insert(0) += pixels;
    }

    pub fn get(&self, label: &ClassLabel) -> u64 {
        self.0.get(label).copied().unwrap_or(0)
    }

    pub fn merge(&mut self, other: PixelCounts) {
        for (label, pixels) in other.0 {
            self.add(label, pixels);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClassLabel, u64)> {
        self.0.iter().map(|(label, &pixels)| (label, pixels))
    }

    /// Classes ordered by ascending pixel total (ties by label), the order
    /// the summary chart lays its bars out in.
    pub fn sorted_ascending(&self) -> Vec<(&ClassLabel, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Outcome of one directory-to-directory stage: how many images were
/// written and how many were skipped because they failed to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReport {
    pub processed: usize,
    pub skipped: usize,
}

impl StageReport {
    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }
}

/// Outcome of a classifier run: total copies plus per-class counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyReport {
    pub copied: usize,
    pub per_class: BTreeMap<ClassLabel, usize>,
}

impl ClassifyReport {
    pub fn record(&mut self, label: ClassLabel) {
        self.copied += 1;
        *self.per_class.entry(label).or_insert(0) += 1;
    }
}
