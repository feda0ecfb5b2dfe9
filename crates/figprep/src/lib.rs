//! # Figure Dataset Preparation Pipeline
//!
//! A batch pipeline that turns a directory tree of labeled geometric-figure
//! images into an analysis-ready derivative dataset: classified,
//! normalized, background-transparent images plus per-class pixel-coverage
//! statistics.
//!
//! ## Core Features
//!
//! - **Filename-driven classification**: the class label is the file stem
//!   prefix before the first underscore
//! - **Composable stage library**: grayscale reduction, fixed-size resize,
//!   white-to-alpha conversion, content crop, contour extreme points,
//!   foreground colorization, label overlay
//! - **Pixel statistics**: per-class pixel totals with a rendered bar-chart
//!   artifact
//! - **Sequential orchestration**: five phases over distinct directories,
//!   decode failures skipped per image, filesystem failures fatal
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use figprep::{Pipeline, PipelinePaths, TargetSize};
//! use std::path::Path;
//!
//! let paths = PipelinePaths::under(Path::new("data"));
//! let report = Pipeline::builder()
//!     .target_size(TargetSize::new(128, 128))
//!     .build()
//!     .run(&paths)?;
//!
//! for (label, pixels) in report.counts.iter() {
//!     println!("{label}: {pixels} px");
//! }
//! # Ok::<(), figprep::FigprepError>(())
//! ```
//!
//! ## Per-image operations
//!
//! ```rust,no_run
//! use figprep::stages::{crop_to_content, white_to_alpha};
//!
//! let image = image::open("triangle_01.png")?;
//! let rgba = white_to_alpha(&image, 250);
//! let cropped = crop_to_content(&image.to_luma8());
//! assert_eq!(rgba.dimensions(), image.to_rgba8().dimensions());
//! assert!(cropped.width() <= image.width());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod classify;
pub mod error;
pub mod font;
pub mod io;
pub mod pipeline;
pub mod stages;
pub mod stats;
pub mod types;

// Re-exports for convenience
pub use classify::classify_and_copy;
pub use error::{FigprepError, Result};
pub use io::ExtensionFilter;
pub use pipeline::{Pipeline, PipelineBuilder, PipelinePaths, PipelineReport, run_pipeline};
pub use stages::{
    apply_transparency, colorize, crop_to_content, draw_label, extreme_points, resize,
    to_grayscale, white_to_alpha,
};
pub use stats::{ChartConfig, count_and_summarize, count_pixels};
pub use types::{
    ClassLabel, ClassifyReport, ExtremePoints, PixelCounts, StageReport, TargetSize,
};
