//! Sequential orchestration of the dataset preparation stages.

pub mod builder;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classify::classify_and_copy;
use crate::error::{FigprepError, Result};
use crate::io::ExtensionFilter;
use crate::stages::{ResizeStage, TransparencyStage, run_stage, to_grayscale};
use crate::stats::{ChartConfig, count_and_summarize};
use crate::types::{ClassifyReport, PixelCounts, StageReport, TargetSize};

pub use builder::PipelineBuilder;

/// The directory layout the pipeline operates over.
///
/// Only `raw` must pre-exist; every other directory is created on demand.
/// Each stage writes into its own distinct directory, so no stage ever
/// feeds back into another stage's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelinePaths {
    /// Source images, named `<label>_<rest>.<ext>`.
    pub raw: PathBuf,
    /// Classifier output: one subdirectory per class label.
    pub classified: PathBuf,
    /// Grayscale stage output.
    pub grayscale: PathBuf,
    /// Resize stage output.
    pub resized: PathBuf,
    /// Transparency stage output; also the aggregator's input.
    pub transparent: PathBuf,
    /// Statistics output (the pixel summary chart).
    pub stats: PathBuf,
}

impl PipelinePaths {
    /// Conventional layout rooted at `base`: raw data under `raw/`,
    /// intermediates under `interim/`, statistics under `processed/stats`.
    pub fn under(base: &Path) -> Self {
        Self {
            raw: base.join("raw"),
            classified: base.join("interim/classified"),
            grayscale: base.join("interim/grayscale"),
            resized: base.join("interim/resized"),
            transparent: base.join("interim/transparent"),
            stats: base.join("processed/stats"),
        }
    }
}

/// Everything one full pipeline run produced: per-stage outcomes plus the
/// final per-class pixel totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub classify: ClassifyReport,
    pub grayscale: StageReport,
    pub resize: StageReport,
    pub transparency: StageReport,
    pub counts: PixelCounts,
}

/// The configured dataset pipeline.
///
/// Stages run strictly in sequence; each fully processes its input
/// directory before the next begins. There is no checkpointing: a failure
/// partway through leaves intermediates partially populated, and a rerun
/// starts from the classifier again, overwriting same-named outputs.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub(crate) extensions: ExtensionFilter,
    pub(crate) target_size: TargetSize,
    pub(crate) white_threshold: u8,
    pub(crate) chart: ChartConfig,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Execute all five phases over `paths`.
    pub fn run(&self, paths: &PipelinePaths) -> Result<PipelineReport> {
        if !paths.raw.is_dir() {
            return Err(FigprepError::MissingRawDirectory(paths.raw.clone()));
        }

        info!("Phase 1/5: classification");
        let classify = classify_and_copy(&paths.raw, &paths.classified, &self.extensions)?;

        info!("Phase 2/5: grayscale");
        let grayscale = to_grayscale(&paths.classified, &paths.grayscale, &self.extensions)?;

        info!("Phase 3/5: resize");
        let resize = run_stage(
            &ResizeStage {
                target: self.target_size,
            },
            &paths.grayscale,
            &paths.resized,
            &self.extensions,
        )?;

        info!("Phase 4/5: transparency");
        let transparency = run_stage(
            &TransparencyStage {
                white_threshold: self.white_threshold,
            },
            &paths.resized,
            &paths.transparent,
            &self.extensions,
        )?;

        info!("Phase 5/5: pixel statistics");
        let counts = count_and_summarize(
            &paths.transparent,
            &paths.stats,
            &self.extensions,
            &self.chart,
        )?;

        info!("Pipeline completed");
        Ok(PipelineReport {
            classify,
            grayscale,
            resize,
            transparency,
            counts,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        PipelineBuilder::new().build()
    }
}

/// Run the full pipeline with default options.
pub fn run_pipeline(paths: &PipelinePaths) -> Result<PipelineReport> {
    Pipeline::default().run(paths)
}
