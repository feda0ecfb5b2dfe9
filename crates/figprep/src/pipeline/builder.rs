use crate::io::ExtensionFilter;
use crate::pipeline::Pipeline;
use crate::stages::transparency::DEFAULT_WHITE_THRESHOLD;
use crate::stats::ChartConfig;
use crate::types::TargetSize;

/// Builder for configuring a [`Pipeline`] with a fluent API.
pub struct PipelineBuilder {
    extensions: ExtensionFilter,
    target_size: TargetSize,
    white_threshold: u8,
    chart: ChartConfig,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            extensions: ExtensionFilter::default(),
            target_size: TargetSize::default(),
            white_threshold: DEFAULT_WHITE_THRESHOLD,
            chart: ChartConfig::default(),
        }
    }

    /// Set which file extensions count as dataset images.
    pub fn extensions(mut self, extensions: ExtensionFilter) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set the fixed output dimensions of the resize stage.
    pub fn target_size(mut self, target_size: TargetSize) -> Self {
        self.target_size = target_size;
        self
    }

    /// Set the intensity above which pixels count as background.
    pub fn white_threshold(mut self, white_threshold: u8) -> Self {
        self.white_threshold = white_threshold;
        self
    }

    /// Set the summary chart dimensions and file name.
    pub fn chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            extensions: self.extensions,
            target_size: self.target_size,
            white_threshold: self.white_threshold,
            chart: self.chart,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
