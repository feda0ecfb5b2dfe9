use figprep::stats::ChartConfig;
use figprep::{ExtensionFilter, Pipeline, PipelinePaths, TargetSize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// Stage options accepted from a configuration file; every field falls back
/// to the pipeline default when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StageOptions {
    pub target_size: Option<TargetSize>,
    pub white_threshold: Option<u8>,
    pub extensions: Option<ExtensionFilter>,
    pub chart: Option<ChartConfig>,
}

/// Full pipeline configuration: the directory layout plus stage options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    pub paths: PipelinePaths,
    #[serde(default)]
    pub options: StageOptions,
}

impl PipelineConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        let config: PipelineConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self, CliError> {
        let config: PipelineConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(CliError::UnsupportedFileFormat),
        }
    }

    /// Save configuration to a TOML file
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CliError> {
        let content = toml::to_string_pretty(&self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CliError> {
        let content = serde_json::to_string_pretty(&self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the configured pipeline, applying defaults for unset options.
    pub fn pipeline(&self) -> Pipeline {
        let mut builder = Pipeline::builder();
        if let Some(target_size) = self.options.target_size {
            builder = builder.target_size(target_size);
        }
        if let Some(white_threshold) = self.options.white_threshold {
            builder = builder.white_threshold(white_threshold);
        }
        if let Some(extensions) = self.options.extensions.clone() {
            builder = builder.extensions(extensions);
        }
        if let Some(chart) = self.options.chart.clone() {
            builder = builder.chart(chart);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_config() -> PipelineConfig {
        PipelineConfig {
            paths: PipelinePaths::under(Path::new("data")),
            options: StageOptions {
                target_size: Some(TargetSize::new(64, 64)),
                white_threshold: Some(240),
                extensions: None,
                chart: None,
            },
        }
    }

    #[test]
    fn toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.toml");

        let config = sample_config();
        config.to_toml_file(&path).unwrap();
        let loaded = PipelineConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");

        let config = sample_config();
        config.to_json_file(&path).unwrap();
        let loaded = PipelineConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = PipelineConfig::from_file("pipeline.yaml").unwrap_err();
        assert!(matches!(err, CliError::UnsupportedFileFormat));
    }

    #[test]
    fn omitted_options_use_pipeline_defaults() {
        let toml = r#"
            [paths]
            raw = "data/raw"
            classified = "data/interim/classified"
            grayscale = "data/interim/grayscale"
            resized = "data/interim/resized"
            transparent = "data/interim/transparent"
            stats = "data/processed/stats"
        "#;

        let config = PipelineConfig::from_toml(toml).unwrap();
        assert_eq!(config.paths.raw, PathBuf::from("data/raw"));
        assert_eq!(config.options, StageOptions::default());
    }
}
