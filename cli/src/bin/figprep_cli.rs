use clap::{Parser, Subcommand};
use cli::{PipelineConfig, StageOptions};
use color_eyre::eyre::Result;
use figprep::stats::ChartConfig;
use figprep::{ExtensionFilter, PipelinePaths, TargetSize, count_and_summarize};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline using a configuration file
    Run {
        /// Path to the TOML or JSON configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Run the full pipeline over the conventional layout under a base directory
    Prepare {
        /// Base data directory (raw images expected under <base>/raw)
        #[arg(short, long)]
        base: PathBuf,
        /// Resize target width in pixels
        #[arg(long, default_value = "128")]
        width: u32,
        /// Resize target height in pixels
        #[arg(long, default_value = "128")]
        height: u32,
    },
    /// Generate a skeleton configuration file for the conventional layout
    InitConfig {
        /// Base data directory the configuration will point at
        #[arg(short, long)]
        base: PathBuf,
        /// Path to save the generated configuration (.toml or .json)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Count pixels per class over a directory and render the summary chart
    Count {
        /// Directory of images to aggregate
        #[arg(short, long)]
        source: PathBuf,
        /// Directory the chart is written into
        #[arg(long)]
        stats: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Run { config } => {
            run_from_config(config)?;
        }
        Commands::Prepare {
            base,
            width,
            height,
        } => {
            run_conventional(base, *width, *height)?;
        }
        Commands::InitConfig { base, output } => {
            init_config(base, output)?;
        }
        Commands::Count { source, stats } => {
            count(source, stats)?;
        }
    }

    Ok(())
}

fn run_from_config(config_path: &Path) -> Result<()> {
    let config = PipelineConfig::from_file(config_path)?;
    info!("Loaded pipeline configuration from {}", config_path.display());

    let report = config.pipeline().run(&config.paths)?;
    print_summary(&report);
    Ok(())
}

fn run_conventional(base: &Path, width: u32, height: u32) -> Result<()> {
    let paths = PipelinePaths::under(base);
    let report = figprep::Pipeline::builder()
        .target_size(TargetSize::new(width, height))
        .build()
        .run(&paths)?;
    print_summary(&report);
    Ok(())
}

fn init_config(base: &Path, output: &Path) -> Result<()> {
    let config = PipelineConfig {
        paths: PipelinePaths::under(base),
        options: StageOptions {
            target_size: Some(TargetSize::default()),
            white_threshold: None,
            extensions: None,
            chart: None,
        },
    };

    match output.extension().and_then(|ext| ext.to_str()) {
        Some("json") => config.to_json_file(output)?,
        _ => config.to_toml_file(output)?,
    }
    info!("Configuration skeleton saved to {}", output.display());
    Ok(())
}

fn count(source: &Path, stats: &Path) -> Result<()> {
    let counts = count_and_summarize(
        source,
        stats,
        &ExtensionFilter::default(),
        &ChartConfig::default(),
    )?;

    for (label, pixels) in counts.sorted_ascending() {
        info!("{label}: {pixels} px");
    }
    Ok(())
}

fn print_summary(report: &figprep::PipelineReport) {
    info!(
        "Classified {} images into {} classes",
        report.classify.copied,
        report.classify.per_class.len()
    );
    for (stage, stage_report) in [
        ("grayscale", report.grayscale),
        ("resize", report.resize),
        ("transparency", report.transparency),
    ] {
        info!(
            "{stage}: {} processed, {} skipped",
            stage_report.processed, stage_report.skipped
        );
    }
    for (label, pixels) in report.counts.sorted_ascending() {
        info!("{label}: {pixels} px");
    }
}
