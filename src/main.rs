use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rgbconv::models::{AppConfig, Conversion, ConversionMode, OutputFormat, CONFIG_ENV_VAR};
use rgbconv::services::{batch, render_output, render_report, ColorService};

#[derive(Parser)]
#[command(name = "rgbconv")]
#[command(about = "Convert colors between RGB, HSV, HSL, kelvin and hex")]
struct Cli {
    /// YAML config file (defaults to $RGBCONV_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject out-of-range input instead of clamping it
    #[arg(long, global = true, value_enum)]
    mode: Option<ConversionMode>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Convert(Conversion),

    /// Run a YAML or JSON file of conversion requests
    Batch {
        /// Path to the batch file
        file: PathBuf,

        /// Stop at the first failing entry
        #[arg(long)]
        fail_fast: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so results on stdout stay machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rgbconv=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // An explicit --config must load; the environment variable may fall back
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(AppConfig::path_from_env().as_deref()),
    }
    .with_overrides(cli.mode, cli.format);

    match cli.command {
        Some(Commands::Convert(conversion)) => run_convert_command(&config, &conversion),
        Some(Commands::Batch { file, fail_fast }) => {
            run_batch_command(&config, &file, fail_fast)
        }
        None => {
            run_status_command(cli.config.as_deref(), &config);
            Ok(())
        }
    }
}

/// Run a single conversion and print the result
fn run_convert_command(config: &AppConfig, conversion: &Conversion) -> anyhow::Result<()> {
    let service = ColorService::from_config(config);
    let output = service.convert(conversion)?;
    println!("{}", render_output(&output, config.format)?);
    Ok(())
}

/// Run a batch file and print the report
fn run_batch_command(config: &AppConfig, file: &Path, fail_fast: bool) -> anyhow::Result<()> {
    let service = ColorService::from_config(config);
    let report = batch::run_batch_file(&service, file, fail_fast)?;
    println!("{}", render_report(&report, config.format)?);

    if !report.is_success() {
        anyhow::bail!("{} of {} conversions failed", report.failed, report.entries.len());
    }
    Ok(())
}

/// Display version and effective configuration
fn run_status_command(config_flag: Option<&Path>, config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("rgbconv v{VERSION} - single-pixel color conversions\n");

    let config_source = match (config_flag, AppConfig::path_from_env()) {
        (Some(path), _) => format!("{} (--config)", path.display()),
        (None, Some(path)) if path.exists() => format!("{} (${CONFIG_ENV_VAR})", path.display()),
        (None, Some(path)) => format!("defaults ({} not found)", path.display()),
        (None, None) => "defaults".to_string(),
    };

    println!("Configuration:");
    println!("  Source = {config_source}");
    println!("  Mode   = {:?}", config.mode);
    println!("  Format = {:?}", config.format);

    println!("\nCommands:");
    println!("  rgbconv rgb-to-hsv R G B     RGB to HSV");
    println!("  rgbconv rgb-to-hsl R G B     RGB to HSL");
    println!("  rgbconv hsv-to-rgb H S V     HSV to RGB");
    println!("  rgbconv hsl-to-rgb H S L     HSL to RGB");
    println!("  rgbconv temperature KELVIN   Color temperature to RGB");
    println!("  rgbconv hex-to-rgb HEX       Hex string to RGB");
    println!("  rgbconv rgb-to-hex R G B     RGB to hex string");
    println!("  rgbconv batch FILE           Run a batch file");
    println!("\nRun 'rgbconv --help' for more details.");
}
