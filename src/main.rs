use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use harmonize::models::{AppConfig, CONFIG_ENV};
use harmonize::services::{self, BatchClassifier};

#[derive(Parser)]
#[command(name = "harmonize")]
#[command(about = "Classify color palettes by harmony pattern and export OKLCH datasets")]
struct Cli {
    /// YAML config file (falls back to $HARMONIZE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every palette in a JSON file
    Classify {
        /// Palette list (JSON array of hex lists or {url, palette} entries)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Results file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert palettes to sorted [L, C, H/360] triples
    Oklch {
        /// Palette list (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Export file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Decimal places to keep
        #[arg(short, long)]
        precision: Option<u32>,
    },
    /// Score one palette of 3 or more hex colors
    Score {
        #[arg(required = true, num_args = 1..)]
        colors: Vec<String>,
    },
    /// Show one hex color in every color space
    Convert { color: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Classify { input, output }) => {
            init_tracing("harmonize=info");
            let config = AppConfig::load(config_path.as_deref());
            run_classify_command(&config, input, output).await
        }
        Some(Commands::Oklch {
            input,
            output,
            precision,
        }) => {
            init_tracing("harmonize=info");
            let config = AppConfig::load(config_path.as_deref());
            run_oklch_command(&config, input, output, precision).await
        }
        Some(Commands::Score { colors }) => {
            init_tracing("harmonize=warn");
            run_score_command(&colors)
        }
        Some(Commands::Convert { color }) => {
            init_tracing("harmonize=warn");
            run_convert_command(&color)
        }
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default filter
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run_classify_command(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| config.input.clone());
    let output = output.unwrap_or_else(|| config.output.clone());

    let classifier = BatchClassifier::from_config(config);
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        workers = classifier.workers(),
        "Classifying palettes"
    );

    let report = classifier.classify_file(&input, &output).await?;

    println!(
        "Classified {} of {} palettes -> {}",
        report.records.len(),
        report.total(),
        output.display()
    );
    if !report.failures.is_empty() {
        println!("Skipped {} palettes (see log)", report.failures.len());
    }
    Ok(())
}

async fn run_oklch_command(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    precision: Option<u32>,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| config.input.clone());
    let output = output.unwrap_or_else(|| config.oklch_output.clone());
    let precision = precision.unwrap_or(config.precision);

    let palettes = services::load_palettes(&input).await?;
    let export = services::export_palettes(&palettes, precision);
    if export.skipped > 0 {
        tracing::warn!(
            skipped = export.skipped,
            "Dropped palettes that did not convert"
        );
    }
    services::save_json(&output, &export.palettes).await?;

    println!(
        "Converted {} palettes -> {}",
        export.palettes.len(),
        output.display()
    );
    Ok(())
}

fn run_score_command(colors: &[String]) -> anyhow::Result<()> {
    let report = services::score_hexes(colors)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_convert_command(color: &str) -> anyhow::Result<()> {
    let report = services::describe_hex(color)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Show configuration status (default command)
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Harmonize v{VERSION}");
    println!("Palette harmony classification and OKLCH export\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        std::env::var(CONFIG_ENV).as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(config_path);

    println!("\nConfiguration: {config_source}");
    println!("  input        = {}", config.input.display());
    println!("  output       = {}", config.output.display());
    println!("  oklch_output = {}", config.oklch_output.display());
    println!("  workers      = {}", config.effective_workers());
    println!("  precision    = {}", config.precision);

    println!("\nCommands:");
    println!("  harmonize classify         Classify palettes into harmony patterns");
    println!("  harmonize oklch            Export palettes as OKLCH triples");
    println!("  harmonize score <HEX>...   Score a single palette");
    println!("  harmonize convert <HEX>    Show a color in every color space");
}
