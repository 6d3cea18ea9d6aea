use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use region_fill::{FillerKind, GradientPreset, RayFan};
use tilefill::models::{FillConfig, FillOverrides, CONFIG_ENV};
use tilefill::services::FillJob;

#[derive(Parser)]
#[command(name = "tilefill")]
#[command(about = "Tilefill - region fills and contour shading for sprite and tile images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill the region around a seed pixel of a PNG
    Fill {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Seed column
        #[arg(short = 'x', long, allow_hyphen_values = true)]
        x: i64,

        /// Seed row
        #[arg(short = 'y', long, allow_hyphen_values = true)]
        y: i64,

        /// Filler: solid, outline, blend, contour or shade
        #[arg(short, long)]
        filler: Option<String>,

        /// Paint color as hex (e.g. "#FF0000")
        #[arg(short, long)]
        color: Option<String>,

        /// Raw color distance tolerance; negative excludes the background instead
        #[arg(long, allow_hyphen_values = true, conflicts_with = "tolerance_steps")]
        tolerance: Option<i32>,

        /// Tolerance in steps of 500
        #[arg(long)]
        tolerance_steps: Option<u32>,

        /// Background color for background exclusion (e.g. "#00000000")
        #[arg(long)]
        background: Option<String>,

        /// Border blend strength in percent (blend filler)
        #[arg(long)]
        blend_percent: Option<u32>,

        /// Gradient preset: linear, cushion, highlight or shine
        #[arg(long)]
        gradient: Option<String>,

        /// Ray preset: horizontal, vertical, diagonal-up, diagonal-down or contour
        #[arg(long)]
        rays: Option<String>,

        /// Gradient start color
        #[arg(long)]
        from: Option<String>,

        /// Gradient end color
        #[arg(long)]
        to: Option<String>,

        /// YAML config file with fill defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List fillers, gradient presets and ray presets
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Fill {
            input,
            output,
            x,
            y,
            filler,
            color,
            tolerance,
            tolerance_steps,
            background,
            blend_percent,
            gradient,
            rays,
            from,
            to,
            config,
        }) => {
            let overrides = FillOverrides {
                filler,
                color,
                tolerance,
                tolerance_steps,
                background,
                blend_percent,
                gradient,
                rays,
                from,
                to,
            };
            run_fill_command(input, output, x, y, overrides, config)
        }
        Some(Commands::List) => {
            run_list_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Fill one region of a PNG file
fn run_fill_command(
    input: PathBuf,
    output: PathBuf,
    x: i64,
    y: i64,
    overrides: FillOverrides,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilefill=warn,region_fill=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = FillConfig::resolve(config_path.as_deref(), FillConfig::env_path())?;
    let fill = overrides.resolve(&config)?;

    let summary = FillJob::new(&input, &output, x, y, fill).run()?;

    println!(
        "Filled {} pixels with {} in {}x{} image, wrote {} ({} bytes)",
        summary.report.vertical_marked,
        summary.filler,
        summary.width,
        summary.height,
        output.display(),
        summary.bytes_written
    );

    Ok(())
}

fn run_list_command() {
    println!("Fillers:");
    for kind in FillerKind::ALL {
        println!("  {:<8} {}", kind.key(), kind.description());
    }

    println!("\nGradient presets:");
    for preset in GradientPreset::ALL {
        let (interpolator, shape) = preset.parts();
        println!("  {:<10} interpolator {interpolator}, shape {shape}", preset.name());
    }

    println!("\nRay presets:");
    for (name, fan) in RayFan::PRESETS {
        println!(
            "  {:<14} start {:.4} rad, step {:.4} rad, {} rays",
            name,
            fan.start_angle(),
            fan.angle_step(),
            fan.angles().len()
        );
    }
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV).ok();

    // Header
    println!("Tilefill v{VERSION}");
    println!(
        "Region fills and contour shading for sprite and tile images\n"
    );

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG        = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("tilefill=warn,region_fill=warn (default)")
    );

    // Config source
    let config_source = match config_file {
        Some(path) if PathBuf::from(&path).exists() => path,
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfig:  {config_source}");

    // Commands section
    println!("\nCommands:");
    println!("  tilefill fill   Fill a region of a PNG file");
    println!("  tilefill list   List fillers and presets");
    println!("\nRun 'tilefill --help' for more details.");
}
