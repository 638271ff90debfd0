//! color-theory - CLI to derive brand palettes from a base color.

use anyhow::{Context, Result};
use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use color_theory_rs::{
    config, describe_by_hue, format_swatches, generate_palette, usage_advice, Color, ExportFormat,
};

/// Derive a brand palette (complementary, analogous, triadic, shades,
/// variants) from a base color.
#[derive(Parser, Debug)]
#[command(name = "color-theory")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base color as a hex string, e.g. "#1E90FF"
    #[arg(short, long, conflicts_with = "theme")]
    color: Option<String>,

    /// Use a named theme preset instead of a hex color
    #[arg(short, long)]
    theme: Option<String>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "css")]
    format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Append psychology and usage notes per swatch
    #[arg(long)]
    describe: bool,

    /// List the available theme presets and exit
    #[arg(long)]
    list_themes: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.list_themes {
        for preset in config::THEME_PRESETS {
            println!("{:<10} {:<14} {}", preset.name, preset.label, preset.base_hex);
        }
        return Ok(());
    }

    // Resolve the base color: preset theme, explicit hex, or the default
    let hex = match &args.theme {
        Some(name) => config::find_theme(name)?.base_hex.to_string(),
        None => args
            .color
            .clone()
            .unwrap_or_else(|| config::DEFAULT_BASE_HEX.to_string()),
    };

    let base = Color::from_hex(&hex).with_context(|| format!("Failed to parse '{}'", hex))?;

    info!("Base color: {}", base);

    let palette = generate_palette(base);
    let swatches = palette.swatches();

    let mut rendered = format_swatches(&swatches, args.format)?;

    if args.describe {
        let mut notes = String::new();
        for swatch in &swatches {
            let desc = describe_by_hue(swatch.color);
            writeln!(notes, "\n## {} ({})", swatch.role, swatch.color)?;
            writeln!(notes, "{}", usage_advice(swatch.role))?;
            writeln!(notes, "{}", desc.primary_impact)?;
        }
        rendered.push('\n');
        rendered.push_str(&notes);
    }

    // Write output
    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
