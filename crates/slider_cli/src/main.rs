/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slider_render::{load_fixture, SliderFixture, SliderWidget};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Render banner sliders from fixture files", long_about = None)]
struct Cli {
    /// Log filter (e.g. `debug`, `slider_render=trace`); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full slider markup
    Render {
        /// Path to the fixture file (YAML or JSON)
        fixture: PathBuf,

        /// Slider to render (defaults to the first slider in the fixture)
        #[arg(long)]
        slider_id: Option<u64>,
    },
    /// Print preload hints for the page head
    Preload {
        fixture: PathBuf,

        #[arg(long)]
        slider_id: Option<u64>,

        /// Output the link objects as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the carousel configuration JSON
    Config {
        fixture: PathBuf,

        #[arg(long)]
        slider_id: Option<u64>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Check that a fixture parses and report what it contains
    Validate { fixture: PathBuf },
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

fn load(path: &Path) -> Result<SliderFixture> {
    let fixture =
        load_fixture(path).with_context(|| format!("failed to load {}", path.display()))?;
    debug!(
        path = %path.display(),
        sliders = fixture.sliders.len(),
        banners = fixture.banners.len(),
        crops = fixture.crops.len(),
        "fixture loaded"
    );
    Ok(fixture)
}

fn run(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Render { fixture, slider_id } => {
            let fixture = load(&fixture)?;
            let renderer = fixture.build_renderer();
            let store = fixture.build_store();
            let id = slider_id.unwrap_or_else(|| fixture.default_slider_id());
            let widget = SliderWidget::new(id, &store, &store, &renderer)
                .with_lazy_load_first(fixture.renderer.lazy_load_first);

            let html = widget.to_html().context("failed to render slider")?;
            writeln!(out, "{}", html)?;
        }
        Commands::Preload {
            fixture,
            slider_id,
            json,
        } => {
            let fixture = load(&fixture)?;
            let renderer = fixture.build_renderer();
            let store = fixture.build_store();
            let id = slider_id.unwrap_or_else(|| fixture.default_slider_id());
            let widget = SliderWidget::new(id, &store, &store, &renderer);

            if json {
                let links = widget.preload_links();
                writeln!(out, "{}", serde_json::to_string_pretty(&links)?)?;
            } else {
                writeln!(out, "{}", widget.preload_html())?;
            }
        }
        Commands::Config {
            fixture,
            slider_id,
            pretty,
        } => {
            let fixture = load(&fixture)?;
            let renderer = fixture.build_renderer();
            let store = fixture.build_store();
            let id = slider_id.unwrap_or_else(|| fixture.default_slider_id());
            let widget = SliderWidget::new(id, &store, &store, &renderer);

            let config = widget
                .slider_config()
                .context("failed to serialize slider configuration")?;
            if pretty {
                let value: serde_json::Value = serde_json::from_str(&config)?;
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                writeln!(out, "{}", config)?;
            }
        }
        Commands::Validate { fixture: path } => {
            let fixture = load(&path)?;
            let active = fixture.banners.iter().filter(|b| b.is_active).count();
            writeln!(out, "{} is valid.", path.display())?;
            writeln!(out, "  sliders: {}", fixture.sliders.len())?;
            writeln!(
                out,
                "  banners: {} ({} active)",
                fixture.banners.len(),
                active
            )?;
            writeln!(out, "  crops:   {}", fixture.crops.len())?;
            writeln!(out, "  attribute providers: {}", fixture.renderer.attributes.len())?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)
}
