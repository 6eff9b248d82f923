mod app;

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use techgraph::graph::{builtin_declarations, load_declarations};
use techgraph::theme::FileThemeStore;
use techgraph::{CanvasSize, EngineConfig, LayoutConfig};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Settings file the selected theme is persisted to
    #[arg(long)]
    settings_file: Option<PathBuf>,

    /// JSON node declarations to show instead of the built-in catalogue
    #[arg(long)]
    graph_data: Option<PathBuf>,

    /// Seed for particle generation
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 800.0)]
    canvas_width: f32,

    #[arg(long, default_value_t = 600.0)]
    canvas_height: f32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let declarations = match &args.graph_data {
        Some(path) => load_declarations(path)?,
        None => builtin_declarations()?,
    };
    let settings_path = args
        .settings_file
        .clone()
        .or_else(FileThemeStore::default_path)
        .context("no config directory available; pass --settings-file")?;
    let config = EngineConfig {
        layout: LayoutConfig::default(),
        canvas: CanvasSize {
            width: args.canvas_width,
            height: args.canvas_height,
        },
        particle_seed: args.seed,
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };

    eframe::run_native(
        "techgraph",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::TechGraphApp::new(
                cc,
                &declarations,
                settings_path,
                &config,
            )))
        }),
    )
    .map_err(|error| anyhow!("viewer exited with an error: {error}"))
}
