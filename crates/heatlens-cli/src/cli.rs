use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Heatlens - Urban Heat Island map-explorer engine
#[derive(Parser, Debug)]
#[command(name = "heatlens")]
#[command(about = "Urban Heat Island map-explorer engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Map-surface credential (overrides file and environment)
    #[arg(long, global = true)]
    pub map_token: Option<String>,

    /// Surface adapter to mount (canvas or placeholder)
    #[arg(long, global = true)]
    pub surface: Option<String>,

    /// Zone breakpoints as an ascending triple, e.g. 7.0,7.75,8.0
    #[arg(long, global = true)]
    pub breakpoints: Option<String>,

    /// JSON file of cluster records (defaults to the builtin registry)
    #[arg(long, global = true)]
    pub clusters_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show effective configuration and where each value came from
    Status,

    /// List cluster projections (id, name, zone, metrics)
    Clusters,

    /// Classify a primary-metric value under the configured breakpoints
    Classify(ClassifyArgs),

    /// Run the layer compositor and emit the drawable scene
    Compose(ComposeArgs),

    /// Drive a full engine session: mount, toggle, select
    Explore(ExploreArgs),
}

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Primary metric value (UHI score)
    pub value: f64,
}

#[derive(Parser, Debug)]
pub struct ComposeArgs {
    /// Layers to switch off before composing (repeatable)
    #[arg(long = "disable")]
    pub disable: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct ExploreArgs {
    /// Cluster id to select
    #[arg(long)]
    pub select: String,

    /// Layers to toggle before selecting (repeatable)
    #[arg(long = "toggle")]
    pub toggle: Vec<String>,
}
