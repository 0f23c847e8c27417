pub mod classify;
pub mod clusters;
pub mod compose;
pub mod explore;
pub mod status;

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use heatlens_core::config::{parse_breakpoints, CliConfigOverrides, ExplorerConfig};
use heatlens_core::registry::ClusterRegistry;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;
    let registry = Arc::new(load_registry(&cli)?);

    match cli.command {
        Commands::Status => status::execute(&config, &output),
        Commands::Clusters => clusters::execute(&registry, &config, &output),
        Commands::Classify(args) => classify::execute(args, &config, &output),
        Commands::Compose(args) => compose::execute(args, &registry, &config, &output),
        Commands::Explore(args) => explore::execute(args, registry, config, &output).await,
    }
}

/// Layered configuration: defaults, then file, environment, CLI flags.
fn load_config(cli: &Cli) -> Result<ExplorerConfig> {
    let mut config = ExplorerConfig::with_defaults();

    if let Some(path) = &cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?;
    }

    config = config.load_from_env();

    let overrides = CliConfigOverrides {
        map_token: cli.map_token.clone(),
        surface: cli.surface.as_deref().map(str::parse).transpose()?,
        breakpoints: cli
            .breakpoints
            .as_deref()
            .map(parse_breakpoints)
            .transpose()?,
        detail_zoom: None,
    };
    config.update_from_cli(overrides);

    config.validate()?;
    Ok(config)
}

fn load_registry(cli: &Cli) -> Result<ClusterRegistry> {
    match &cli.clusters_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening clusters file {}", path.display()))?;
            Ok(ClusterRegistry::from_json_reader(file)?)
        }
        None => Ok(ClusterRegistry::builtin()),
    }
}
