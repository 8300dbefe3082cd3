use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greenzones::{
    config::{ConfigLoader, Overrides},
    pipeline::Pipeline,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Rank campus zones for new green planting")]
struct Cli {
    /// Optional YAML profile with paths, weights and log level
    #[arg(long)]
    config: Option<PathBuf>,

    /// Zone dataset CSV (default: green_zones.csv)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Results file, overwritten each run (default: recommended_zones.txt)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of zones to report (default: 3)
    #[arg(long)]
    top: Option<usize>,

    /// Also write the full ranking as JSON to this path
    #[arg(long)]
    export_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ConfigLoader::new(".");
    let profile = loader.load_or_default(cli.config.as_deref())?;

    // Diagnostics go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| profile.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let profile = profile.apply(Overrides {
        input: cli.input,
        output: cli.output,
        top: cli.top,
        export_json: cli.export_json,
    });
    tracing::debug!(?profile, "resolved run profile");

    let pipeline = Pipeline::new(profile.into());
    let mut console = io::stdout().lock();
    pipeline.run(&mut console)?;
    Ok(())
}
