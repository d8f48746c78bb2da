//! Command-line surface: one batch operation, no subcommands.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::batch;
use crate::config::{BatchConfig, FetchOptions};

/// Top-level CLI for the napfetch batch fetcher.
#[derive(Debug, Parser)]
#[command(name = "napfetch")]
#[command(about = "Fetch NAP-catalogued GTFS feeds and write their mapping", long_about = None)]
pub struct Cli {
    /// Path to the local NAP catalog file.
    #[arg(long, default_value = "es.json")]
    pub catalog: PathBuf,

    /// Path for the generated feed mapping file.
    #[arg(long, default_value = "es_mapping.json")]
    pub output: PathBuf,

    /// Directory that receives the downloaded feed archives.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Resolve the API key before any other work so a misconfigured run
        // exits without reading the catalog or creating files.
        let fetch = FetchOptions::from_env()?;
        let cfg = BatchConfig {
            catalog_path: cli.catalog,
            output_path: cli.output,
            download_dir: cli.dir,
            fetch,
        };
        tracing::debug!(
            catalog = %cfg.catalog_path.display(),
            output = %cfg.output_path.display(),
            dir = %cfg.download_dir.display(),
            "starting batch"
        );

        let summary = batch::run(&cfg)?;

        println!();
        println!("Downloaded {} GTFS feeds", summary.total);
        println!("Mapping saved to {}", cfg.output_path.display());
        Ok(())
    }
}
