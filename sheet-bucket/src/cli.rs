//! # sheet-bucket CLI
//!
//! Command parsing and orchestration glue for the `sheet-bucket` binary.
//! All pipeline logic (fetching, transformation, artifact handling,
//! publish orchestration) lives in [`sheet-bucket-core`]; this module only
//! exposes it to the operator.
//!
//! - `publish` runs one source end to end and prints the viewer URL to
//!   stdout on success.
//! - `sources` lists the configured source selectors so operators can see
//!   what `--source` accepts.
//!
//! The async [`run`] entrypoint exists so integration tests can invoke the
//! CLI programmatically with a constructed [`Cli`].
//!
//! [`sheet-bucket-core`]: ../../sheet-bucket-core/

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use sheet_bucket_core::fetch::CsvSheetReader;
use sheet_bucket_core::publish::{publish, PublishOptions};

use crate::load_config::{load_config, load_credentials};
use crate::upload::R2Client;

/// CLI for sheet-bucket: publish listing-sheet snapshots to an R2 bucket.
#[derive(Parser)]
#[clap(
    name = "sheet-bucket",
    version,
    about = "Fetch a listing sheet, publish its JSON snapshot to the bucket and print the viewer URL"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish one source's sheet as a date-stamped artifact
    Publish {
        /// Path to the YAML config file
        #[clap(long)]
        config: PathBuf,
        /// Source selector name; defaults to the first configured source
        #[clap(long)]
        source: Option<String>,
        /// Run date as YYYY-MM-DD; defaults to today
        #[clap(long)]
        date: Option<NaiveDate>,
    },
    /// List the configured source selectors
    Sources {
        /// Path to the YAML config file
        #[clap(long)]
        config: PathBuf,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Publish {
            config,
            source,
            date,
        } => {
            let config = load_config(config)?;
            config.trace_loaded();

            let source = match source {
                Some(name) => config.source(&name).cloned().ok_or_else(|| {
                    anyhow!("unknown source {name:?}; run `sheet-bucket sources` to list them")
                })?,
                None => config
                    .sources
                    .first()
                    .cloned()
                    .ok_or_else(|| anyhow!("config declares no sources"))?,
            };

            let credentials = load_credentials()?;
            let uploader = R2Client::new(&credentials, &config.bucket);
            let reader = CsvSheetReader::new()?;

            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let opts = PublishOptions {
                output_dir: config.output_dir.clone(),
                view_base_url: config.view_base_url.clone(),
                date,
            };

            tracing::info!(source = %source.name, date = %date, "Starting publish");
            match publish(&reader, &uploader, &source, &opts).await {
                Ok(report) => {
                    tracing::info!(
                        source = %report.source_name,
                        records = report.record_count,
                        object_key = %report.object_key,
                        "Publish complete"
                    );
                    if report.empty {
                        tracing::warn!(
                            source = %report.source_name,
                            "Published artifact is empty; check the sheet before sharing the link"
                        );
                    }
                    println!("{}", report.view_url);
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %e, "Publish failed");
                    Err(e.into())
                }
            }
        }
        Commands::Sources { config } => {
            let config = load_config(config)?;
            for source in &config.sources {
                println!("{}\t{}\t{}", source.name, source.prefix, source.sheet_id);
            }
            Ok(())
        }
    }
}
