use anyhow::Result;
use linkmask_config::Config;
use linkmask_core::OutputOrder;
use linkmask_engine::{Pipeline, RunReport};
use linkmask_sources::{FileSink, FileSource, Sink, StdoutSink};
use std::path::Path;
use tracing::info;

use super::load_config;
use crate::cli::RunArgs;

pub async fn handle(args: RunArgs, config_path: Option<&Path>) -> Result<()> {
    let config = apply_overrides(&load_config(config_path)?, &args);

    let to_stdout = args.output.is_none();
    let sink: Box<dyn Sink> = match &args.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(StdoutSink),
    };

    let pipeline = Pipeline::from_config(&config, Box::new(FileSource::new(&args.input)), sink)?;
    let report = pipeline.run().await?;

    let summary = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        format_report(&report)
    };

    // Keep stdout for the masked messages when they are written there
    if to_stdout {
        info!("{}", summary);
    } else {
        println!("{}", summary);
    }

    Ok(())
}

fn apply_overrides(config: &Config, args: &RunArgs) -> Config {
    let mut config = config.clone();

    if let Some(workers) = args.workers {
        config.pool.workers = workers;
    }
    if let Some(mask_char) = args.mask_char {
        config.masking.mask_char = mask_char;
    }
    if let Some(scheme) = &args.scheme {
        config.masking.scheme = scheme.clone();
    }
    if args.unordered {
        config.pool.order = OutputOrder::Completion;
    }

    config
}

fn format_report(report: &RunReport) -> String {
    format!(
        "✓ Masked {} message(s), {} link(s)\n  From: {}\n  To: {}\n  Workers: {}\n  Elapsed: {} ms",
        report.messages,
        report.links_masked,
        report.source,
        report.sink,
        report.workers,
        report.elapsed.as_millis()
    )
}
