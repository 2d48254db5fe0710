use std::fs;
use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::{PipelineError, Result};
use crate::fetchers::{build_client, AggregatorFetcher, GovFetcher, StationFetcher};
use crate::processors::{DailyAggregator, WindowExtractor};
use crate::record::schema::field_label;
use crate::record::{Record, RecordBuilder, SchemaVersion};
use crate::writers::ClientrawWriter;

pub async fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            output,
            schema_version,
        } => {
            let version = resolve_version(&settings, schema_version)?;
            let output = output.unwrap_or_else(|| settings.output_path.clone());

            let (record, now) = assemble(&settings, version).await?;
            ClientrawWriter::new().write(&record, &output)?;

            println!(
                "{} updated at {}",
                output.display(),
                now.format("%Y-%m-%d %H:%M:%S")
            );
        }

        Commands::Preview { schema_version } => {
            let version = resolve_version(&settings, schema_version)?;
            let (record, _now) = assemble(&settings, version).await?;
            println!("{}", record.to_line());
        }

        Commands::Inspect { file, all } => {
            inspect(&file, all)?;
        }
    }

    Ok(())
}

fn resolve_version(settings: &Settings, flag: Option<u16>) -> Result<SchemaVersion> {
    match flag {
        Some(count) => SchemaVersion::try_from(count),
        None => Ok(settings.schema_version),
    }
}

/// One full pipeline pass: fetch the three sources in order, window and
/// aggregate, then assemble the record. Any fetch failure aborts without
/// touching the output file.
async fn assemble(
    settings: &Settings,
    version: SchemaVersion,
) -> Result<(Record, chrono::DateTime<chrono::FixedOffset>)> {
    let client = build_client()?;

    let station = StationFetcher::new(client.clone(), &settings.primary_url)
        .fetch()
        .await?;
    let observations = AggregatorFetcher::new(client.clone(), &settings.aggregator_url)
        .fetch()
        .await?;
    let gov = GovFetcher::new(client, &settings.gov_url).fetch().await?;

    let now = settings.local_now()?;
    let window = WindowExtractor::new().extract(&observations, now);
    let summary = DailyAggregator::new().summarize(&observations, &window, &station);

    let record = RecordBuilder::new(version)
        .with_header_id(settings.header_id)
        .build(&station, &window, &summary, &gov, now)?;

    Ok((record, now))
}

fn inspect(file: &PathBuf, all: bool) -> Result<()> {
    let content = fs::read_to_string(file)?;
    let tokens: Vec<&str> = content.trim_end().split(' ').collect();

    match SchemaVersion::from_field_count(tokens.len()) {
        Some(version) => println!("{}: schema {} ({} fields)", file.display(), version, tokens.len()),
        None => {
            return Err(PipelineError::InvalidRecord(format!(
                "{} holds {} fields, not a known schema",
                file.display(),
                tokens.len()
            )))
        }
    }

    for (index, token) in tokens.iter().enumerate() {
        let label = field_label(index);
        if !all && (label == "reserved" || *token == "-100") {
            continue;
        }
        println!("{:>5}  {:<40} {}", index, label, token);
    }

    Ok(())
}
