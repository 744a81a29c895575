use anyhow::{Context, Result, bail};
use clap::Parser;
use pdf2csv_ingest::{Issuer, Loader, Pdftotext};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PDF2CSV_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "pdf2csv",
    version = VERSION,
    about = "Convert credit card statement PDFs to CSV (Date, Description, Amount)"
)]
struct Cli {
    /// Statement PDFs, converted in the order given
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output to file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Force the statement format: chase, amex, discover or boa
    #[arg(long)]
    issuer: Option<Issuer>,

    /// Seconds to wait for the text extractor per document
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Config file (default: ~/.pdf2csv/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.files.is_empty() {
        bail!("no files specified");
    }

    let cfg = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };

    let command = which::which(&cfg.extractor.command)
        .with_context(|| format!("{} not found on PATH", cfg.extractor.command))?;
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(cfg.extractor.timeout_secs));
    let extractor = Pdftotext::new(command, cfg.extractor.args.clone(), timeout);
    let loader = Loader::new(extractor)?.with_issuer(cli.issuer.or(cfg.statement.issuer));

    let mut sink = output::open(cli.output.as_deref())?;

    // One document at a time; rows already written stay written if a later one fails.
    for file in &cli.files {
        let statement = loader.load(file).await?;
        let written = sink.write_statement(&statement)?;
        tracing::info!(
            path = %file.display(),
            rows = written,
            rewards = statement.len() - written,
            "converted"
        );
    }

    sink.finish()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
