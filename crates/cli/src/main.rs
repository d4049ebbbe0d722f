use clap::Parser;
use ferrous_rdns_domain::{CliOverrides, Config, ResolverBackend};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod prompt;

#[derive(Parser)]
#[command(name = "ferrous-rdns")]
#[command(version)]
#[command(about = "Ferrous rDNS - Concurrent reverse DNS lookups for IP address lists")]
struct Cli {
    /// File with one IP address per line (blank lines and # comments are ignored)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Save results as CSV (".csv" is appended when missing)
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Maximum number of lookups in flight
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,

    /// Per-lookup timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Resolver backend (system, hickory)
    #[arg(long)]
    backend: Option<ResolverBackend>,

    /// Nameserver for the hickory backend (ip or ip:port)
    #[arg(long)]
    nameserver: Option<String>,

    /// Never ask for a CSV filename
    #[arg(long)]
    no_prompt: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        concurrency: cli.concurrency,
        timeout_ms: cli.timeout_ms,
        backend: cli.backend,
        nameserver: cli.nameserver.clone(),
        csv_path: cli.output.clone(),
        no_prompt: cli.no_prompt,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous rDNS v{}", env!("CARGO_PKG_VERSION"));

    let csv_path = requested_csv_path(&config)?;
    let use_cases = di::UseCases::new(&config, &cli.input)?;

    let batch = match use_cases.process.execute().await {
        Ok(batch) => batch,
        Err(e) => {
            error!(error = %e, "Cannot process input");
            return Err(e.into());
        }
    };

    let mut stdout = BufWriter::new(io::stdout().lock());
    for line in batch.console_lines() {
        writeln!(stdout, "{}", line)?;
    }
    stdout.flush()?;
    drop(stdout);

    if let Some(path) = csv_path {
        match use_cases.export.execute(&batch, &path).await {
            Ok(saved) => info!(
                path = %saved.display(),
                "Results saved; hostname column holds the address when no name was found"
            ),
            Err(e) => warn!(error = %e, "Failed to save CSV report"),
        }
    }

    info!(
        valid = batch.valid_count(),
        invalid = batch.invalid_count(),
        "Done"
    );
    Ok(())
}

fn requested_csv_path(config: &Config) -> anyhow::Result<Option<String>> {
    if let Some(path) = &config.output.csv_path {
        return Ok(Some(path.clone()));
    }
    if config.output.prompt {
        return Ok(prompt::ask_csv_path()?);
    }
    Ok(None)
}
