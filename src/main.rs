mod cli;
mod client;
mod config;
mod error;
mod export;
mod output;
mod responses;
#[cfg(test)]
mod test_support;
mod types;

use std::error::Error;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cli::Cli;
use client::SnykClient;
use config::Config;
use error::{ExportError, Result};

const LOG_ENV: &str = "SNYK_EXPORT_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        if let ExportError::Usage(usage) = &e {
            let _ = usage.print();
            std::process::exit(usage.exit_code());
        }

        output::print_error(&e.to_string());

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    init_logging(cli.verbose);
    output::set_quiet(cli.quiet);

    let config = Config::load()?;
    let output_path = config.resolve_output(cli.output.as_deref());
    let client = SnykClient::new(
        &config.api_url(cli.api_url.as_deref()),
        config.api_version(),
        cli.token,
    )?;

    let rows = export::run(&client, &cli.org_id, &output_path).await?;

    output::print_success(&format!(
        "Projects exported to {} successfully! ({rows} projects)",
        output_path.display()
    ));

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "snyk_export=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
