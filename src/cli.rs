use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "snyk-export")]
#[command(about = "Export the project names of a Snyk organization to CSV", version)]
#[command(after_help = "EXAMPLES:
    snyk-export $SNYK_TOKEN 0f1e2d3c-...            Write projects.csv
    snyk-export $SNYK_TOKEN my-org -o acme.csv      Write to another file
    snyk-export $SNYK_TOKEN my-org --api-url https://api.eu.snyk.io/rest")]
pub struct Cli {
    /// Snyk API token
    #[arg(value_name = "API_TOKEN")]
    pub token: String,

    /// Organization ID whose projects are exported
    #[arg(value_name = "ORG_ID")]
    pub org_id: String,

    /// Output CSV file [default: projects.csv]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// REST API base URL (also read from SNYK_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Suppress the success message
    #[arg(long, short)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short)]
    pub verbose: bool,
}
