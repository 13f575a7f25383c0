use std::io;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use team_seqreport::app::App;
use team_seqreport::config::{ConfigLoader, ConfigOverrides};
use team_seqreport::ncbi::EntrezHttpClient;
use team_seqreport::roster::RosterLoader;

#[derive(Parser)]
#[command(name = "team-report")]
#[command(about = "Print a team roster with a DNA preview and GC content fetched from NCBI")]
#[command(version, author)]
struct Cli {
    /// Roster table with name, username, country, hobby, affiliations and url columns
    #[arg(default_value = "team.csv")]
    roster: Utf8PathBuf,

    /// JSON config file (defaults to ./team-report.json when present)
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Contact email sent to NCBI with every request
    #[arg(long)]
    email: Option<String>,

    /// Number of bases shown in each preview
    #[arg(long)]
    preview_len: Option<usize>,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        contact_email: cli.email,
        preview_len: cli.preview_len,
    };
    let config = ConfigLoader::resolve(cli.config.as_deref(), overrides)?;

    let records = RosterLoader::load(&cli.roster)?;

    let fetcher = EntrezHttpClient::new(config.clone())?;
    let app = App::new(&config, fetcher);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(&records, &mut out).into_diagnostic()?;
    Ok(())
}
