//! Command-line interface for the `gtrending` binary.
//!
//! The CLI fetches the trending repositories or developers pages, or extracts
//! records from a saved page, and prints the records as JSON on stdout.
//! Diagnostics go to stderr.

use std::{
    fs,
    future::Future,
    io,
    path::{Path, PathBuf},
    process,
    time::Duration,
};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use gtrending::{
    ClientConfig, DeveloperExtractor, Error, RepositoryExtractor, TimeWindow, TrendingClient,
    io_error, load_config,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Command line interface for scraping GitHub trending pages.
#[derive(Debug, Parser,)]
#[command(name = "gtrending", version, about = "Scrape GitHub trending repositories and developers")]
struct Cli
{
    /// Path to a YAML configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    config: Option<PathBuf,>,

    /// Override the base URL of the trending pages.
    #[arg(long = "base-url", value_name = "URL", env = "GTRENDING_BASE_URL", global = true)]
    base_url: Option<String,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Fetch the trending repositories page.
    Repositories(FetchArgs,),
    /// Fetch the trending developers page.
    Developers(FetchArgs,),
    /// Extract records from a saved trending page.
    Extract(ExtractArgs,),
}

#[derive(Debug, Args,)]
/// Arguments shared by the fetching subcommands.
struct FetchArgs
{
    /// Restrict the page to a programming language, e.g. `rust`.
    #[arg(long = "language", short = 'l', value_name = "LANGUAGE")]
    language: Option<String,>,

    /// Time window: today, week or month.
    #[arg(long = "since", short = 's', value_name = "WINDOW", default_value = "today")]
    since: TimeWindow,
}

#[derive(Debug, Args,)]
struct ExtractArgs
{
    /// Kind of page stored in the input file.
    #[arg(value_enum)]
    page: PageKind,

    /// Path to the saved HTML page.
    #[arg(long = "input", value_name = "FILE")]
    input: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum,)]
enum PageKind
{
    Repositories,
    Developers,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    init_tracing();

    if let Err(error,) = run(Cli::parse(),).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, transport, parse and serialization errors.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Repositories(ref args,) => {
            let client = build_client(&cli,)?;
            let records = with_spinner(
                "Fetching trending repositories...",
                client.fetch_repositories(args.language.as_deref(), args.since,),
            )
            .await?;
            write_records(&mut handle, &records, cli.pretty,)
        }
        Command::Developers(ref args,) => {
            let client = build_client(&cli,)?;
            let records = with_spinner(
                "Fetching trending developers...",
                client.fetch_developers(args.language.as_deref(), args.since,),
            )
            .await?;
            write_records(&mut handle, &records, cli.pretty,)
        }
        Command::Extract(ref args,) => {
            let config = resolve_config(&cli,)?;
            run_extract(&mut handle, &config, args, cli.pretty,)
        }
    }
}

fn resolve_config(cli: &Cli,) -> Result<ClientConfig, Error,>
{
    let config = match cli.config.as_deref() {
        Some(path,) => load_config(path,)?,
        None => ClientConfig::default(),
    };

    let config = match cli.base_url.as_deref() {
        Some(base_url,) => config.with_base_url(base_url,),
        None => config,
    };
    config.validate()?;

    Ok(config,)
}

fn build_client(cli: &Cli,) -> Result<TrendingClient, Error,>
{
    let config = resolve_config(cli,)?;
    TrendingClient::from_config(&config,)
}

fn run_extract<W: io::Write,>(
    writer: &mut W,
    config: &ClientConfig,
    args: &ExtractArgs,
    pretty: bool,
) -> Result<(), Error,>
{
    let html = read_page(&args.input,)?;
    let selectors = &config.selectors;

    match args.page {
        PageKind::Repositories => {
            let extractor = RepositoryExtractor::new(&selectors.repositories,)?;
            write_records(writer, &extractor.extract(&html,)?, pretty,)
        }
        PageKind::Developers => {
            let extractor = DeveloperExtractor::new(&selectors.developers,)?;
            write_records(writer, &extractor.extract(&html,)?, pretty,)
        }
    }
}

fn read_page(path: &Path,) -> Result<String, Error,>
{
    fs::read_to_string(path,).map_err(|source| io_error(path, source,),)
}

async fn with_spinner<T, Fut,>(message: &'static str, future: Fut,) -> Result<T, Error,>
where
    Fut: Future<Output = Result<T, Error,>,>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
            .unwrap_or_else(|_| ProgressStyle::default_spinner(),),
    );
    pb.set_message(message,);
    pb.enable_steady_tick(Duration::from_millis(100,),);

    let result = future.await;
    pb.finish_and_clear();
    result
}

fn write_records<W: io::Write, T: Serialize,>(
    writer: &mut W,
    records: &[T],
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, records,)?;
    } else {
        serde_json::to_writer(&mut *writer, records,)?;
    }

    writeln!(writer).map_err(|source| io_error(Path::new("<stdout>",), source,),)
}
