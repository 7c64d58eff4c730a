//! Domainr CLI Application
//!
//! A command-line interface for searching domain names through the Domainr
//! API. This binary parses arguments, resolves credentials, issues the single
//! request and prints the results.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use domainr_lib::{
    load_env_config, resolve_credential, ConfigManager, DomainrClient, DomainrError, Filters,
    Mode, QueryIntent,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for domainr
#[derive(Parser, Debug)]
#[command(name = "domainr")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search for available domain names")]
#[command(
    long_about = "Search for available domain names using the Domainr API.\n\nCredentials are read from the [Default] section of a TOML config file (keys `mashape-key` and `client_id`) or from DOMAINR_MASHAPE_KEY / DOMAINR_CLIENT_ID."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Your domain name query
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Get information for a domain name
    #[arg(short = 'i', long = "info", help_heading = "Query")]
    pub info: bool,

    /// Use ASCII characters for domain availability
    #[arg(long = "ascii", help_heading = "Output Format")]
    pub ascii: bool,

    /// Only show domain names that are currently available
    #[arg(long = "available", help_heading = "Output Format")]
    pub available: bool,

    /// Only check for top-level domains (.com, .net, .org)
    #[arg(long = "tld", help_heading = "Output Format")]
    pub tld: bool,

    /// Use specific config file instead of automatic discovery
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Show debug logging (request URL, response status)
    #[arg(short = 'd', long = "debug", help_heading = "Configuration")]
    pub debug: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

impl Args {
    /// Build the immutable query intent for this invocation.
    fn intent(&self) -> QueryIntent {
        let mode = if self.info { Mode::Info } else { Mode::Search };
        let filters = Filters::default()
            .with_ascii(self.ascii)
            .with_available_only(self.available)
            .with_tld_only(self.tld);

        QueryIntent::new(self.query.clone(), mode, filters)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    init_logging(&args);

    match run(&args).await {
        Ok(output) => println!("{}", output),
        // API and malformed-response errors are ordinary results
        Err(e) if e.is_recoverable() => println!("{}", e),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the flags.
fn init_logging(args: &Args) {
    let default_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main query logic: credentials, request, rendering.
async fn run(args: &Args) -> Result<String, DomainrError> {
    let intent = args.intent();
    tracing::info!(query = %intent.query(), mode = ?intent.mode(), "starting domainr v{}", env!("CARGO_PKG_VERSION"));

    let env_config = load_env_config();
    let explicit_config = args
        .config
        .clone()
        .or_else(|| env_config.config.as_ref().map(PathBuf::from));

    let configured =
        ConfigManager::new().load_credentials(explicit_config.as_deref(), &env_config)?;
    let credential = resolve_credential(&configured)?;

    let client = DomainrClient::new()?;
    let payload = client.query(&intent, &credential).await?;

    ui::render_payload(&payload, intent.filters())
}
