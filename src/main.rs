use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use catalog_search::config::CONFIG_ENV_VAR;
use catalog_search::{
    notice_message, prepare_search, prepare_selection_search, query_detection_message,
    CatalogSearchConfig, SearchRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// Turn selected or typed text into a library catalog search URL.
#[derive(Debug, Parser)]
#[command(name = "catalog-search", version, about)]
struct Cli {
    /// Text to search for. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// YAML configuration file.
    #[arg(long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Treat the text as a page selection (applies the selection cap first).
    #[arg(long)]
    selection: bool,

    /// Print the full request as JSON instead of just the URL.
    #[arg(long)]
    json: bool,

    /// Log level filter, used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match &cli.config {
        Some(path) => CatalogSearchConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CatalogSearchConfig::default(),
    };
    let endpoint = config.search_endpoint()?;
    let text = cli.text.join(" ");

    let request: SearchRequest = if cli.selection {
        let search = prepare_selection_search(&text, &config.limits, &endpoint)?;
        for notice in &search.selection.notices {
            eprintln!("{}", notice_message(notice));
        }
        search.request
    } else {
        prepare_search(&text, &config.limits, &endpoint)
            .context("please enter search text")?
    };

    if let Some(message) = query_detection_message(&request.query) {
        eprintln!("{message}");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&request)?);
    } else {
        println!("{}", request.url);
    }

    Ok(())
}
