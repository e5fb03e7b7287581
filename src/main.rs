//! Item flow CLI - dispatches the load trigger and prints the selected view

mod logging;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::time::MissedTickBehavior;
use tracing::info;

use itemflow::action::Action;
use itemflow::config::{Config, SourceConfig, URL_ENV};
use itemflow::error::ConfigError;
use itemflow::runtime::ItemFlow;
use itemflow::schema::write_schemas;
use itemflow::selector::{select_view, ItemsView};

/// How often the wait loop reports progress
const TICK_MS: u64 = 500;

/// Load an item collection through the action/effect/reducer flow
#[derive(Parser, Debug)]
#[command(name = "itemflow")]
#[command(about = "Fetch items through a unidirectional state flow and print them")]
struct Args {
    /// JSON endpoint returning the item list (falls back to ITEMFLOW_URL)
    #[arg(long, short)]
    url: Option<String>,

    /// Object key holding the item array, for wrapped responses
    #[arg(long)]
    field: Option<String>,

    /// Number of load triggers dispatched at startup (minimum 1)
    #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    requests: u64,

    /// Per-request timeout in seconds
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Skip the network and resolve every request with these items
    #[arg(long, num_args = 1.., conflicts_with = "url")]
    offline: Option<Vec<String>>,

    /// Print the view as JSON
    #[arg(long)]
    json: bool,

    /// Write the state and action JSON schemas into this directory and exit
    #[arg(long, value_name = "DIR")]
    schema: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn to_config(&self) -> Result<Config, ConfigError> {
        let source = match &self.offline {
            Some(items) => SourceConfig::Offline {
                items: items.clone(),
            },
            None => {
                let url = self
                    .url
                    .clone()
                    .or_else(|| std::env::var(URL_ENV).ok())
                    .ok_or(ConfigError::MissingSource)?;
                SourceConfig::Http {
                    url,
                    field: self.field.clone(),
                }
            }
        };

        let config = Config {
            source,
            requests: self.requests as usize,
            timeout: self.timeout.map(Duration::from_secs),
        };
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level).map_err(config_error)?;

    if let Some(dir) = &args.schema {
        for path in write_schemas(dir)? {
            info!(path = %path.display(), "wrote schema");
        }
        return Ok(());
    }

    let config = args.to_config().map_err(config_error)?;

    let mut flow = ItemFlow::from_config(&config);
    for _ in 0..config.requests {
        flow.dispatch(Action::request_items());
    }

    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker.tick().await;

    loop {
        tokio::select! {
            completion = flow.next_completion() => match completion {
                Some(action) => {
                    flow.dispatch(action);
                }
                None => break,
            },
            _ = ticker.tick() => {
                flow.dispatch(Action::Tick);
                info!(in_flight = flow.in_flight(), "waiting for items");
            }
        }
    }
    flow.dispatch(Action::Quit);

    let view = flow.select(select_view);
    print_view(&view, args.json)?;
    if let Some(error) = &view.error {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
    Ok(())
}

fn print_view(view: &ItemsView, json: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        let rendered = serde_json::to_string_pretty(view).map_err(io::Error::other)?;
        writeln!(out, "{}", rendered)?;
        return Ok(());
    }

    writeln!(out, "{} item(s)", view.count)?;
    for item in &view.items {
        writeln!(out, "  - {}", item)?;
    }
    Ok(())
}

fn config_error(error: ConfigError) -> io::Error {
    io::Error::other(format!("configuration error: {error}"))
}
