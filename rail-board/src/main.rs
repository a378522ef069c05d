use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rail_board::board::BoardOrder;
use rail_board::dashboard::{self, DashboardConfig, DashboardError};
use rail_board::realtime::{RealtimeClient, RealtimeConfig};
use rail_board::stations::lookup_station;

/// Default log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "rail_board=info";

#[derive(Parser, Debug)]
#[command(name = "rail-board", version, about = "Live Irish Rail departure board")]
struct Cli {
    /// Station name, alias or code (e.g. "Connolly", "dun laoghaire", "TARA")
    station: String,

    #[arg(long, help = "Use the local server on 127.0.0.1:8080 instead of the live API")]
    local: bool,

    #[arg(long, help = "Override the API base URL")]
    base_url: Option<String>,

    #[arg(long, value_name = "SECS", help = "Seconds to wait for each API response")]
    timeout: Option<u64>,

    #[arg(
        long,
        value_enum,
        default_value_t = BoardOrder::Feed,
        help = "Order of trains within a direction"
    )]
    sort: BoardOrder,

    #[arg(long, value_name = "PATH", help = "Write logs to this file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn realtime_config(&self) -> RealtimeConfig {
        let mut config = if self.local {
            RealtimeConfig::local()
        } else {
            RealtimeConfig::production()
        };
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(secs);
        }
        config
    }
}

/// Send logs to `log_file`. The dashboard owns the terminal, so without a
/// file nothing is logged.
fn init_logging(log_file: Option<&Path>) -> std::io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

async fn run(cli: Cli) -> Result<(), DashboardError> {
    let client = RealtimeClient::new(cli.realtime_config()).map_err(DashboardError::ClientInit)?;
    let station = lookup_station(&client, &cli.station).await?;
    let config = DashboardConfig::default().with_order(cli.sort);

    dashboard::run(client, station, config).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("error: cannot open log file: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "rail-board exiting");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
