use anyhow::Context;
use clap::Parser;
use dns_access_log_domain::{CliOverrides, Config};
use dns_access_log_infrastructure::exchange::ExchangeReader;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dns-access-log")]
#[command(version)]
#[command(about = "Render DNS query/answer exchanges as access log lines")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// JSON file with completed exchanges ('-' reads stdin)
    #[arg(short = 'i', long, value_name = "FILE", default_value = "-")]
    input: String,

    /// Access log format (text, json)
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Append access log lines to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the supported access log tokens and exit
    #[arg(long)]
    list_tokens: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        format: cli.format.clone(),
        output: cli.output.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting DNS access log v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = cli.config.clone().or_else(Config::get_config_path) {
        info!(path = %path, "Using configuration file");
    }

    let services = di::AccessLogServices::new(&config)?;

    if cli.list_tokens {
        for token in services.registry.tokens() {
            println!("{}", token);
        }
        return Ok(());
    }

    let exchanges = ExchangeReader::from_path(&cli.input)
        .with_context(|| format!("Failed to read exchanges from {}", cli.input))?;

    let mut failed = 0usize;
    for exchange in &exchanges {
        if let Err(e) = services.log_exchange.execute(exchange) {
            error!(error = %e, "Failed to log DNS exchange");
            failed += 1;
        }
    }
    services.log_exchange.flush()?;

    info!(
        rendered = exchanges.len() - failed,
        failed, "Finished rendering DNS access log"
    );
    Ok(())
}
