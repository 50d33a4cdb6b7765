//! txweb main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use txweb_api::{start_server, AppState};
use txweb_config::{Config, ConfigError, IdAllocation};

#[derive(Parser, Debug)]
#[command(name = "txweb")]
#[command(author = "txweb Contributors")]
#[command(version)]
#[command(about = "A small server-rendered transaction manager", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Override server.host
    #[arg(long)]
    host: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override store.id_allocation ("last" or "max")
    #[arg(long)]
    id_allocation: Option<IdAllocation>,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    // A missing file is fine, anything else wrong with it is not
    let (mut config, missing_config) = match Config::load(&args.config) {
        Ok(config) => (config, false),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), true),
        Err(e) => {
            eprintln!("{}", e.to_details());
            return Err(e).with_context(|| format!("loading {}", args.config.display()));
        }
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(policy) = args.id_allocation {
        config.store.id_allocation = policy;
    }
    config.validate().context("invalid command line overrides")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if missing_config {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    } else {
        log::info!("Config loaded from {}", args.config.display());
    }

    let state = AppState::new(config);
    log::info!(
        "Store ready: {} transactions, id allocation '{}'",
        state.store.try_read().map(|s| s.len()).unwrap_or_default(),
        state.config.store.id_allocation
    );

    let rt = Runtime::new()?;
    rt.block_on(start_server(state)).context("server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["txweb"]).unwrap();
        assert_eq!(args.config, PathBuf::from("config.yaml"));
        assert!(args.id_allocation.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn test_args_id_allocation_override() {
        let args = Args::try_parse_from(["txweb", "--id-allocation", "max", "-p", "9090"]).unwrap();
        assert_eq!(args.id_allocation, Some(IdAllocation::Max));
        assert_eq!(args.port, Some(9090));
        assert!(Args::try_parse_from(["txweb", "--id-allocation", "newest"]).is_err());
    }
}
