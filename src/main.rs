use std::process::exit;
use std::sync::Arc;
use cachegate::cache::errors::CacheError;
use cachegate::common::common::{render_value, setup_logging};
use cachegate::config::structs::configuration::Configuration;
use cachegate::facade::structs::cache_facade::CacheFacade;
use cachegate::flags::structs::static_config_provider::StaticConfigProvider;
use cachegate::local::structs::ttl_local_cache::TtlLocalCache;
use cachegate::structs::{Cli, Command};
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let command = args.command.unwrap_or(Command::Topology);
    if command == Command::Topology {
        return match config.topology() {
            Ok(topology) => {
                println!("{}", serde_json::to_string_pretty(&topology).map_err(std::io::Error::other)?);
                Ok(())
            }
            Err(e) => {
                error!("[Topology] {}", e);
                exit(1)
            }
        };
    }

    let outcome = Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(&config, command));

    if let Err(e) = outcome {
        error!("[Cli] {}", e);
        exit(1);
    }
    Ok(())
}

async fn serve(config: &Configuration, command: Command) -> Result<(), CacheError>
{
    let provider = Arc::new(StaticConfigProvider::from_flags(&config.flags));
    let local = Arc::new(TtlLocalCache::new(config.local_cache.capacity));
    let facade = CacheFacade::start(config, Some(provider), local)?;
    let outcome = run(&facade, command).await;
    facade.shutdown();
    outcome
}

async fn run(facade: &CacheFacade, command: Command) -> Result<(), CacheError>
{
    match command {
        Command::Topology => {}
        Command::Get { key, hot, hex } => {
            let outcome = facade.read(&key, hot, "").await;
            match &outcome.value {
                Some(value) => println!("{}", render_value(value, hex)),
                None => println!("(not found)"),
            }
            if hot {
                info!("[Cli] Hot read state: {:?}", outcome.state);
            }
        }
        Command::Set { key, value, expiration } => {
            println!("{}", facade.set(&key, value.into_bytes(), expiration, "").await?);
        }
        Command::Remove { key } => {
            println!("{}", facade.remove(&key).await?);
        }
        Command::Incr { key, amount } => {
            print_counter(facade.increment(&key, amount, "").await?);
        }
        Command::Decr { key, amount } => {
            print_counter(facade.decrement(&key, amount, "").await?);
        }
        Command::Clear => {
            facade.clear().await?;
            println!("cleared");
        }
    }
    Ok(())
}

fn print_counter(value: Option<u64>)
{
    match value {
        Some(value) => println!("{}", value),
        None => println!("(not found)"),
    }
}
