//! confplug-server: chat command host for runtime-editable settings
//!
//! Loads the setting catalog and the persisted snapshot, then either runs a
//! one-shot console command or serves `/config <setting> <value>` chat
//! lines read from stdin.

mod auth;
mod cli;
mod command;
mod config;
mod dispatch;
mod host;
mod reply;

use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;

use confplug_utils::{init_logging_with_config, ConfplugError, Result};

use auth::{Principal, TagAuthorizer};
use cli::{Cli, Command};
use config::{ConfigLoader, HostConfig};
use dispatch::CommandDispatcher;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging_with_config(cli.log_config()) {
        eprintln!("{}", e);
    }

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    let mut config: HostConfig = ConfigLoader::load_and_validate(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.store.catalog_path = Some(catalog);
    }
    if let Some(snapshot) = cli.snapshot {
        config.store.snapshot_path = Some(snapshot);
    }

    let store = host::open_store(&config.store)?;

    match cli.command {
        Command::List => {
            let snapshot = store.snapshot();
            for schema in store.list_known_settings() {
                let lock = if schema.locked { " [locked]" } else { "" };
                println!(
                    "{:<16} {:<16} {}{}",
                    schema.name,
                    schema.kind.to_string(),
                    snapshot.get(&schema.name).unwrap_or("-"),
                    lock
                );
            }
            Ok(0)
        }
        Command::Get { key } => match store.get(&key) {
            Ok(value) => {
                println!("{}", reply::current_value(&key, value.as_deref()));
                Ok(0)
            }
            Err(e) => {
                eprintln!("{}", reply::setting_error(&e));
                Ok(1)
            }
        },
        Command::Set { key, value } => {
            let result = tokio::task::spawn_blocking(move || {
                store.set(&key, &value).map(|stored| (key, stored))
            })
            .await
            .map_err(|e| ConfplugError::internal(format!("set task failed: {}", e)))?;
            match result {
                Ok((key, stored)) => {
                    println!("{}", reply::changed(&key, &stored));
                    Ok(0)
                }
                Err(e) => {
                    eprintln!("{}", reply::setting_error(&e));
                    Ok(1)
                }
            }
        }
        Command::Serve {
            player,
            tags,
            console,
        } => {
            let principal = if console {
                Principal::console()
            } else {
                Principal::player(player, tags)
            };
            let dispatcher = CommandDispatcher::new(
                Arc::new(store),
                TagAuthorizer::new(config.command.admin_tag.clone()),
                config.command,
            );

            host::serve(
                Arc::new(dispatcher),
                principal,
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            )
            .await?;
            Ok(0)
        }
    }
}
