use anyhow::anyhow;
use std::str::FromStr;

use crate::actions::{self, ActionCategory};
use crate::cli::commands::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::gateway;
use crate::ui::style;

pub async fn dispatch(cli: Cli, mut config: Config) -> Result<()> {
    match cli.command {
        Commands::Chat { message, seed } => {
            if let Some(seed) = seed {
                config.chat.rng_seed = Some(seed);
            }
            match message {
                Some(message) => crate::app::shell::run_once(&config, &message).await?,
                None => crate::app::shell::run_shell(&config).await?,
            }
        }

        Commands::Gateway { port, host } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            gateway::run_gateway(&host, port, config).await?;
        }

        Commands::Actions { category } => {
            let filter = match category.as_deref() {
                None => None,
                Some(raw) => Some(ActionCategory::from_str(raw).map_err(|_| {
                    anyhow!(
                        "unknown category: {raw} (expected analysis, strategy, education, alerts)"
                    )
                })?),
            };
            print_actions(filter);
        }
    }
    Ok(())
}

fn print_actions(filter: Option<ActionCategory>) {
    for action in actions::by_category(filter) {
        println!(
            "{} {}",
            style::accent(action.id),
            style::dim(format!("[{}]", action.category))
        );
        println!("  {}", style::header(action.label));
        println!("  {}", style::dim(action.description));
        println!();
    }
}
