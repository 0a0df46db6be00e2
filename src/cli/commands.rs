use clap::{Parser, Subcommand};

/// `TreadGPT` - rule-based financial-assistant chat engine.
#[derive(Parser, Debug)]
#[command(name = "treadgpt")]
#[command(version = "0.1.0")]
#[command(about = "A rule-based financial-assistant chat engine.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Single message mode (print one reply and exit)
        #[arg(short, long)]
        message: Option<String>,

        /// Fixed RNG seed for reproducible replies (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Start the HTTP gateway (JSON chat API)
    Gateway {
        /// Port to listen on (default from config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (default from config)
        #[arg(long)]
        host: Option<String>,
    },

    /// List the quick-action catalog
    Actions {
        /// Filter by category (analysis, strategy, education, alerts)
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_has_no_flag_conflicts() {
        Cli::command().debug_assert();
    }
}
