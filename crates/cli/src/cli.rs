//! CLI argument parsing.

use broadcast::{ResolverConfig, Role, DEFAULT_RELAY_HOST, DEFAULT_WATCH_PAGE};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hang")]
#[command(about = "Hang demo — resolve broadcast names to relay URLs")]
pub struct Cli {
    #[command(flatten)]
    pub relay: RelayArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct RelayArgs {
    /// Relay host the URLs point at
    #[arg(long, env = "RELAY_HOST", default_value = DEFAULT_RELAY_HOST, global = true)]
    pub relay_host: String,

    /// Percent-encode reserved characters in names (env accepts true/false/1/0/yes/no)
    #[arg(
        long,
        env = "RELAY_ESCAPE_NAMES",
        global = true,
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub escape_names: bool,

    /// Watch page that publisher links point at
    #[arg(long, env = "WATCH_PAGE", default_value = DEFAULT_WATCH_PAGE, global = true)]
    pub watch_page: String,
}

impl RelayArgs {
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            relay_host: self.relay_host.clone(),
            escape_names: self.escape_names,
            watch_page: self.watch_page.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the relay URL for a broadcast
    Resolve {
        /// publish or watch; picks the default name
        #[arg(long, default_value = "watch")]
        role: Role,

        /// Broadcast name, e.g. demo/me [default: role default]
        #[arg(long)]
        name: Option<String>,
    },

    /// Print the watch page link for a published broadcast
    Link {
        #[arg(value_name = "NAME")]
        name: String,
    },
}
