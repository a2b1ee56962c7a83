//! Command execution.

use anyhow::Result;
use broadcast::{resolve_name, BroadcastName, Resolver, Role};

use crate::cli::{Cli, Commands};

/// Run a parsed command and return what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let resolver = Resolver::new(cli.relay.resolver_config());
    match &cli.command {
        Commands::Resolve { role, name } => {
            let name = name_or_default(name.as_deref(), *role);
            Ok(resolver.resolve_address(&name).into_string())
        }
        Commands::Link { name } => {
            let name = BroadcastName::new(name.as_str())
                .ok_or_else(|| anyhow::anyhow!("broadcast name must not be empty"))?;
            Ok(resolver.watch_link(&name))
        }
    }
}

/// Same fallback as a page with no `name` parameter.
fn name_or_default(name: Option<&str>, role: Role) -> BroadcastName {
    name.and_then(BroadcastName::new)
        .unwrap_or_else(|| resolve_name("", role))
}
