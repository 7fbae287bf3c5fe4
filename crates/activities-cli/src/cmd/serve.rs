use activities_core::config::Config;
use anyhow::Context;
use std::path::Path;

pub struct ServeArgs {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub no_open: bool,
}

pub fn run(root: &Path, args: ServeArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(root).context("failed to load config")?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    tracing::debug!(
        root = %root.display(),
        policy = ?config.policy,
        "starting activities server"
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(activities_server::serve(&config, !args.no_open))
}
