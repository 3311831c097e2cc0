use std::net::SocketAddr;

use anyhow::Context;
use clap::Args;

use crate::gateway::Gateway;
use crate::server;
use crate::shared::config::Config;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Open the page in the default browser once listening
    #[arg(long)]
    pub open: bool,
}

pub async fn run(args: &ServeArgs) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    if config.allowed_owners.is_empty() {
        tracing::info!("no owner allow-list configured, showing every owner");
    }
    let gateway = Gateway::new(&config).context("failed to build GitHub gateway")?;
    server::run(gateway, args.bind, args.open).await
}
