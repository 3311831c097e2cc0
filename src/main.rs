mod cli;
mod commands;
mod gateway;
mod infra;
mod parser;
mod server;
mod shared;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the variables may come from the shell.
    let _ = dotenvy::dotenv();

    let Cli {
        log_format,
        command,
    } = Cli::parse();
    shared::logging::init(log_format);

    command.run().await
}
