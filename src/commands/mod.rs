mod parse;
mod serve;

pub use parse::ParseArgs;
pub use serve::ServeArgs;

use crate::cli::Commands;

impl Commands {
    pub async fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Serve(args) => serve::run(args).await,
            Self::Parse(args) => parse::run(args),
            Self::Completions { shell } => {
                completions(*shell);
                Ok(())
            }
        }
    }
}

fn completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;

    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
