use clap::Args;

use crate::parser::{self, ParsedCommand};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ParseArgs {
    /// Command text, e.g. `#repo:acme/widgets #label:bug Fix crash`
    #[arg(required = true)]
    pub command: Vec<String>,
}

pub fn run(args: &ParseArgs) -> anyhow::Result<()> {
    println!("{}", render(&parse_words(&args.command))?);
    Ok(())
}

/// Words arrive split by the shell; rejoin them with single spaces.
fn parse_words(words: &[String]) -> ParsedCommand {
    parser::parse(&words.join(" "))
}

fn render(parsed: &ParsedCommand) -> serde_json::Result<String> {
    serde_json::to_string_pretty(parsed)
}
