use clap::Parser;
use contract_simplifier::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Process(args) => cli::process::run(args).await,
        Command::Terms(args) => cli::terms::run(args).await,
        Command::Readability(args) => cli::readability::run(args).await,
    }
}
