mod cli;
mod commands;

use clap::Parser;
use log::error;

use crate::cli::{is_informational, Cli, CliError, Commands};

#[tokio::main]
async fn main() {
    // Credentials may be stored in a .env file next to where the client is run.
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let wrapper = cli.build_wrapper()?;
    match cli.command {
        Commands::Timeslot { semester } => commands::timeslot(&wrapper, semester.into()).await,
        Commands::Mail { new_only } => commands::mail(&wrapper, new_only).await,
    }
}
