use clap::{CommandFactory, Parser};
use std::path::PathBuf;

mod client;
mod commands;
mod core;
mod storage;

use client::PostalClient;
use commands::Commands;
use core::config::{resolve_data_dir, DATA_DIR_ENV_VAR};
use core::exit_code::ExitCode;
use core::logger::Logger;
use storage::Store;

#[derive(Parser)]
#[command(name = "postalbro")]
#[command(about = "Test, save and replay HTTP API requests from the terminal.")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = DATA_DIR_ENV_VAR,
        help = "Directory holding saved and recent APIs [default: ~/.postalbro]",
        global = true
    )]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let exit_code = ExitCode::from(&e);
            let _ = e.print();
            std::process::exit(exit_code.code());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    Logger::init(args.debug);

    let Some(command) = args.command else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    let store = Store::new(resolve_data_dir(args.data_dir.as_deref())?);
    tracing::debug!("using data directory {}", store.dir().display());
    store.initialize().await?;

    command.execute(&PostalClient::new(store)).await
}
