use std::io;

use anyhow::Result;
use clap::Parser;

use workout_display::cli::{self, Cli, Command};
use workout_display::display::run_display;
use workout_display::store::StateStore;

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let store = StateStore::beside_executable()?;
    log::info!("Using state file {}", store.path().display());

    match cli::run(&args, &store, &mut io::stdout().lock())? {
        Command::Exit => Ok(()),
        Command::Display { fullscreen } => run_display(store, fullscreen),
    }
}
