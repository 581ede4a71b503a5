use clap::Parser;
use colored::Colorize;
use make2bat::cli::{self, Cli};

fn main() {
    env_logger::init();

    let args = Cli::parse();

    if let Err(e) = cli::main(&args) {
        eprintln!("{}", format!("ERROR: {e}").red());
        std::process::exit(1);
    }
}
