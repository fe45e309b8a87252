mod cli;
mod core;

use clap::Parser;

use crate::cli::Cli;
use crate::core::config::Config;
use crate::core::error::ForgeError;

fn run() -> Result<(), ForgeError> {
    let parsed = Cli::parse();
    let Some(command) = parsed.command else {
        return cli::print_help();
    };

    let config = Config::resolve(parsed.dir)?;
    log::debug!("base directory {}", config.base_dir().display());
    cli::execute(command, &config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        log::debug!("{err:?}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
