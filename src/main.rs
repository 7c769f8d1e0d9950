mod app;
mod cli;
mod config;
mod core;
mod error;
mod output;
mod toolbox;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    // JSON consumers (launcher plugins, jq) must not see config chatter
    let config = if cli.json || cli.jq.is_some() {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
