use std::io;
use std::process;

use clap::Parser;

use bidtree::cli::Cli;
use bidtree::logging::setup_logging;
use bidtree::menu::Menu;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let settings = cli.settings();
    tracing::info!(?settings, "starting");

    let stdin = io::stdin();
    let mut menu = Menu::new(settings, stdin.lock(), io::stdout());
    if let Err(e) = menu.run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
