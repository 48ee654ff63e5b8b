use clap::Parser;

use fillcast::cli::{self, output, Cli};
use fillcast::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config: {err}");
            std::process::exit(1);
        }
    };

    config.logging.init();

    if let Err(err) = cli::dispatch(&cli, &config) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}
