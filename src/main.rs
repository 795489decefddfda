use clap::Parser;
use gitmate::cli::{execute_command, Cli};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Tracing initialized with level: {}", level);

    if let Err(e) = execute_command(cli) {
        if e.is_recoverable() {
            println!("{}", e);
            return;
        }
        eprintln!("gitmate: {}", e);
        std::process::exit(1);
    }
}
