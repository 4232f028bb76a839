use std::process::ExitCode;

use anki_vim::{Cli, Settings};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // No arguments at all: show usage and fail
    if std::env::args_os().len() == 1 {
        // Nothing sensible to do if stdout is gone
        let _ = Cli::command().print_help();
        return ExitCode::from(1);
    }

    let cli = Cli::parse();

    // Logs go to stderr, the editor owns the terminal while it runs
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anki_vim::Result<()> {
    let settings = Settings::resolve(cli.overrides())?;

    match cli.deck.as_deref() {
        Some(deck) if !cli.list => cmd::add::run(&settings, deck, cli.once),
        _ => cmd::list::run(&settings),
    }
}

mod cmd {
    pub mod add;
    pub mod list;
}
