//! Wordsearch terminal application.
//!
//! Reads one command per line from standard input and prints the board after
//! each command. Run `help` inside the app for the command list.

use std::{io, process};

use clap::Parser as _;
use wordsearch_app::{app::WordsearchApp, cli::Args};

fn main() {
    better_panic::install();
    env_logger::init();

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    let mut app = match WordsearchApp::new(config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = app.run(io::stdin().lock(), io::stdout().lock()) {
        log::error!("terminal I/O failed: {err}");
        process::exit(1);
    }
}
