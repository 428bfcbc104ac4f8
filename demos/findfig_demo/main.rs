//! # findfig demo
//!
//! Prints the config file that governs a directory.
//!
//! ```sh
//! cargo run --example findfig_demo -- --cwd packages/api
//! cargo run --example findfig_demo -- --use-redirect
//! FINDFIG_USE_REDIRECT=true cargo run --example findfig_demo
//! RUST_LOG=findfig=debug cargo run --example findfig_demo -- --use-redirect
//! cargo run --example findfig_demo -- --print-settings
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use findfig::{FindArgs, FindError, Finder, FinderSettings};

/// Locate the config file governing a directory.
#[derive(Parser, Debug)]
#[command(name = "findfig-demo")]
struct Cli {
    #[command(flatten)]
    find: FindArgs,

    /// Print a commented settings template and exit.
    #[arg(long)]
    print_settings: bool,
}

fn run(cli: &Cli) -> Result<(), FindError> {
    if cli.print_settings {
        print!("{}", FinderSettings::template());
        return Ok(());
    }

    let settings = FinderSettings::load(cli.find.settings.as_deref())?;
    let mut options = cli.find.options();
    options.use_redirect |= settings.use_redirect;
    let finder = Finder::builder().settings(settings).build()?;

    match finder.find(&cli.find.start_dir, options)? {
        Some(path) => println!("{}", path.display()),
        None => println!("No config file found"),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
