//! pocketcalc: pocket calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc tui                      # Interactive keypad (mouse + keyboard)
//! pocketcalc eval "3+4*2="            # Prints 14
//! pocketcalc eval --trace "50%n"      # Display after every key
//! pocketcalc keys                     # Key bindings
//! ```

use clap::Parser;
use pocket_calc_cli::{
    handlers::{execute_eval, execute_keys, execute_tui},
    logging, Cli, CliConfig, CliResult, ColorChoice, Commands, LogConfig, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);

    match cli.command {
        Commands::Tui(args) => {
            let config = match args.log_file {
                Some(path) => config.with_log_file(path),
                None => config,
            };
            logging::init(&LogConfig::interactive(&config))?;
            execute_tui()
        }
        Commands::Eval(args) => {
            logging::init(&LogConfig::stderr(&config))?;
            execute_eval(&config, &args)
        }
        Commands::Keys => {
            execute_keys(&config);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_log_format(cli.log_format)
}
