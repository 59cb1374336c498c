//! `compute-release-directory` entry point.
//!
//! Prints the prebuilt variant directory for this host on stdout, or a
//! reason on stderr and exits 1.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use hipsmoke_cli::handlers::release_dir;
use hipsmoke_cli::{SelectorCli, bootstrap, usage_exit_code};
use hipsmoke_runtime::DefaultPlatformProbe;

fn main() -> ExitCode {
    bootstrap::load_env();

    let cli = match SelectorCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_exit_code(&err));
        }
    };

    bootstrap::install_logging(cli.verbose);

    let probe = DefaultPlatformProbe::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match release_dir::execute(&probe, &cli.args, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
