use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use sprig::run;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// File read when no path is given, or when the given one cannot be read.
const DEFAULT_SCRIPT: &str = "input.sprig";

/// sprig runs a script and prints the value of its final expression.
///
/// Diagnostics are controlled through `RUST_LOG` and written to stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Falls back to `input.sprig` if missing or unreadable.
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    install_tracing();
    let args = Args::parse();

    let Some(script) = read_script(args.path.as_deref()) else {
        eprintln!("Failed to read the input file. Perhaps '{DEFAULT_SCRIPT}' does not exist?");
        return ExitCode::FAILURE;
    };

    match run(&script) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            debug!("{e}");
            println!("{}", e.banner());
        },
    }
    ExitCode::SUCCESS
}

/// Reads the requested script, falling back to the default file.
fn read_script(path: Option<&Path>) -> Option<String> {
    if let Some(path) = path {
        match fs::read_to_string(path) {
            Ok(script) => return Some(script),
            Err(e) => warn!("cannot read {}: {e}; using {DEFAULT_SCRIPT}", path.display()),
        }
    }
    fs::read_to_string(DEFAULT_SCRIPT).ok()
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(std::io::stderr)
                                     .try_init();
}
