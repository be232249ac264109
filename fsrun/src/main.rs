//! A command-line application to hand a generated macro script to the
//! external simulation program and relay its output.

#![allow(clippy::needless_return)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::*;

use fsmacro::prelude::*;

/// The arguments passed to the runner.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about)]
struct Cli {
  /// Path to the simulation executable. If absent, the FLIGHTSTREAM_EXE
  /// environment variable is consulted instead.
  #[arg(short = 'x', long = "executable")]
  executable: Option<PathBuf>,
  /// Run the external program without bringing up its window.
  #[arg(long = "hidden")]
  hidden: bool,
  /// Print the script to standard output before running it.
  #[arg(short = 'p', long = "print")]
  print: bool,
  /// Output extra/debug info while running.
  #[arg(short = 'v', long = "verbose")]
  verbose: bool,
  /// The macro script file to run.
  script: PathBuf
}

fn main() -> ExitCode {
  // init cli stuff
  let args = Cli::parse();
  let log_level = if args.verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };
  env_logger::builder().filter_level(log_level).init();
  if args.print {
    match std::fs::read_to_string(&args.script) {
      Ok(text) => print!("{}", text),
      Err(e) => {
        error!("could not read {}: {}", args.script.display(), e);
        return ExitCode::FAILURE;
      }
    }
  }
  // hand the script to the external program
  info!("Running {}...", args.script.display());
  let outcome = match run_script(
    args.executable.as_deref(),
    &args.script,
    args.hidden
  ) {
    Ok(o) => o,
    Err(e) => {
      error!("{}", e);
      return ExitCode::FAILURE;
    }
  };
  if !outcome.stdout.is_empty() {
    print!("{}", outcome.stdout);
  }
  if !outcome.stderr.is_empty() {
    eprint!("{}", outcome.stderr);
  }
  if outcome.success() {
    info!("All done.");
    return ExitCode::SUCCESS;
  } else {
    error!("External program exited with {:?}", outcome.exit);
    return ExitCode::FAILURE;
  }
}
