//! This module implements the runner: handing a generated script file to
//! the external program and capturing what it says back.

use std::env;
use std::path::{Path, PathBuf};

use log::*;
use subprocess::{Exec, ExitStatus, Redirection};

use crate::errors::MacroError;
use crate::validate;

/// Environment variable consulted for the executable path when no
/// explicit path is given to the runner.
pub const EXE_ENV_VAR: &str = "FLIGHTSTREAM_EXE";

/// What came back from one run of the external program.
#[derive(Clone, Debug)]
pub struct RunOutcome {
  /// Exit status of the process.
  pub exit: ExitStatus,
  /// Captured standard output.
  pub stdout: String,
  /// Captured standard error.
  pub stderr: String
}

impl RunOutcome {
  /// True if the process reported success.
  pub fn success(&self) -> bool {
    return self.exit.success();
  }
}

/// Resolves the executable path: explicit argument first, environment
/// variable second, error if neither is available.
pub fn resolve_executable(
  explicit: Option<&Path>
) -> Result<PathBuf, MacroError> {
  if let Some(p) = explicit {
    return Ok(p.to_path_buf());
  }
  if let Some(p) = env::var_os(EXE_ENV_VAR) {
    return Ok(PathBuf::from(p));
  }
  return Err(MacroError::MissingExecutable);
}

/// Runs the external program against a script file and blocks until it
/// exits. `hidden` asks the program not to bring up its window. There is
/// no timeout: the call returns when the process does.
pub fn run_script(
  executable: Option<&Path>,
  script_path: &Path,
  hidden: bool
) -> Result<RunOutcome, MacroError> {
  let exe = resolve_executable(executable)?;
  validate::existing_file(&exe)?;
  validate::existing_file(script_path)?;
  let mut cmd = Exec::cmd(&exe).arg("-script").arg(script_path);
  if hidden {
    cmd = cmd.arg("-hidden");
  }
  info!("running {} -script {}", exe.display(), script_path.display());
  let captured = cmd
    .stdout(Redirection::Pipe)
    .stderr(Redirection::Pipe)
    .capture()?;
  debug!("external program exited with {:?}", captured.exit_status);
  return Ok(RunOutcome {
    exit: captured.exit_status,
    stdout: captured.stdout_str(),
    stderr: captured.stderr_str()
  });
}
