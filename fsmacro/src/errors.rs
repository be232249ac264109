//! Contains the error type shared by command builders, the script buffer,
//! and the runner.

use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;

/// The errors that can come up while building a macro script or handing it
/// to the external program.
#[derive(Debug)]
pub enum MacroError {
  /// A parameter was outside its allowed set or range. The message names
  /// the offending parameter and what it should have been.
  InvalidArgument(String),
  /// A referenced input file does not exist at call time.
  MissingFile(PathBuf),
  /// No executable path was given and the environment variable is unset.
  MissingExecutable,
  /// The external program could not be spawned.
  Spawn(subprocess::PopenError),
  /// Some other I/O failure (permissions, missing directories, etc).
  Io(std::io::Error)
}

impl Display for MacroError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return match self {
      MacroError::InvalidArgument(msg) => write!(f, "{}", msg),
      MacroError::MissingFile(p) => write!(
        f,
        "missing file at {}",
        p.display()
      ),
      MacroError::MissingExecutable => write!(
        f,
        "no executable path given and {} is unset",
        crate::runner::EXE_ENV_VAR
      ),
      MacroError::Spawn(e) => write!(f, "could not spawn executable: {}", e),
      MacroError::Io(e) => write!(f, "i/o error: {}", e)
    };
  }
}

impl Error for MacroError {}

impl From<std::io::Error> for MacroError {
  fn from(e: std::io::Error) -> Self {
    return Self::Io(e);
  }
}

impl From<subprocess::PopenError> for MacroError {
  fn from(e: subprocess::PopenError) -> Self {
    return Self::Spawn(e);
  }
}
