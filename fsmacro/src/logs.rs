//! This module implements commands for the external program's log window.

use std::path::Path;

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;

/// Appends the bare command to clear the log window. The grammar takes
/// this one without a banner.
pub fn clear_log(script: &mut Script) -> Result<(), MacroError> {
  script.append_line("CLEAR_LOG");
  return Ok(());
}

/// Appends the command to export the log window messages to a file.
pub fn export_log(
  script: &mut Script,
  log_filepath: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export log window messages to file")
      .line("EXPORT_LOG")
      .line(log_filepath.display())
  );
  return Ok(());
}
