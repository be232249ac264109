//! This module implements the commands that drive the solver itself:
//! starting it, clearing its solution, and closing the external program.

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;

/// Appends the command to start the solver.
pub fn start_solver(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(Block::new("Run the solver").line("START_SOLVER"));
  return Ok(());
}

/// Appends the command to clear the existing solution.
pub fn solver_clear(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Clear the existing solution").line("SOLVER_CLEAR")
  );
  return Ok(());
}

/// Appends the command to close the external program and exit. Anything
/// after this in the script never runs.
pub fn close_program(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Close FlightStream and exit").line("CLOSE_FLIGHTSTREAM")
  );
  return Ok(());
}
