//! This module implements simulation-file handling and the global
//! simulation settings: opening and saving files, creating a fresh
//! simulation, and the handful of knobs that live outside any tab.

use std::path::Path;

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::LengthUnit;
use crate::validate;

/// Appends the command to open an existing simulation file.
pub fn open_simulation(
  script: &mut Script,
  fsm_filepath: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Open an existing simulation file")
      .line("OPEN")
      .line(fsm_filepath.display())
  );
  return Ok(());
}

/// Appends the marker that stops the script at this location. Everything
/// after it in the file is ignored by the external tool.
pub fn stop_script(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Stop a script at this location in the script file")
      .line("STOP")
  );
  return Ok(());
}

/// Appends the command to save the simulation to a file.
pub fn save_as_simulation(
  script: &mut Script,
  fsm_filepath: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Save an existing simulation file")
      .line("SAVEAS")
      .line(fsm_filepath.display())
  );
  return Ok(());
}

/// Appends the command to create a new simulation.
pub fn create_new_simulation(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a new simulation").line("NEW_SIMULATION")
  );
  return Ok(());
}

/// Appends the command to set the number of significant digits used in
/// exported values.
pub fn set_significant_digits(
  script: &mut Script,
  digits: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("digits", digits as i64)?;
  script.append_block(
    Block::new("Set significant digits")
      .kv("SET_SIGNIFICANT_DIGITS", digits)
  );
  return Ok(());
}

/// Appends the command to set the vertex merge tolerance.
pub fn set_vertex_merge_tolerance(
  script: &mut Script,
  tolerance: f64
) -> Result<(), MacroError> {
  validate::positive("tolerance", tolerance)?;
  script.append_block(
    Block::new("Set vertex merge tolerance")
      .kv("SET_VERTEX_MERGE_TOLERANCE", tolerance)
  );
  return Ok(());
}

/// Appends the command to set the simulation length scale units.
pub fn set_simulation_length_units(
  script: &mut Script,
  units: LengthUnit
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set simulation length scale units")
      .kv("SET_SIMULATION_LENGTH_UNITS", units)
  );
  return Ok(());
}

/// Appends the command to set the trailing edge sweep angle, in degrees
/// within [0, 90].
pub fn set_trailing_edge_sweep_angle(
  script: &mut Script,
  angle: f64
) -> Result<(), MacroError> {
  validate::in_range("angle", angle, 0.0, 90.0)?;
  script.append_block(
    Block::new("Set trailing edge sweep angle")
      .kv("SET_TRAILING_EDGE_SWEEP_ANGLE", angle)
  );
  return Ok(());
}

/// Appends the command to set the trailing edge bluntness angle, in
/// degrees within [45, 179].
pub fn set_trailing_edge_bluntness_angle(
  script: &mut Script,
  angle: f64
) -> Result<(), MacroError> {
  validate::in_range("angle", angle, 45.0, 179.0)?;
  script.append_block(
    Block::new("Set trailing edge bluntness angle")
      .kv("SET_TRAILING_EDGE_BLUNTNESS_ANGLE", angle)
  );
  return Ok(());
}

/// Appends the command to set the base region bending angle, in degrees
/// within [0, 90].
pub fn set_base_region_bending_angle(
  script: &mut Script,
  angle: f64
) -> Result<(), MacroError> {
  validate::in_range("angle", angle, 0.0, 90.0)?;
  script.append_block(
    Block::new("Set base region bending angle")
      .kv("SET_BASE_REGION_BENDING_ANGLE", angle)
  );
  return Ok(());
}
