//! This module implements commands for local coordinate systems. Frame 1
//! is the reference frame and cannot be edited, so every command here
//! wants a frame index of 2 or greater.

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::LengthUnit;
use crate::validate;

/// Appends the command to create a new local coordinate system.
pub fn create_new_coordinate_system(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a new coordinate system")
      .line("CREATE_NEW_COORDINATE_SYSTEM")
  );
  return Ok(());
}

/// Appends the command to edit a local coordinate system: its name, origin
/// and the three axis vectors, each component on its own parameter line.
pub fn edit_coordinate_system(
  script: &mut Script,
  frame: u32,
  name: &str,
  origin: (f64, f64, f64),
  vector_x: (f64, f64, f64),
  vector_y: (f64, f64, f64),
  vector_z: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::index_at_least("frame", frame as i64, 2)?;
  script.append_block(
    Block::new("Edit a local coordinate system")
      .line("EDIT_COORDINATE_SYSTEM")
      .kv("FRAME", frame)
      .kv("NAME", name)
      .kv("ORIGIN_X", origin.0)
      .kv("ORIGIN_Y", origin.1)
      .kv("ORIGIN_Z", origin.2)
      .kv("VECTOR_X_X", vector_x.0)
      .kv("VECTOR_X_Y", vector_x.1)
      .kv("VECTOR_X_Z", vector_x.2)
      .kv("VECTOR_Y_X", vector_y.0)
      .kv("VECTOR_Y_Y", vector_y.1)
      .kv("VECTOR_Y_Z", vector_y.2)
      .kv("VECTOR_Z_X", vector_z.0)
      .kv("VECTOR_Z_Y", vector_z.1)
      .kv("VECTOR_Z_Z", vector_z.2)
  );
  return Ok(());
}

/// Appends the command to rename an existing local coordinate system.
pub fn set_coordinate_system_name(
  script: &mut Script,
  frame: u32,
  name: &str
) -> Result<(), MacroError> {
  validate::index_at_least("frame", frame as i64, 2)?;
  script.append_block(
    Block::new("Set the name of an existing local coordinate system")
      .line(format_args!("SET_COORDINATE_SYSTEM_NAME {} {}", frame, name))
  );
  return Ok(());
}

/// Appends the command to move the origin of an existing local coordinate
/// system, positioned relative to the reference frame.
pub fn set_coordinate_system_origin(
  script: &mut Script,
  frame: u32,
  x: f64,
  y: f64,
  z: f64,
  units: LengthUnit
) -> Result<(), MacroError> {
  validate::index_at_least("frame", frame as i64, 2)?;
  script.append_block(
    Block::new("Set the origin of an existing local coordinate system")
      .line(format_args!(
        "SET_COORDINATE_SYSTEM_ORIGIN {} {} {} {} {}",
        frame, x, y, z, units
      ))
  );
  return Ok(());
}
