//! This module implements commands for the freestream and fluid
//! properties.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::NamedAxis;
use crate::validate;

/// The freestream velocity definitions the grammar accepts. The custom
/// and rotational variants carry the extra parameters their command line
/// wants, so an invalid mix cannot be written down.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Freestream {
  /// A constant freestream velocity.
  Constant,
  /// A custom velocity profile read from a file.
  Custom {
    /// Path to the custom velocity profile file.
    profile_path: PathBuf
  },
  /// A rotational freestream about an axis of a coordinate system.
  Rotation {
    /// Index of the coordinate system defining the rotation.
    frame: u32,
    /// Axis of that coordinate system to rotate about.
    axis: NamedAxis,
    /// Rotational velocity in rad/sec.
    angular_velocity: f64
  }
}

/// Appends the command to set the freestream velocity type.
pub fn set_freestream(
  script: &mut Script,
  freestream: &Freestream
) -> Result<(), MacroError> {
  let block = match freestream {
    Freestream::Constant => {
      Block::new("Set a constant free-stream velocity")
        .line("SET_FREESTREAM CONSTANT")
    },
    Freestream::Custom { profile_path } => {
      Block::new("Set a custom free-stream velocity")
        .line("SET_FREESTREAM CUSTOM")
        .line(profile_path.display())
    },
    Freestream::Rotation { frame, axis, angular_velocity } => {
      validate::nonzero_index("frame", *frame as i64)?;
      Block::new("Set a rotational free-stream velocity")
        .line(format_args!(
          "SET_FREESTREAM ROTATION {} {} {}",
          frame, axis, angular_velocity
        ))
    }
  };
  script.append_block(block);
  return Ok(());
}

/// Appends the command to set the fluid properties directly.
pub fn fluid_properties(
  script: &mut Script,
  density: f64,
  pressure: f64,
  sonic_velocity: f64,
  temperature: f64,
  viscosity: f64
) -> Result<(), MacroError> {
  validate::positive("density", density)?;
  validate::positive("sonic_velocity", sonic_velocity)?;
  validate::positive("temperature", temperature)?;
  validate::non_negative("viscosity", viscosity)?;
  script.append_block(
    Block::new("Set the fluid properties")
      .line("FLUID_PROPERTIES")
      .kv("DENSITY", density)
      .kv("PRESSURE", pressure)
      .kv("SONIC_VELOCITY", sonic_velocity)
      .kv("TEMPERATURE", temperature)
      .kv("VISCOSITY", viscosity)
  );
  return Ok(());
}

/// Appends the command to set air properties from a standard-atmosphere
/// altitude, in feet.
pub fn air_altitude(
  script: &mut Script,
  altitude: f64
) -> Result<(), MacroError> {
  validate::non_negative("altitude", altitude)?;
  script.append_block(
    Block::new("Set the fluid (air) properties based on altitude")
      .kv("AIR_ALTITUDE", altitude)
  );
  return Ok(());
}
