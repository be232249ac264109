//! This module implements off-body and surface streamline commands.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{Axis, Switch};
use crate::validate;

/// Appends the command to create one off-body streamline seeded at a
/// point. `upstream` traces it against the flow instead of with it.
pub fn new_off_body_streamline(
  script: &mut Script,
  position: (f64, f64, f64),
  upstream: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a off-body streamline")
      .line("NEW_OFF_BODY_STREAMLINE")
      .kv("POSITION_X", position.0)
      .kv("POSITION_Y", position.1)
      .kv("POSITION_Z", position.2)
      .kv("UPSTREAM", upstream)
  );
  return Ok(());
}

/// Appends the command to create a distribution of off-body streamlines
/// seeded along a segment. `subdivisions` is one more than the number of
/// streamlines.
pub fn new_streamline_distribution(
  script: &mut Script,
  position_1: (f64, f64, f64),
  position_2: (f64, f64, f64),
  subdivisions: u32
) -> Result<(), MacroError> {
  validate::index_at_least("subdivisions", subdivisions as i64, 2)?;
  script.append_block(
    Block::new("Create a new off-body streamline distribution")
      .line("NEW_STREAMLINE_DISTRIBUTION")
      .kv("POSITION_1_X", position_1.0)
      .kv("POSITION_1_Y", position_1.1)
      .kv("POSITION_1_Z", position_1.2)
      .kv("POSITION_2_X", position_2.0)
      .kv("POSITION_2_Y", position_2.1)
      .kv("POSITION_2_Z", position_2.2)
      .kv("SUBDIVISIONS", subdivisions)
  );
  return Ok(());
}

/// Appends the command to create a new off-body streamtube: a ring of
/// streamline seeds around a frame axis.
pub fn new_off_body_streamtube(
  script: &mut Script,
  radius: f64,
  frame: u32,
  axis: Axis,
  radial_subdivisions: u32,
  azimuth_subdivisions: u32
) -> Result<(), MacroError> {
  validate::positive("radius", radius)?;
  validate::nonzero_index("frame", frame as i64)?;
  validate::nonzero_index("radial_subdivisions", radial_subdivisions as i64)?;
  validate::nonzero_index(
    "azimuth_subdivisions",
    azimuth_subdivisions as i64
  )?;
  script.append_block(
    Block::new("Create a new off-body streamtube")
      .line("NEW_OFF_BODY_STREAMTUBE")
      .kv("RADIUS", radius)
      .kv("FRAME", frame)
      .kv("AXIS", axis)
      .kv("RADIAL_SUBDIVISIONS", radial_subdivisions)
      .kv("AZIMUTH_SUBDIVISIONS", azimuth_subdivisions)
  );
  return Ok(());
}

/// Length setting for new off-body streamlines: a fixed length or no
/// restriction at all.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum StreamlineLength {
  /// Restrict streamlines to a fixed length.
  Fixed(f64),
  /// Let streamlines run unrestricted.
  Unrestricted
}

/// Appends the command to set the length of new off-body streamlines.
pub fn set_off_body_streamline_length(
  script: &mut Script,
  length: StreamlineLength
) -> Result<(), MacroError> {
  if let StreamlineLength::Fixed(l) = length {
    validate::positive("length", l)?;
  }
  let mut block = Block::new(
    "Set the length of the new off-body streamlines"
  ).line("SET_OFF_BODY_STREAMLINE_LENGTH");
  block = match length {
    StreamlineLength::Fixed(l) => block.kv("SET_LENGTH", l),
    StreamlineLength::Unrestricted => block.line("SET_UNRESTRICTED_LENGTH")
  };
  script.append_block(block);
  return Ok(());
}

/// Appends the command to point all off-body streamlines upstream.
pub fn set_all_off_body_streamlines_upstream(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set all off-body streamlines upstream")
      .line("SET_ALL_OFF_BODY_STREAMLINES_UPSTREAM")
  );
  return Ok(());
}

/// Appends the command to point all off-body streamlines downstream.
pub fn set_all_off_body_streamlines_downstream(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set all off-body streamlines downstream")
      .line("SET_ALL_OFF_BODY_STREAMLINES_DOWNSTREAM")
  );
  return Ok(());
}

/// Appends the command to generate all off-body streamlines.
pub fn generate_all_off_body_streamlines(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Generate all off-body streamlines")
      .line("GENERATE_ALL_OFF_BODY_STREAMLINES")
  );
  return Ok(());
}

/// Appends the command to delete all off-body streamlines.
pub fn delete_all_off_body_streamlines(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all off-body streamlines")
      .line("DELETE_ALL_OFF_BODY_STREAMLINES")
  );
  return Ok(());
}

/// Appends the command to export all off-body streamlines to a file.
pub fn export_all_off_body_streamlines(
  script: &mut Script,
  filename: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export all off-body streamlines")
      .line("EXPORT_ALL_OFF_BODY_STREAMLINES")
      .line(filename.display())
  );
  return Ok(());
}

/// Appends the command to generate all surface streamlines.
pub fn generate_all_surface_streamlines(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Generate all surface streamlines")
      .line("GENERATE_ALL_SURFACE_STREAMLINES")
  );
  return Ok(());
}

/// Appends the command to delete all surface streamlines.
pub fn delete_all_surface_streamlines(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all surface streamlines")
      .line("DELETE_ALL_SURFACE_STREAMLINES")
  );
  return Ok(());
}

/// Appends the command to export all on-body (surface) streamlines to a
/// file.
pub fn export_all_surface_streamlines(
  script: &mut Script,
  output_filepath: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export all on-body (surface) streamlines")
      .line("EXPORT_ALL_SURFACE_STREAMLINES")
      .line(output_filepath.display())
  );
  return Ok(());
}
