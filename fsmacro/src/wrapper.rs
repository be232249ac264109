//! This module implements the geometry wrapping family: input surfaces,
//! sizing controls, and the wrap/transfer pair that finishes the job.

use serde::{Deserialize, Serialize};

use crate::block::{join_csv, join_spaced, Block};
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, Switch};
use crate::validate;

/// Appends the command to set the wrapping input surfaces: a count on
/// the command line, then the comma-joined surface indices.
pub fn wrapper_set_input(
  script: &mut Script,
  surface_indices: &[u32]
) -> Result<(), MacroError> {
  validate::not_empty("surface_indices", surface_indices.len())?;
  for s in surface_indices.iter() {
    validate::nonzero_index("surface_indices", *s as i64)?;
  }
  script.append_block(
    Block::new("Set wrapping input surfaces")
      .kv("WRAPPER_SET_INPUT", surface_indices.len())
      .line(join_csv(surface_indices))
  );
  return Ok(());
}

/// Appends the command to set the global wrapping target size: the
/// triangle edge length used where no local control applies.
pub fn wrapper_set_global_size(
  script: &mut Script,
  target_size: f64
) -> Result<(), MacroError> {
  validate::positive("target_size", target_size)?;
  script.append_block(
    Block::new("Set wrapping global target size")
      .kv("WRAPPER_SET_GLOBAL_SIZE", target_size)
  );
  return Ok(());
}

/// Appends the command to toggle wrapping vertex projection.
pub fn wrapper_set_vertex_projection(
  script: &mut Script,
  state: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Enable/disable wrapping vertex projection")
      .kv("WRAPPER_SET_VERTEX_PROJECTION", state)
  );
  return Ok(());
}

/// Appends the command to set the wrapping anisotropy per direction.
pub fn wrapper_set_anisotropy(
  script: &mut Script,
  x: f64,
  y: f64,
  z: f64
) -> Result<(), MacroError> {
  validate::positive("x", x)?;
  validate::positive("y", y)?;
  validate::positive("z", z)?;
  script.append_block(
    Block::new("Set wrapping anisotropy")
      .line(format_args!("WRAPPER_SET_ANISOTROPY {} {} {}", x, y, z))
  );
  return Ok(());
}

/// Appends the command to create a new wrapping local control.
pub fn wrapper_create_local_control(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create new wrapping local control")
      .line("WRAPPER_CREATE_LOCAL_CONTROL")
  );
  return Ok(());
}

/// Appends the command to edit a wrapping local control: the surfaces it
/// applies to and its target size.
pub fn wrapper_edit_local_control(
  script: &mut Script,
  control_id: u32,
  surfaces: &[u32],
  target_size: f64
) -> Result<(), MacroError> {
  validate::nonzero_index("control_id", control_id as i64)?;
  validate::not_empty("surfaces", surfaces.len())?;
  for s in surfaces.iter() {
    validate::nonzero_index("surfaces", *s as i64)?;
  }
  validate::positive("target_size", target_size)?;
  script.append_block(
    Block::new("Edit wrapping local control")
      .kv("WRAPPER_EDIT_LOCAL_CONTROL", control_id)
      .kv("SURFACES", surfaces.len())
      .line(join_csv(surfaces))
      .kv("TARGET_SIZE", target_size)
  );
  return Ok(());
}

/// Appends the command to delete all wrapper surface controls.
pub fn wrapper_delete_all_local_controls(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all wrapper surface controls")
      .line("WRAPPER_DELETE_ALL_LOCAL_CONTROLS")
  );
  return Ok(());
}

/// Appends the command to create a new wrapping volume control: a box
/// between two corner vertices in a frame, with its own target size.
pub fn wrapper_new_volume_control(
  script: &mut Script,
  frame: u32,
  vertex_1: (f64, f64, f64),
  vertex_2: (f64, f64, f64),
  target_size: f64,
  name: &str
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::positive("target_size", target_size)?;
  script.append_block(
    Block::new("Create new wrapping volume control")
      .line("WRAPPER_NEW_VOLUME_CONTROL")
      .kv("FRAME", frame)
      .kv("VERTEX_1", join_spaced([vertex_1.0, vertex_1.1, vertex_1.2]))
      .kv("VERTEX_2", join_spaced([vertex_2.0, vertex_2.1, vertex_2.2]))
      .kv("TARGET_SIZE", target_size)
      .kv("NAME", name)
  );
  return Ok(());
}

/// Appends the command to delete all wrapper volume controls.
pub fn wrapper_delete_all_volume_controls(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all wrapper volume controls")
      .line("WRAPPER_DELETE_ALL_VOLUME_CONTROLS")
  );
  return Ok(());
}

/// Appends the command to execute the geometry wrapping operation.
pub fn wrapper_execute(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Execute the geometry wrapping operation")
      .line("WRAPPER_EXECUTE")
  );
  return Ok(());
}

token_enum!(
  /// What happens to the original source geometry after a wrap.
  SourceTreatment,
  { "Replace the sources with the wrap.", Replace, "REPLACE" },
  { "Keep the sources alongside the wrap.", Retain, "RETAIN" },
);

/// Appends the command to transfer the wrapped geometry output.
pub fn wrapper_transfer(
  script: &mut Script,
  source_treatment: SourceTreatment
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Transfer the wrapped geometry output")
      .kv("WRAPPER_TRANSFER", source_treatment)
  );
  return Ok(());
}
