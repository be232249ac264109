//! This module implements the acoustic toolbox commands: sources,
//! observers, signal computation, and section exports.

use std::path::Path;

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{SectionPlane, Switch};
use crate::validate;

/// Appends the command to enable or disable acoustic sources during
/// solver initialization.
pub fn acoustic_sources(
  script: &mut Script,
  status: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Enable acoustic sources during solver initialization")
      .kv("ACOUSTIC_SOURCES", status)
  );
  return Ok(());
}

/// Appends the command to create a new acoustic observer at a point.
pub fn create_new_acoustic_observer(
  script: &mut Script,
  name: &str,
  x: f64,
  y: f64,
  z: f64
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create new acoustic observer")
      .line(format_args!(
        "CREATE_NEW_ACOUSTIC_OBSERVER {} {} {} {}", name, x, y, z
      ))
  );
  return Ok(());
}

/// Appends the command to import acoustic observers from a file.
pub fn acoustic_observers_import(
  script: &mut Script,
  file_path: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Import acoustic observers from file")
      .line("ACOUSTIC_OBSERVERS_IMPORT")
      .line(file_path.display())
  );
  return Ok(());
}

/// Appends the command to delete one acoustic observer by its index in
/// the toolbox tree.
pub fn delete_acoustic_observer(
  script: &mut Script,
  observer_index: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("observer_index", observer_index as i64)?;
  script.append_block(
    Block::new("Delete acoustic observer")
      .line("DELETE_ACOUSTIC_OBSERVER")
      .line(observer_index)
  );
  return Ok(());
}

/// Appends the command to delete all acoustic observers.
pub fn delete_all_acoustic_observers(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all acoustic observers")
      .line("DELETE_ALL_ACOUSTIC_OBSERVERS")
  );
  return Ok(());
}

/// Appends the command to set the observer signal time window and step
/// count.
pub fn set_acoustic_observer_time(
  script: &mut Script,
  initial_time: f64,
  final_time: f64,
  time_steps: u32
) -> Result<(), MacroError> {
  validate::non_negative("initial_time", initial_time)?;
  if final_time <= initial_time {
    return Err(MacroError::InvalidArgument(format!(
      "`final_time` should be greater than `initial_time`, got {} <= {}",
      final_time, initial_time
    )));
  }
  validate::nonzero_index("time_steps", time_steps as i64)?;
  script.append_block(
    Block::new("Set acoustic observer time parameters")
      .line(format_args!(
        "SET_ACOUSTIC_OBSERVER_TIME {} {} {}",
        initial_time, final_time, time_steps
      ))
  );
  return Ok(());
}

/// Appends the command to compute acoustic signals at all observers.
pub fn compute_acoustic_signals(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Compute acoustic signals at all observers")
      .line("COMPUTE_ACOUSTIC_SIGNALS")
  );
  return Ok(());
}

/// Appends the command to export the acoustic signals at all observers.
pub fn export_acoustic_signals(
  script: &mut Script,
  filename: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export acoustic signals at all observers to external file")
      .line("EXPORT_ACOUSTIC_SIGNALS")
      .line(filename.display())
  );
  return Ok(());
}

/// Appends the command to create an acoustic section of observers and
/// export its signals, one file per observer, into `storage_path`.
pub fn create_acoustic_section(
  script: &mut Script,
  frame: u32,
  plane: SectionPlane,
  offset: f64,
  radial_observers: u32,
  azimuth_observers: u32,
  inner_radius: f64,
  outer_radius: f64,
  storage_path: &Path
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::nonzero_index("radial_observers", radial_observers as i64)?;
  validate::nonzero_index("azimuth_observers", azimuth_observers as i64)?;
  validate::non_negative("inner_radius", inner_radius)?;
  validate::positive("outer_radius", outer_radius)?;
  if outer_radius <= inner_radius {
    return Err(MacroError::InvalidArgument(format!(
      "`outer_radius` should be greater than `inner_radius`, got {} <= {}",
      outer_radius, inner_radius
    )));
  }
  script.append_block(
    Block::new("Create & export acoustic section signals")
      .line("CREATE_ACOUSTIC_SECTION")
      .kv("FRAME", frame)
      .kv("PLANE", plane)
      .kv("OFFSET", offset)
      .kv("RADIAL_OBSERVERS", radial_observers)
      .kv("AZIMUTH_OBSERVERS", azimuth_observers)
      .kv("INNER_RADIUS", inner_radius)
      .kv("OUTER_RADIUS", outer_radius)
      .kv("STORAGE_PATH", storage_path.display())
  );
  return Ok(());
}
