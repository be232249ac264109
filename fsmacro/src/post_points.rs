//! This module implements probe point and probe line commands.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, LengthUnit};
use crate::validate;

token_enum!(
  /// Where a probe point samples the flow.
  ProbeType,
  { "A point in the flow volume.", Volume, "VOLUME" },
  { "A point on a surface.", Surface, "SURFACE" },
);

/// Appends the command to create a new probe point.
pub fn new_probe_point(
  script: &mut Script,
  probe_type: ProbeType,
  x: f64,
  y: f64,
  z: f64
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a new probe point")
      .line(format_args!("NEW_PROBE_POINT {} {} {} {}", probe_type, x, y, z))
  );
  return Ok(());
}

/// Appends the command to create a new probe survey line between two
/// points, with `numpts` probe vertices along it.
pub fn new_probe_line(
  script: &mut Script,
  numpts: u32,
  start: (f64, f64, f64),
  end: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::index_at_least("numpts", numpts as i64, 2)?;
  script.append_block(
    Block::new("Create a new probe survey line")
      .line(format_args!(
        "NEW_PROBE_LINE {} {} {} {} {} {} {}",
        numpts, start.0, start.1, start.2, end.0, end.1, end.2
      ))
  );
  return Ok(());
}

/// Appends the command to update the flow properties at all probe
/// points.
pub fn update_probe_points(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Update probe point flow properties")
      .line("UPDATE_PROBE_POINTS")
  );
  return Ok(());
}

/// Appends the command to import probe points from a file, positioned in
/// the given frame and units.
pub fn probe_points_import(
  script: &mut Script,
  filepath: &Path,
  units: LengthUnit,
  frame: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  script.append_block(
    Block::new("Import probe points from file")
      .line("PROBE_POINTS_IMPORT")
      .kv("UNITS", units)
      .kv("FRAME", frame)
      .line(filepath.display())
  );
  return Ok(());
}

/// Appends the command to export the probe points to a file.
pub fn export_probe_points(
  script: &mut Script,
  filepath: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export probe points to file")
      .line("EXPORT_PROBE_POINTS")
      .line(filepath.display())
  );
  return Ok(());
}

/// Appends the command to delete all existing probe points.
pub fn delete_probe_points(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all existing probe points")
      .line("DELETE_PROBE_POINTS")
  );
  return Ok(());
}
