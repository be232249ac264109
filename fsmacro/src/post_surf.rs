//! This module implements surface section commands and their sectional
//! loads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::{join_spaced, Block};
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, ForceUnit, SectionPlane};
use crate::validate;

token_enum!(
  /// Plotting directions for a surface section.
  PlotDirection,
  { "First in-plane direction.", First, "1" },
  { "Second in-plane direction.", Second, "2" },
);

/// Appends the command to create a new surface section over the given
/// geometry surfaces.
pub fn create_new_surface_section(
  script: &mut Script,
  frame: u32,
  plane: SectionPlane,
  offset: f64,
  plot_direction: PlotDirection,
  surfaces: &[u32]
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::not_empty("surfaces", surfaces.len())?;
  for s in surfaces.iter() {
    validate::nonzero_index("surfaces", *s as i64)?;
  }
  script.append_block(
    Block::new("Create new surface section")
      .line("CREATE_NEW_SURFACE_SECTION")
      .kv("FRAME", frame)
      .kv("PLANE", plane)
      .kv("OFFSET", offset)
      .kv("PLOT_DIRECTION", plot_direction)
      .kv("SURFACES", surfaces.len())
      .line(join_spaced(surfaces))
  );
  return Ok(());
}

/// Appends the command to create a distribution of surface sections over
/// the given geometry surfaces.
pub fn new_surface_section_distribution(
  script: &mut Script,
  frame: u32,
  plane: SectionPlane,
  num_sections: u32,
  plot_direction: PlotDirection,
  surfaces: &[u32]
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::nonzero_index("num_sections", num_sections as i64)?;
  validate::not_empty("surfaces", surfaces.len())?;
  for s in surfaces.iter() {
    validate::nonzero_index("surfaces", *s as i64)?;
  }
  script.append_block(
    Block::new("Create new surface section distribution")
      .line("NEW_SURFACE_SECTION_DISTRIBUTION")
      .kv("FRAME", frame)
      .kv("PLANE", plane)
      .kv("NUM_SECTIONS", num_sections)
      .kv("PLOT_DIRECTION", plot_direction)
      .kv("SURFACES", surfaces.len())
      .line(join_spaced(surfaces))
  );
  return Ok(());
}

/// Appends the command to compute sectional loads on the existing
/// surface sections.
pub fn compute_surface_sectional_loads(
  script: &mut Script,
  units: ForceUnit
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Compute sectional loads on existing surface sections")
      .kv("COMPUTE_SURFACE_SECTIONAL_LOADS", units)
  );
  return Ok(());
}

/// Appends the command to export the sectional loads of the existing
/// surface sections.
pub fn export_surface_sectional_loads(
  script: &mut Script,
  filename: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export sectional loads on existing surface sections")
      .line("EXPORT_SURFACE_SECTIONAL_LOADS")
      .line(filename.display())
  );
  return Ok(());
}

/// Appends the command to update all surface sections.
pub fn update_all_surface_sections(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Update the surface sections")
      .line("UPDATE_ALL_SURFACE_SECTIONS")
  );
  return Ok(());
}

/// Appends the command to export all surface sections to a file.
pub fn export_all_surface_sections(
  script: &mut Script,
  filename: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export all surface sections to file")
      .line("EXPORT_ALL_SURFACE_SECTIONS")
      .line(filename.display())
  );
  return Ok(());
}

/// Appends the command to delete one surface section.
pub fn delete_surface_section(
  script: &mut Script,
  index: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("index", index as i64)?;
  script.append_block(
    Block::new("Delete a surface section")
      .line(format_args!("DELETE_SURFACE_SECTION {}", index))
  );
  return Ok(());
}

/// Appends the command to delete all surface sections.
pub fn delete_all_surface_sections(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all surface sections")
      .line("DELETE_ALL_SURFACE_SECTIONS")
  );
  return Ok(());
}
