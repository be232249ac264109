//! This module implements base region commands.

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::validate;

/// Appends the command to mark a boundary surface as a base region with
/// the given base pressure coefficient.
pub fn create_new_base_region(
  script: &mut Script,
  surface: u32,
  base_pressure_coefficient: f64
) -> Result<(), MacroError> {
  validate::nonzero_index("surface", surface as i64)?;
  script.append_block(
    Block::new("Create a new base region")
      .line("CREATE_NEW_BASE_REGION")
      .kv("SURFACE", surface)
      .kv("BASE_PRESSURE_COEFFICIENT", base_pressure_coefficient)
  );
  return Ok(());
}

/// Appends the command to auto-detect base regions on the geometry.
pub fn auto_detect_base_regions(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Auto-detect base regions on the geometry")
      .line("AUTO_DETECT_BASE_REGIONS")
  );
  return Ok(());
}

/// Appends the command to detect base regions on one mesh boundary.
pub fn detect_base_regions_by_surface(
  script: &mut Script,
  boundary_index: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("boundary_index", boundary_index as i64)?;
  script.append_block(
    Block::new("Detect base regions by surface index")
      .line(format_args!(
        "DETECT_BASE_REGIONS_BY_SURFACE {}", boundary_index
      ))
  );
  return Ok(());
}

/// Appends the command to mark trailing edges on a base region boundary.
/// Pass -1 to mark them on all base region boundaries.
pub fn set_base_region_trailing_edges(
  script: &mut Script,
  base_region_boundary: i32
) -> Result<(), MacroError> {
  validate::index_or_all("base_region_boundary", base_region_boundary as i64)?;
  script.append_block(
    Block::new("Set base region trailing edges")
      .line(format_args!(
        "SET_BASE_REGION_TRAILING_EDGES {}", base_region_boundary
      ))
  );
  return Ok(());
}

/// Appends the command to delete an existing base region.
pub fn delete_base_region(
  script: &mut Script,
  base_region_boundary: u32
) -> Result<(), MacroError> {
  validate::nonzero_index(
    "base_region_boundary",
    base_region_boundary as i64
  )?;
  script.append_block(
    Block::new("Delete an existing base region")
      .line(format_args!("DELETE_BASE_REGION {}", base_region_boundary))
  );
  return Ok(());
}
