//! This module implements volume section commands.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, SectionPlane, Switch};
use crate::validate;

token_enum!(
  /// Near-wall cell treatment for volume sections.
  PrismsType,
  { "Prismatic near-wall cells.", Prisms, "PRISMS" },
  { "No near-wall cell layer.", None, "NONE" },
);

/// The near-wall prism layer settings shared by the volume section
/// shapes.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrismLayer {
  /// Near-wall cell treatment.
  pub prisms_type: PrismsType,
  /// Thickness of the near-wall layer.
  pub thickness: f64,
  /// Number of cell layers in the near-wall layer.
  pub layers: u32,
  /// Growth rate of the prism cells.
  pub growth_rate: f64
}

impl Default for PrismLayer {
  fn default() -> Self {
    return Self {
      prisms_type: PrismsType::Prisms,
      thickness: 0.3,
      layers: 20,
      growth_rate: 1.2
    };
  }
}

/// Appends the command to create a new rectangular volume section, with
/// diagonal corners in the section plane.
pub fn create_new_rectangle_volume_section(
  script: &mut Script,
  frame: u32,
  plane: SectionPlane,
  offset: f64,
  size: f64,
  corner_1: (f64, f64),
  corner_2: (f64, f64),
  prisms: PrismLayer
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::nonzero_index("layers", prisms.layers as i64)?;
  validate::positive("growth_rate", prisms.growth_rate)?;
  script.append_block(
    Block::new("Create new volume section (rectangle)")
      .line(format_args!(
        "CREATE_NEW_RECTANGLE_VOLUME_SECTION {} {} {} {} {} {} {} {} {} {} {} {}",
        frame, plane, offset, size,
        corner_1.0, corner_1.1, corner_2.0, corner_2.1,
        prisms.prisms_type, prisms.thickness, prisms.layers,
        prisms.growth_rate
      ))
  );
  return Ok(());
}

/// Appends the command to create a new circular volume section, gridded
/// radially and azimuthally between two radii.
pub fn create_new_circle_volume_section(
  script: &mut Script,
  frame: u32,
  plane: SectionPlane,
  offset: f64,
  ipts: u32,
  jpts: u32,
  r1: f64,
  r2: f64,
  prisms: PrismLayer
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::nonzero_index("ipts", ipts as i64)?;
  validate::nonzero_index("jpts", jpts as i64)?;
  validate::non_negative("r1", r1)?;
  validate::positive("r2", r2)?;
  validate::nonzero_index("layers", prisms.layers as i64)?;
  validate::positive("growth_rate", prisms.growth_rate)?;
  script.append_block(
    Block::new("Create new volume section (circle)")
      .line(format_args!(
        "CREATE_NEW_CIRCLE_VOLUME_SECTION {} {} {} {} {} {} {} {} {} {} {}",
        frame, plane, offset, ipts, jpts, r1, r2,
        prisms.prisms_type, prisms.thickness, prisms.layers,
        prisms.growth_rate
      ))
  );
  return Ok(());
}

/// Appends the command to toggle boundary-layer induction on a volume
/// section.
pub fn volume_section_boundary_layer(
  script: &mut Script,
  index: u32,
  setting: Switch
) -> Result<(), MacroError> {
  validate::nonzero_index("index", index as i64)?;
  script.append_block(
    Block::new("Toggle volume section boundary layer induction")
      .line(format_args!("VOLUME_SECTION_BOUNDARY_LAYER {} {}", index, setting))
  );
  return Ok(());
}

/// Appends the command to toggle the wire-frame display of a volume
/// section.
pub fn volume_section_wireframe(
  script: &mut Script,
  index: u32,
  setting: Switch
) -> Result<(), MacroError> {
  validate::nonzero_index("index", index as i64)?;
  script.append_block(
    Block::new("Toggle volume section wire-frame setting")
      .line(format_args!("VOLUME_SECTION_WIREFRAME {} {}", index, setting))
  );
  return Ok(());
}

/// Appends the command to update all volume sections.
pub fn update_all_volume_sections(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Update the volume sections")
      .line("UPDATE_ALL_VOLUME_SECTIONS")
  );
  return Ok(());
}

/// Appends the command to export a volume section as a ParaView (VTK)
/// file.
pub fn export_volume_section_vtk(
  script: &mut Script,
  index: u32,
  filename: &Path
) -> Result<(), MacroError> {
  validate::nonzero_index("index", index as i64)?;
  script.append_block(
    Block::new("Export volume section as ParaView (VTK) file")
      .line(format_args!("EXPORT_VOLUME_SECTION_VTK {}", index))
      .line(filename.display())
  );
  return Ok(());
}

/// Appends the command to export a volume section as a 2D ParaView (VTK)
/// file.
pub fn export_volume_section_2d_vtk(
  script: &mut Script,
  index: u32,
  filename: &Path
) -> Result<(), MacroError> {
  validate::nonzero_index("index", index as i64)?;
  script.append_block(
    Block::new("Export volume section as 2D ParaView (VTK) file")
      .line(format_args!("EXPORT_VOLUME_SECTION_2D_VTK {}", index))
      .line(filename.display())
  );
  return Ok(());
}

/// Appends the command to export a volume section as a Tecplot (DAT)
/// file.
pub fn export_volume_section_tecplot(
  script: &mut Script,
  index: u32,
  filename: &Path
) -> Result<(), MacroError> {
  validate::nonzero_index("index", index as i64)?;
  script.append_block(
    Block::new("Export volume section as Tecplot (DAT) file")
      .line(format_args!("EXPORT_VOLUME_SECTION_TECPLOT {}", index))
      .line(filename.display())
  );
  return Ok(());
}

/// Appends the command to delete one volume section.
pub fn delete_volume_section(
  script: &mut Script,
  index: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("index", index as i64)?;
  script.append_block(
    Block::new("Delete a volume section")
      .line(format_args!("DELETE_VOLUME_SECTION {}", index))
  );
  return Ok(());
}

/// Appends the command to delete all volume sections.
pub fn delete_all_volume_sections(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all volume sections")
      .line("DELETE_ALL_VOLUME_SECTIONS")
  );
  return Ok(());
}
