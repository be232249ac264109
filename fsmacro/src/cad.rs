//! This module implements the CAD scene commands: model creation, the
//! CAD>Create drawing-curve pane, and CAD-to-mesh transfer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, LengthUnit, NamedAxis, SectionPlane};
use crate::validate;

/// Appends the command to create a new CAD model node.
pub fn cad_create_new_model(
  script: &mut Script,
  model_name: &str
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a new CAD-->Model")
      .line(format_args!("CAD_CREATE_NEW_MODEL {}", model_name))
  );
  return Ok(());
}

/// Appends the command to initialize the CAD>Create pane against a
/// model.
pub fn cad_create_initialize(
  script: &mut Script,
  model_index: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("model_index", model_index as i64)?;
  script.append_block(
    Block::new("Initialize the CAD-->Create pane window")
      .line(format_args!("CAD_CREATE_INITIALIZE {}", model_index))
  );
  return Ok(());
}

token_enum!(
  /// Whether an imported drawing curve is planar or fully 3D.
  CurveDimension,
  { "A planar curve.", TwoD, "2D" },
  { "A three-dimensional curve.", ThreeD, "3D" },
);

/// Appends the command to import a drawing curve from a plain-text file.
/// The file must exist at call time.
pub fn cad_create_import_curve_txt(
  script: &mut Script,
  txt_filepath: &Path,
  units: LengthUnit,
  dimension: CurveDimension,
  frame: u32,
  plane: SectionPlane
) -> Result<(), MacroError> {
  validate::existing_file(txt_filepath)?;
  validate::nonzero_index("frame", frame as i64)?;
  script.append_block(
    Block::new("Import a CAD-->Create drawing curve from txt file")
      .line(format_args!(
        "CAD_CREATE_IMPORT_CURVE_TXT {} {} {} {}",
        units, dimension, frame, plane
      ))
      .line(txt_filepath.display())
  );
  return Ok(());
}

/// Appends the command to import a drawing curve from a CCS (CSV) file.
/// The file must exist at call time.
pub fn cad_create_import_ccs(
  script: &mut Script,
  ccs_filepath: &Path
) -> Result<(), MacroError> {
  validate::existing_file(ccs_filepath)?;
  script.append_block(
    Block::new("Import a CAD-->Create drawing curve from CSV file")
      .line("CAD_CREATE_IMPORT_CURVE_CCS")
      .line(ccs_filepath.display())
  );
  return Ok(());
}

token_enum!(
  /// Symmetry plane options for automatic cross-sections. `NONE` makes
  /// full sections instead of half sections.
  CrossSectionSymmetry,
  { "Full sections.", None, "NONE" },
  { "Half sections against the YZ plane.", Yz, "YZ" },
  { "Half sections against the XZ plane.", Xz, "XZ" },
  { "Half sections against the XY plane.", Xy, "XY" },
);

/// Appends the command to create a series of automatic cross-sections
/// from a mesh body, swept along a frame axis.
pub fn cad_create_auto_cross_sections(
  script: &mut Script,
  frame: u32,
  axis: NamedAxis,
  sections: u32,
  body_index: u32,
  growth_scheme: u32,
  growth_rate: f64,
  symmetry: CrossSectionSymmetry
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::nonzero_index("sections", sections as i64)?;
  validate::nonzero_index("body_index", body_index as i64)?;
  validate::positive("growth_rate", growth_rate)?;
  script.append_block(
    Block::new("Create a series of automatic cross-sections from mesh body")
      .line(format_args!(
        "CAD_CREATE_AUTO_CROSS_SECTIONS {} {} {} {} {} {} {}",
        frame, axis, sections, body_index, growth_scheme, growth_rate,
        symmetry
      ))
  );
  return Ok(());
}

/// Appends the command to create one cross-section from a mesh body by
/// slicing with a plane. The quadrant code (1 through 4) picks which
/// half-plane pair the section keeps.
pub fn cad_create_cross_section(
  script: &mut Script,
  frame: u32,
  plane: SectionPlane,
  offset: f64,
  body_index: u32,
  quadrant: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::nonzero_index("body_index", body_index as i64)?;
  validate::nonzero_index("quadrant", quadrant as i64)?;
  validate::at_most("quadrant", quadrant, 4)?;
  script.append_block(
    Block::new("Create a cross-sections from an existing mesh body")
      .line(format_args!(
        "CAD_CREATE_CROSS_SECTION {} {} {} {} {}",
        frame, plane, offset, body_index, quadrant
      ))
  );
  return Ok(());
}

/// Appends the command to create a singular 3D point curve.
pub fn cad_create_point_curve(
  script: &mut Script,
  x: f64,
  y: f64,
  z: f64
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a singular point curve (3D)")
      .line(format_args!("CAD_CREATE_CURVE_POINT {} {} {}", x, y, z))
  );
  return Ok(());
}

/// Appends the command to create a circular arc curve from an origin and
/// two vertices.
pub fn cad_create_curve_arc(
  script: &mut Script,
  origin: (f64, f64, f64),
  vertex_1: (f64, f64, f64),
  vertex_2: (f64, f64, f64)
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a circular arc curve (3D)")
      .line(format_args!(
        "CAD_CREATE_CURVE_ARC {} {} {} {} {} {} {} {} {}",
        origin.0, origin.1, origin.2,
        vertex_1.0, vertex_1.1, vertex_1.2,
        vertex_2.0, vertex_2.1, vertex_2.2
      ))
  );
  return Ok(());
}

/// Appends the command to select a drawing curve by index. Pass -1 to
/// select all curves.
pub fn cad_create_curve_select(
  script: &mut Script,
  curve_index: i32
) -> Result<(), MacroError> {
  validate::index_or_all("curve_index", curve_index as i64)?;
  script.append_block(
    Block::new("Select one of the CAD-->Create drawing curves")
      .line(format_args!("CAD_CREATE_CURVE_SELECT {}", curve_index))
  );
  return Ok(());
}

/// Appends the command to unselect a drawing curve by index. Pass -1 to
/// unselect all curves.
pub fn cad_create_curve_unselect(
  script: &mut Script,
  curve_index: i32
) -> Result<(), MacroError> {
  validate::index_or_all("curve_index", curve_index as i64)?;
  script.append_block(
    Block::new("Unselect specific CAD-->Create drawing curves by index")
      .line(format_args!("CAD_CREATE_CURVE_UNSELECT {}", curve_index))
  );
  return Ok(());
}

/// Appends the command to reverse a drawing curve by index. Pass -1 to
/// reverse all curves.
pub fn cad_create_curve_reverse(
  script: &mut Script,
  curve_index: i32
) -> Result<(), MacroError> {
  validate::index_or_all("curve_index", curve_index as i64)?;
  let title = if curve_index == -1 {
    "Reverse ALL of the CAD-->Create drawing curves"
  } else {
    "Reverse specific CAD-->Create drawing curves by index"
  };
  script.append_block(
    Block::new(title)
      .line(format_args!("CAD_CREATE_CURVE_REVERSE {}", curve_index))
  );
  return Ok(());
}

/// Appends the command to delete all drawing curves.
pub fn cad_create_curve_delete_all(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete ALL of the CAD-->Create drawing curves")
      .line("CAD_CREATE_CURVE_DELETE_ALL")
  );
  return Ok(());
}

/// Appends the command to delete only the selected drawing curves.
pub fn cad_create_curve_delete_selected(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete only selected CAD-->Create drawing curves")
      .line("CAD_CREATE_CURVE_DELETE_SELECTED")
  );
  return Ok(());
}

/// Appends the command to delete only the unselected drawing curves.
pub fn cad_create_curve_delete_unselected(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete only unselected CAD-->Create drawing curves")
      .line("CAD_CREATE_CURVE_DELETE_UNSELECTED")
  );
  return Ok(());
}

/// Appends the command to export the selected drawing curves to a CSV
/// file.
pub fn cad_create_curve_export_ccs(
  script: &mut Script,
  file_path: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export selected CAD-->Create drawing curves to CSV file")
      .line("CAD_CREATE_CURVE_EXPORT_CCS")
      .line(file_path.display())
  );
  return Ok(());
}

/// Appends the command to import a CAD geometry file into the
/// simulation.
pub fn import_cad(
  script: &mut Script,
  cad_filepath: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Import a geometry into the simulation")
      .line("IMPORT_CAD")
      .line(cad_filepath.display())
  );
  return Ok(());
}

/// Appends the command to transfer a CAD model's mesh to the simulation
/// mesh node.
pub fn convert_cad_to_mesh(
  script: &mut Script,
  model_index: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("model_index", model_index as i64)?;
  script.append_block(
    Block::new("Transfer CAD model mesh to the Mesh node of the simulation")
      .line(format_args!("CONVERT_CAD_TO_MESH {}", model_index))
  );
  return Ok(());
}
