//! This module implements geometry commands: imports, exports, and the
//! per-surface transforms and selection tools.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::{join_csv, Block};
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, LengthUnit, NamedAxis, Switch};
use crate::validate;

token_enum!(
  /// Geometry file formats accepted by the importer.
  GeometryFileType,
  { "Stereolithography.", Stl, "STL" },
  { "Cart3D triangulation.", Tri, "TRI" },
  { "Plot3D.", P3d, "P3D" },
  { "Comma-separated vertices.", Csv, "CSV" },
  { "Abaqus input.", Inp, "INP" },
  { "Structured quadrilateral mesh.", StructuredQuad, "STRUCTURED_QUAD" },
  {
    "Unstructured quadrilateral mesh.",
    UnstructuredQuad,
    "UNSTRUCTURED_QUAD"
  },
  { "Langley wireframe geometry standard.", Lawgs, "LAWGS" },
  { "Visualization toolkit.", Vtk, "VTK" },
  { "AC3D.", Ac, "AC" },
  { "FAC.", Fac, "FAC" },
  { "Wavefront.", Obj, "OBJ" },
);

/// Appends the command to import a geometry file into the simulation.
/// `clear` deletes the existing geometry boundaries first. The file must
/// exist at call time.
pub fn import_geometry(
  script: &mut Script,
  geometry_filepath: &Path,
  units: LengthUnit,
  file_type: GeometryFileType,
  clear: bool
) -> Result<(), MacroError> {
  validate::existing_file(geometry_filepath)?;
  let mut block = Block::new("Import an geometry into the simulation")
    .line("IMPORT")
    .kv("UNITS", units)
    .kv("FILE_TYPE", file_type)
    .kv("FILE", geometry_filepath.display());
  if clear {
    block = block.line("CLEAR");
  }
  script.append_block(block);
  return Ok(());
}

/// Appends the command to import a component cross-section (CCS)
/// geometry file. The file must exist at call time.
pub fn ccs_import(
  script: &mut Script,
  ccs_filepath: &Path,
  close_component_ends: Switch,
  update_properties: Switch,
  clear_existing: Switch
) -> Result<(), MacroError> {
  validate::existing_file(ccs_filepath)?;
  script.append_block(
    Block::new("Import a Component Cross-Section (CCS) geometry file")
      .line("CCS_IMPORT")
      .kv("CLOSE_COMPONENT_ENDS", close_component_ends)
      .kv("UPDATE_PROPERTIES", update_properties)
      .kv("CLEAR_EXISTING", clear_existing)
      .kv("FILE", ccs_filepath.display())
  );
  return Ok(());
}

token_enum!(
  /// Geometry file formats accepted by the surface mesh exporter.
  ExportFileType,
  { "Stereolithography.", Stl, "STL" },
  { "Cart3D triangulation.", Tri, "TRI" },
  { "Wavefront.", Obj, "OBJ" },
);

/// Appends the command to export a geometry surface to a file. Pass -1
/// as the surface to export all of them.
pub fn export_surface_mesh(
  script: &mut Script,
  file_path: &Path,
  file_type: ExportFileType,
  surface: i32
) -> Result<(), MacroError> {
  validate::index_or_all("surface", surface as i64)?;
  script.append_block(
    Block::new("Export a geometry surface to external file")
      .line(format_args!("EXPORT_SURFACE_MESH {} {}", file_type, surface))
      .line(file_path.display())
  );
  return Ok(());
}

/// Appends the command to rotate surfaces about a frame axis: a count of
/// surfaces, one index per line (-1 for all), and the mesh-handling
/// toggles.
pub fn surface_rotate(
  script: &mut Script,
  frame: u32,
  axis: NamedAxis,
  angle: f64,
  surfaces: &[i32],
  split_vertices: Switch,
  adaptive_mesh: Switch,
  detach_normal_to_axis: Switch
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::not_empty("surfaces", surfaces.len())?;
  for s in surfaces.iter() {
    validate::index_or_all("surfaces", *s as i64)?;
  }
  let mut block = Block::new("Rotate an existing surface")
    .line("SURFACE_ROTATE")
    .kv("FRAME", frame)
    .kv("AXIS", axis)
    .kv("ANGLE", angle)
    .kv("SURFACES", surfaces.len());
  for s in surfaces.iter() {
    block = block.line(s);
  }
  block = block
    .kv("SPLIT_VERTICES", split_vertices)
    .kv("ADAPTIVE_MESH", adaptive_mesh)
    .kv("DETACH_NORMAL_TO_AXIS", detach_normal_to_axis);
  script.append_block(block);
  return Ok(());
}

/// Appends the command to translate a surface by a vector in a frame.
/// Surface 0 selects all surfaces.
pub fn translate_surface_in_frame(
  script: &mut Script,
  frame: u32,
  x: f64,
  y: f64,
  z: f64,
  units: LengthUnit,
  surface: u32,
  split_vertices: Switch
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  script.append_block(
    Block::new("Translate a surface with a vector")
      .line(format_args!(
        "TRANSLATE_SURFACE_IN_FRAME {} {} {} {} {} {} {}",
        frame, x, y, z, units, surface, split_vertices
      ))
  );
  return Ok(());
}

/// Appends the command to translate a surface from one frame to another.
/// Surface 0 selects all surfaces.
pub fn translate_surface_by_frame(
  script: &mut Script,
  frame1: u32,
  frame2: u32,
  surface: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("frame1", frame1 as i64)?;
  validate::nonzero_index("frame2", frame2 as i64)?;
  script.append_block(
    Block::new("Translate a surface from one frame to another")
      .line(format_args!(
        "TRANSLATE_SURFACE_BY_FRAME {} {} {}", frame1, frame2, surface
      ))
  );
  return Ok(());
}

/// Appends the command to scale surfaces in a frame. Surface -1 selects
/// all surfaces.
pub fn surface_scale(
  script: &mut Script,
  frame: u32,
  scale_x: f64,
  scale_y: f64,
  scale_z: f64,
  surface: i32
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::index_or_all("surface", surface as i64)?;
  script.append_block(
    Block::new("Scale existing surface(s)")
      .line(format_args!(
        "SURFACE_SCALE {} {} {} {} {}",
        frame, scale_x, scale_y, scale_z, surface
      ))
  );
  return Ok(());
}

/// Appends the command to invert the normals of a surface. Pass -1 to
/// invert all surfaces.
pub fn surface_invert(
  script: &mut Script,
  index: i32
) -> Result<(), MacroError> {
  validate::index_or_all("index", index as i64)?;
  script.append_block(
    Block::new("Invert the surface normals of a surface")
      .line(format_args!("SURFACE_INVERT {}", index))
  );
  return Ok(());
}

/// Appends the command to rename a geometry surface.
pub fn surface_rename(
  script: &mut Script,
  index: u32,
  name: &str
) -> Result<(), MacroError> {
  validate::nonzero_index("index", index as i64)?;
  script.append_block(
    Block::new("Rename the surface geometry")
      .line(format_args!("SURFACE_RENAME {} {}", index, name))
  );
  return Ok(());
}

/// Appends the command to select a geometry surface by index. Pass -1 to
/// select all surfaces.
pub fn select_geometry_by_id(
  script: &mut Script,
  surface: i32
) -> Result<(), MacroError> {
  validate::index_or_all("surface", surface as i64)?;
  script.append_block(
    Block::new("Select a geometry surface by its index")
      .line(format_args!("SELECT_GEOMETRY_BY_ID {}", surface))
  );
  return Ok(());
}

token_enum!(
  /// Face properties a threshold selection can filter on.
  ThresholdType,
  { "Face area.", Area, "AREA" },
  { "Mesh quality.", Quality, "QUALITY" },
  { "X coordinate.", X, "X" },
  { "Y coordinate.", Y, "Y" },
  { "Z coordinate.", Z, "Z" },
  { "Velocity magnitude.", Velocity, "VELOCITY" },
  { "Velocity X component.", Vx, "VX" },
  { "Velocity Y component.", Vy, "VY" },
  { "Velocity Z component.", Vz, "VZ" },
  { "Pressure coefficient.", Cp, "CP" },
  { "Mach number.", Mach, "MACH" },
  { "Solver mesh quality.", SolverQuality, "SOLVER_QUALITY" },
);

token_enum!(
  /// How the min/max pair bounds a threshold selection.
  ThresholdRange,
  { "Keep faces above the minimum.", AboveMin, "ABOVE_MIN" },
  { "Keep faces below the maximum.", BelowMax, "BELOW_MAX" },
  {
    "Keep faces between the bounds.",
    AboveMinBelowMax,
    "ABOVE_MIN_BELOW_MAX"
  },
);

token_enum!(
  /// Which faces a threshold selection considers.
  ThresholdSubset,
  { "All faces.", AllFaces, "ALL_FACES" },
  { "Only visible faces.", VisibleFaces, "VISIBLE_FACES" },
  { "Only already-selected faces.", SelectedFaces, "SELECTED_FACES" },
);

/// Appends the command to select surface faces by a threshold on a face
/// property.
pub fn surface_select_by_threshold(
  script: &mut Script,
  frame: u32,
  threshold: ThresholdType,
  min_value: f64,
  max_value: f64,
  range: ThresholdRange,
  subset: ThresholdSubset
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  script.append_block(
    Block::new("Select surface faces by threshold")
      .line("SURFACE_SELECT_BY_THRESHOLD")
      .kv("FRAME", frame)
      .kv("THRESHOLD", threshold)
      .kv("MIN_VALUE", min_value)
      .kv("MAX_VALUE", max_value)
      .kv("RANGE", range)
      .kv("SUBSET", subset)
  );
  return Ok(());
}

/// Appends the command to create a new geometry surface from the faces
/// currently selected.
pub fn create_new_surface_from_selection(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create new geometry surface from selected faces")
      .line("CREATE_NEW_SURFACE_FROM_SELECTION")
  );
  return Ok(());
}

token_enum!(
  /// Cutting planes of a frame, in the spelling this command wants.
  CutPlane,
  { "The ZX plane.", Zx, "ZX" },
  { "The YZ plane.", Yz, "YZ" },
  { "The XY plane.", Xy, "XY" },
);

/// Appends the command to cut surfaces with a plane of a frame, offset
/// along the plane normal. Surface -1 cuts all surfaces.
pub fn surface_cut_by_plane(
  script: &mut Script,
  frame: u32,
  plane: CutPlane,
  offset: f64,
  surface: i32
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  validate::index_or_all("surface", surface as i64)?;
  script.append_block(
    Block::new("Cut all surfaces using a cutting plane")
      .line("SURFACE_CUT_BY_PLANE")
      .kv("FRAME", frame)
      .kv("PLANE", plane)
      .kv("OFFSET", offset)
      .kv("SURFACE", surface)
  );
  return Ok(());
}

/// Spells a flag the way the mirror command wants it on its line.
const fn mirror_flag(flag: bool) -> &'static str {
  return if flag { "True" } else { "False" };
}

/// Appends the command to mirror a surface about a plane of a frame.
/// `combine` merges the mirrored geometry with the source; `delete_source`
/// removes the source afterwards.
pub fn surface_mirror(
  script: &mut Script,
  surface: u32,
  coordinate_system: u32,
  mirror_plane: u32,
  combine: bool,
  delete_source: bool
) -> Result<(), MacroError> {
  validate::nonzero_index("surface", surface as i64)?;
  validate::nonzero_index("coordinate_system", coordinate_system as i64)?;
  validate::nonzero_index("mirror_plane", mirror_plane as i64)?;
  validate::at_most("mirror_plane", mirror_plane, 3)?;
  script.append_block(
    Block::new("Mirror an existing surface")
      .line(format_args!(
        "SURFACE_MIRROR {} {} {} {} {}",
        surface,
        coordinate_system,
        mirror_plane,
        mirror_flag(combine),
        mirror_flag(delete_source)
      ))
  );
  return Ok(());
}

/// Appends the command to copy and paste a surface.
pub fn surface_copy_paste(
  script: &mut Script,
  surface: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("surface", surface as i64)?;
  script.append_block(
    Block::new("Copy/Paste an existing surface")
      .line(format_args!("SURFACE_COPY_PASTE {}", surface))
  );
  return Ok(());
}

/// Appends the command to automatically fill holes on a surface.
pub fn surface_auto_hole_fill(
  script: &mut Script,
  surface: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("surface", surface as i64)?;
  script.append_block(
    Block::new("Automatic hole filling on an existing surface")
      .line("SURFACE_AUTO_HOLE_FILL")
      .line(surface)
  );
  return Ok(());
}

/// Appends the command to combine surfaces into one: a count on the
/// command line, then the comma-joined indices.
pub fn surface_combine(
  script: &mut Script,
  surface_indices: &[u32]
) -> Result<(), MacroError> {
  validate::not_empty("surface_indices", surface_indices.len())?;
  for s in surface_indices.iter() {
    validate::nonzero_index("surface_indices", *s as i64)?;
  }
  script.append_block(
    Block::new("Combine selected surfaces")
      .kv("SURFACE_COMBINE", surface_indices.len())
      .line(join_csv(surface_indices))
  );
  return Ok(());
}

/// Appends the command to delete the currently selected mesh faces.
pub fn delete_selected_faces(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete selected mesh faces").line("DELETE_SELECTED_FACES")
  );
  return Ok(());
}

/// Appends the command to delete an existing surface.
pub fn surface_delete(
  script: &mut Script,
  surface_index: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("surface_index", surface_index as i64)?;
  script.append_block(
    Block::new("Delete an existing surface")
      .line("SURFACE_DELETE")
      .kv("SURFACE", surface_index)
  );
  return Ok(());
}

/// Appends the command to delete all surfaces in the simulation.
pub fn surface_clearall(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all surfaces in simulation").line("SURFACE_CLEARALL")
  );
  return Ok(());
}
