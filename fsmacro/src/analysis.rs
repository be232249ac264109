//! This module implements the solver analysis tab commands.

use serde::{Deserialize, Serialize};

use crate::block::{join_csv, Block};
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, ForceUnit, Switch};
use crate::validate;

/// Highest integer code accepted for the scene contour variable. The
/// codes run from 0 (no contour) through 25 (boundary layer stagnation
/// marker); the mapping lives in the external tool's documentation.
pub const MAX_CONTOUR_VARIABLE: u32 = 25;

/// Appends the command to set the scene contour variable by its integer
/// code.
pub fn set_scene_contour(
  script: &mut Script,
  variable: u32
) -> Result<(), MacroError> {
  validate::at_most("variable", variable, MAX_CONTOUR_VARIABLE)?;
  script.append_block(
    Block::new("Change scene contour parameter")
      .line("SET_SCENE_CONTOUR")
      .kv("VARIABLE", variable)
  );
  return Ok(());
}

token_enum!(
  /// Load computation models for drag and moments.
  LoadsModel,
  { "Vorticity-based model.", Vorticity, "VORTICITY" },
  { "Pressure-based model.", Pressure, "PRESSURE" },
);

/// Appends the command to set the solver analysis options.
pub fn solver_analysis_options(
  script: &mut Script,
  load_frame: u32,
  drag_model: LoadsModel,
  moment_model: LoadsModel,
  compute_symmetry_loads: Switch
) -> Result<(), MacroError> {
  validate::nonzero_index("load_frame", load_frame as i64)?;
  script.append_block(
    Block::new("Set the solver analysis options")
      .line("SOLVER_ANALYSIS_OPTIONS")
      .kv("LOAD_FRAME", load_frame)
      .kv("DRAG_MODEL", drag_model)
      .kv("MOMENT_MODEL", moment_model)
      .kv("COMPUTE_SYMMETRY_LOADS", compute_symmetry_loads)
  );
  return Ok(());
}

/// Appends the command to set the coordinate system used for evaluating
/// aerodynamic loads and moments.
pub fn set_solver_analysis_loads_frame(
  script: &mut Script,
  load_frame: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("load_frame", load_frame as i64)?;
  script.append_block(
    Block::new("Set the loads frame in the analysis tab")
      .line(format_args!("SET_SOLVER_ANALYSIS_LOADS_FRAME {}", load_frame))
  );
  return Ok(());
}

/// Appends the command to toggle the vorticity-mode lift model.
pub fn set_vorticity_lift_model(
  script: &mut Script,
  enable: bool
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the lift model to vorticity mode")
      .line(format_args!(
        "SET_VORTICITY_LIFT_MODEL {}", Switch::from_bool(enable)
      ))
  );
  return Ok(());
}

/// Appends the command to set the units for loads and moments.
pub fn set_loads_and_moments_units(
  script: &mut Script,
  unit_type: ForceUnit
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the solver analysis units selection")
      .line(format_args!("SET_LOADS_AND_MOMENTS_UNITS {}", unit_type))
  );
  return Ok(());
}

/// Appends the command to enable the given solver analysis boundaries:
/// a count on the command line, then the comma-joined indices.
pub fn set_solver_analysis_boundaries(
  script: &mut Script,
  boundaries: &[u32]
) -> Result<(), MacroError> {
  validate::not_empty("boundaries", boundaries.len())?;
  for b in boundaries.iter() {
    validate::nonzero_index("boundaries", *b as i64)?;
  }
  script.append_block(
    Block::new("Set the solver analysis boundaries")
      .kv("SET_SOLVER_ANALYSIS_BOUNDARIES", boundaries.len())
      .line(join_csv(boundaries))
  );
  return Ok(());
}
