//! This module implements the solver sweeper and the stability & control
//! toolbox.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::block::{join_csv, Block};
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, BoundaryList, LoadParameter, Switch};
use crate::validate;

/// One sweep variable of the solver sweeper: whether it sweeps and over
/// what start/stop/delta range.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SweepRange {
  /// Whether this variable is swept at all.
  pub active: Switch,
  /// First value of the sweep.
  pub start: f64,
  /// Last value of the sweep.
  pub stop: f64,
  /// Step between sweep points.
  pub delta: f64
}

impl Default for SweepRange {
  fn default() -> Self {
    return Self {
      active: Switch::Disable,
      start: 0.0,
      stop: 0.0,
      delta: 1.0
    };
  }
}

/// The full option set of the solver sweeper.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SweeperSettings {
  /// Angle-of-attack sweep.
  pub angle_of_attack: SweepRange,
  /// Side-slip angle sweep.
  pub side_slip_angle: SweepRange,
  /// Velocity sweep.
  pub velocity: SweepRange,
  /// Whether surface data is exported on every sweep step.
  pub export_surface_data_per_step: Switch,
  /// Folder that receives the per-step surface data files.
  pub surface_results_path: PathBuf,
  /// Whether the solution is cleared before each run.
  pub clear_solution_after_each_run: Switch,
  /// Whether the reference velocity tracks the freestream velocity.
  pub reference_velocity_equals_freestream: Switch,
  /// Whether results are appended to an existing sweep file.
  pub append_to_existing_sweep: Switch,
  /// Full path of the sweep results file.
  pub results_filename: PathBuf
}

/// Appends the command to initialize and execute the solver sweeper.
pub fn execute_solver_sweeper(
  script: &mut Script,
  settings: &SweeperSettings
) -> Result<(), MacroError> {
  for (name, range) in [
    ("angle_of_attack", &settings.angle_of_attack),
    ("side_slip_angle", &settings.side_slip_angle),
    ("velocity", &settings.velocity)
  ] {
    if range.active == Switch::Enable {
      validate::positive(name, range.delta)?;
    }
  }
  script.append_block(
    Block::new("Initialize and execute the solver sweeper")
      .line("EXECUTE_SOLVER_SWEEPER")
      .kv("ANGLE_OF_ATTACK", settings.angle_of_attack.active)
      .kv("SIDE_SLIP_ANGLE", settings.side_slip_angle.active)
      .kv("VELOCITY", settings.velocity.active)
      .kv("ANGLE_OF_ATTACK_START", settings.angle_of_attack.start)
      .kv("ANGLE_OF_ATTACK_STOP", settings.angle_of_attack.stop)
      .kv("ANGLE_OF_ATTACK_DELTA", settings.angle_of_attack.delta)
      .kv("SIDE_SLIP_ANGLE_START", settings.side_slip_angle.start)
      .kv("SIDE_SLIP_ANGLE_STOP", settings.side_slip_angle.stop)
      .kv("SIDE_SLIP_ANGLE_DELTA", settings.side_slip_angle.delta)
      .kv("VELOCITY_START", settings.velocity.start)
      .kv("VELOCITY_STOP", settings.velocity.stop)
      .kv("VELOCITY_DELTA", settings.velocity.delta)
      .kv(
        "EXPORT_SURFACE_DATA_PER_STEP",
        settings.export_surface_data_per_step
      )
      .line(settings.surface_results_path.display())
      .kv(
        "CLEAR_SOLUTION_AFTER_EACH_RUN",
        settings.clear_solution_after_each_run
      )
      .kv(
        "REFERENCE_VELOCITY_EQUALS_FREESTREAM",
        settings.reference_velocity_equals_freestream
      )
      .kv("APPEND_TO_EXISTING_SWEEP", settings.append_to_existing_sweep)
      .line(settings.results_filename.display())
  );
  return Ok(());
}

token_enum!(
  /// Angle units for dynamic stability coefficients.
  StabilityUnits,
  { "Per radian.", PerRadian, "PER_RADIAN" },
  { "Per degree.", PerDegree, "PER_DEGREE" },
);

/// Appends the command to set the stability & control toolbox
/// parameters: rotation frame, units, per-run clearing, and the angular
/// rate increment (rad/sec) used for dynamic coefficients.
pub fn stability_toolbox_settings(
  script: &mut Script,
  rotation_frame: u32,
  units: StabilityUnits,
  clear_solver_per_run: Switch,
  angular_rate_increment: f64
) -> Result<(), MacroError> {
  validate::nonzero_index("rotation_frame", rotation_frame as i64)?;
  validate::positive("angular_rate_increment", angular_rate_increment)?;
  script.append_block(
    Block::new("Set the S&C toolbox parameters here")
      .line("STABILITY_TOOLBOX_SETTINGS")
      .line(rotation_frame)
      .line(units)
      .line(clear_solver_per_run)
      .line(angular_rate_increment)
  );
  return Ok(());
}

token_enum!(
  /// Denominator variables for user-defined stability coefficients.
  StabilityDenominator,
  { "Angle of attack.", Aoa, "AOA" },
  { "Side-slip angle.", Beta, "BETA" },
  { "Rotation rate about X.", RotX, "ROTX" },
  { "Rotation rate about Y.", RotY, "ROTY" },
  { "Rotation rate about Z.", RotZ, "ROTZ" },
);

/// Appends the command to define a new stability & control coefficient.
/// The boundary list feeds the coefficient's numerator variable.
pub fn stability_toolbox_new_coefficient(
  script: &mut Script,
  name: &str,
  numerator: LoadParameter,
  denominator: StabilityDenominator,
  frame: u32,
  constant: f64,
  boundaries: &BoundaryList
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  if let BoundaryList::Listed(ref list) = boundaries {
    validate::not_empty("boundaries", list.len())?;
    for b in list.iter() {
      validate::nonzero_index("boundaries", *b as i64)?;
    }
  }
  let mut block = Block::new("Create a new S&C Coefficient")
    .line("STABILITY_TOOLBOX_NEW_COEFFICIENT")
    .kv("NAME", name)
    .kv("NUMERATOR", numerator)
    .kv("DENOMINATOR", denominator)
    .kv("FRAME", frame)
    .kv("CONSTANT", constant)
    .kv("BOUNDARIES", boundaries.count());
  if !boundaries.indices().is_empty() {
    block = block.line(join_csv(boundaries.indices()));
  }
  script.append_block(block);
  return Ok(());
}

/// Appends the command to delete all stability & control coefficients.
pub fn stability_toolbox_delete_all(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all S&C Toolbox coefficients")
      .line("STABILITY_TOOLBOX_DELETE_ALL")
  );
  return Ok(());
}

/// Appends the command to compute the stability coefficients.
pub fn compute_stability_coefficients(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Compute the stability coefficients")
      .line("COMPUTE_STABILITY_COEFFICIENTS")
  );
  return Ok(());
}

/// Appends the command to export the stability & control results to an
/// external file.
pub fn stability_toolbox_export(
  script: &mut Script,
  filename: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export the S&C toolbox results to external file")
      .line("STABILITY_TOOLBOX_EXPORT")
      .line(filename.display())
  );
  return Ok(());
}
