//! This module implements the solver setup commands: model selection,
//! steady/unsteady configuration, unsteady plots and animation, the
//! viscous and separation options, and the long tail of single-knob
//! solver settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::block::{join_csv, join_spaced, Block};
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{
  token_enum, BoundaryList, ForceUnit, LoadParameter, Switch
};
use crate::validate;

token_enum!(
  /// The solver models on offer.
  SolverModel,
  { "Incompressible flow.", Incompressible, "INCOMPRESSIBLE" },
  { "Subsonic compressible flow.", Subsonic, "SUBSONIC" },
  { "Transonic compressible flow.", Transonic, "TRANSONIC" },
);

/// Appends the command to set the solver model.
pub fn set_solver_model(
  script: &mut Script,
  model_type: SolverModel
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the solver model")
      .kv("SET_SOLVER_MODEL", model_type)
  );
  return Ok(());
}

/// Appends the command to select the steady solver.
pub fn steady(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the steady solver").line("SET_SOLVER_STEADY")
  );
  return Ok(());
}

/// Appends the command to select the unsteady solver with its time
/// stepping.
pub fn unsteady(
  script: &mut Script,
  time_iterations: u32,
  delta_time: f64
) -> Result<(), MacroError> {
  validate::nonzero_index("time_iterations", time_iterations as i64)?;
  validate::positive("delta_time", delta_time)?;
  script.append_block(
    Block::new("Set the unsteady solver")
      .line("SET_SOLVER_UNSTEADY")
      .kv("TIME_ITERATIONS", time_iterations)
      .kv("DELTA_TIME", delta_time)
  );
  return Ok(());
}

/// Appends the command to create a new unsteady force & moments plot
/// over the given boundaries.
pub fn unsteady_solver_new_force_plot(
  script: &mut Script,
  frame: u32,
  units: ForceUnit,
  parameter: LoadParameter,
  name: &str,
  boundaries: &BoundaryList
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  if let BoundaryList::Listed(ref list) = boundaries {
    validate::not_empty("boundaries", list.len())?;
    for b in list.iter() {
      validate::nonzero_index("boundaries", *b as i64)?;
    }
  }
  let mut block = Block::new(
    "Create a new unsteady solver force & moments plot"
  )
    .line("UNSTEADY_SOLVER_NEW_FORCE_PLOT")
    .kv("FRAME", frame)
    .kv("UNITS", units)
    .kv("PARAMETER", parameter)
    .kv("NAME", name)
    .kv("BOUNDARIES", boundaries.count());
  if !boundaries.indices().is_empty() {
    block = block.line(join_csv(boundaries.indices()));
  }
  script.append_block(block);
  return Ok(());
}

token_enum!(
  /// Fluid properties an unsteady plot can track at a point.
  FluidPlotParameter,
  { "Pressure coefficient (freestream).", CpFree, "CP_FREE" },
  { "Pressure coefficient (reference).", CpRef, "CP_REF" },
  { "Mach number.", Mach, "MACH" },
  { "Velocity magnitude.", Velocity, "VELOCITY" },
  { "Velocity X component.", Vx, "VX" },
  { "Velocity Y component.", Vy, "VY" },
  { "Velocity Z component.", Vz, "VZ" },
  {
    "Static pressure ratio.",
    StaticPressureRatio,
    "STATIC_PRESSURE_RATIO"
  },
);

/// Appends the command to create a new unsteady fluid-properties plot at
/// a measurement vertex.
pub fn unsteady_solver_new_fluid_plot(
  script: &mut Script,
  frame: u32,
  parameter: FluidPlotParameter,
  name: &str,
  vertex: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::nonzero_index("frame", frame as i64)?;
  script.append_block(
    Block::new("Create a new unsteady solver fluid properties plot")
      .line("UNSTEADY_SOLVER_NEW_FLUID_PLOT")
      .kv("FRAME", frame)
      .kv("PARAMETER", parameter)
      .kv("NAME", name)
      .kv("VERTEX", join_spaced([vertex.0, vertex.1, vertex.2]))
  );
  return Ok(());
}

/// Appends the command to export all unsteady solver plots to a file.
pub fn unsteady_solver_export_plots(
  script: &mut Script,
  export_filepath: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export all unsteady solver plots")
      .line("UNSTEADY_SOLVER_EXPORT_PLOTS")
      .line(export_filepath.display())
  );
  return Ok(());
}

/// Appends the command to delete all unsteady solver plots.
pub fn unsteady_solver_delete_all_plots(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete all unsteady solver plots")
      .line("UNSTEADY_SOLVER_DELETE_ALL_PLOTS")
  );
  return Ok(());
}

token_enum!(
  /// Output file types for the unsteady solver animation.
  AnimationFiletype,
  { "Bitmaps of the solver scene.", SolverBitmap, "SOLVER_BITMAP" },
  { "Bitmaps of the plots scene.", PlotsBitmap, "PLOTS_BITMAP" },
  { "Tecplot data files.", TecplotData, "TECPLOT_DATA" },
  { "ParaView VTK files.", ParaviewVtk, "PARAVIEW_VTK" },
);

/// The unsteady animation setting: off, or on with its output options.
/// The options only make it into the script when the animation is on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Animation {
  /// No animation output.
  Disable,
  /// Animation output with the given options.
  Enable {
    /// Folder that receives the output files.
    folder: PathBuf,
    /// Type of the output files.
    filetype: AnimationFiletype,
    /// Output frequency in solver time steps.
    frequency: u32,
    /// Whether volume section files are exported too.
    volume_sections: Switch
  }
}

/// Appends the command to configure the unsteady solver animation.
pub fn unsteady_solver_animation(
  script: &mut Script,
  animation: &Animation
) -> Result<(), MacroError> {
  let block = match animation {
    Animation::Disable => {
      Block::new("Set the unsteady solver animation controls")
        .kv("UNSTEADY_SOLVER_ANIMATION", Switch::Disable)
    },
    Animation::Enable { folder, filetype, frequency, volume_sections } => {
      validate::nonzero_index("frequency", *frequency as i64)?;
      Block::new("Set the unsteady solver animation controls")
        .kv("UNSTEADY_SOLVER_ANIMATION", Switch::Enable)
        .kv("FOLDER", folder.display())
        .kv("FILETYPE", filetype)
        .kv("FREQUENCY", frequency)
        .kv("VOLUME_SECTIONS", volume_sections)
    }
  };
  script.append_block(block);
  return Ok(());
}

token_enum!(
  /// Surface boundary layer treatments.
  BoundaryLayerType,
  { "Fully laminar.", Laminar, "LAMINAR" },
  { "Transitional.", Transitional, "TRANSITIONAL" },
  { "Fully turbulent.", Turbulent, "TURBULENT" },
);

/// Appends the command to set the surface boundary layer type.
pub fn boundary_layer_type(
  script: &mut Script,
  type_value: BoundaryLayerType
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the surface boundary layer type")
      .kv("SET_BOUNDARY_LAYER_TYPE", type_value)
  );
  return Ok(());
}

/// Appends the command to set the surface roughness height, in
/// nanometers.
pub fn surface_roughness(
  script: &mut Script,
  roughness_height: f64
) -> Result<(), MacroError> {
  validate::positive("roughness_height", roughness_height)?;
  script.append_block(
    Block::new("Set the surface roughness height")
      .kv("SET_SURFACE_ROUGHNESS", roughness_height)
  );
  return Ok(());
}

/// Appends the command to toggle the solver viscous coupling.
pub fn viscous_coupling(
  script: &mut Script,
  mode: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the solver viscous coupling")
      .kv("SET_SOLVER_VISCOUS_COUPLING", mode)
  );
  return Ok(());
}

/// Appends the command to set the viscous exclusion boundary list.
pub fn viscous_excluded_boundaries(
  script: &mut Script,
  boundaries: &[u32]
) -> Result<(), MacroError> {
  validate::not_empty("boundaries", boundaries.len())?;
  for b in boundaries.iter() {
    validate::nonzero_index("boundaries", *b as i64)?;
  }
  script.append_block(
    Block::new("Set the viscous exclusion boundary list")
      .kv("SET_VISCOUS_EXCLUDED_BOUNDARIES", boundaries.len())
      .line(join_csv(boundaries))
  );
  return Ok(());
}

/// Appends the command to delete the viscous exclusion boundary list.
pub fn delete_viscous_excluded_boundaries(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete the viscous exclusion boundary list")
      .line("DELETE_VISCOUS_EXCLUDED_BOUNDARIES")
  );
  return Ok(());
}

/// Appends the command to set the unsteady time-stepping iteration at
/// which viscous coupling switches on.
pub fn unsteady_viscous_coupling_iteration(
  script: &mut Script,
  num_iteration: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("num_iteration", num_iteration as i64)?;
  script.append_block(
    Block::new("Set the unsteady-solver viscous-coupling iteration")
      .kv("SET_UNSTEADY_VISCOUS_COUPLING_ITERATION", num_iteration)
  );
  return Ok(());
}

/// Appends the command to set the axial flow separation boundary list.
pub fn set_axial_separation_boundaries(
  script: &mut Script,
  boundary_indices: &[u32]
) -> Result<(), MacroError> {
  validate::not_empty("boundary_indices", boundary_indices.len())?;
  for b in boundary_indices.iter() {
    validate::nonzero_index("boundary_indices", *b as i64)?;
  }
  script.append_block(
    Block::new("Set the axial flow separation boundary list")
      .kv("SET_AXIAL_SEPARATION_BOUNDARIES", boundary_indices.len())
      .line(join_csv(boundary_indices))
  );
  return Ok(());
}

/// Appends the command to delete all axial flow separation boundaries.
pub fn delete_axial_separation_boundaries(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete the axial flow separation boundary list")
      .line("DELETE_AXIAL_SEPARATION_BOUNDARIES")
  );
  return Ok(());
}

/// Appends the command to set the cross-flow separation boundary list.
pub fn set_crossflow_separation_boundaries(
  script: &mut Script,
  boundary_indices: &[u32]
) -> Result<(), MacroError> {
  validate::not_empty("boundary_indices", boundary_indices.len())?;
  for b in boundary_indices.iter() {
    validate::nonzero_index("boundary_indices", *b as i64)?;
  }
  script.append_block(
    Block::new("Set the cross-flow separation boundary list")
      .kv("SET_CROSSFLOW_SEPARATION_BOUNDARIES", boundary_indices.len())
      .line(join_csv(boundary_indices))
  );
  return Ok(());
}

/// Appends the command to delete all cross-flow separation boundaries.
pub fn delete_crossflow_separation_boundaries(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Delete the cross-flow separation boundary list")
      .line("DELETE_CROSSFLOW_SEPARATION_BOUNDARIES")
  );
  return Ok(());
}

/// Appends the command to set the cross-flow separation pressure
/// coefficient from the mean body diameter.
pub fn set_crossflow_separation_cp(
  script: &mut Script,
  mean_diameter: f64
) -> Result<(), MacroError> {
  validate::positive("mean_diameter", mean_diameter)?;
  script.append_block(
    Block::new("Set the cross-flow separation pressure coefficient")
      .kv("SET_CROSSFLOW_SEPARATION_CP", mean_diameter)
  );
  return Ok(());
}

/// The full option block of the `SOLVER_SETTINGS` command, with the
/// external tool's defaults.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SolverSettings {
  /// Angle of attack in degrees, magnitude below 90.
  pub angle_of_attack: f64,
  /// Side-slip angle in degrees, magnitude below 90.
  pub sideslip_angle: f64,
  /// Freestream velocity.
  pub freestream_velocity: f64,
  /// Solver iteration count.
  pub iterations: u32,
  /// Convergence limit.
  pub convergence_limit: f64,
  /// Forced-run toggle.
  pub forced_run: Switch,
  /// Compressibility toggle.
  pub compressibility: Switch,
  /// Reference velocity.
  pub reference_velocity: f64,
  /// Reference area.
  pub reference_area: f64,
  /// Reference length.
  pub reference_length: f64,
  /// Parallel processor count.
  pub processors: u32,
  /// Wake size.
  pub wake_size: f64
}

impl Default for SolverSettings {
  fn default() -> Self {
    return Self {
      angle_of_attack: 0.0,
      sideslip_angle: 0.0,
      freestream_velocity: 100.0,
      iterations: 500,
      convergence_limit: 1e-5,
      forced_run: Switch::Disable,
      compressibility: Switch::Disable,
      reference_velocity: 100.0,
      reference_area: 1.0,
      reference_length: 1.0,
      processors: 2,
      wake_size: 1000.0
    };
  }
}

/// Appends the command to set the whole solver settings block at once.
pub fn solver_settings(
  script: &mut Script,
  settings: &SolverSettings
) -> Result<(), MacroError> {
  validate::strictly_between(
    "angle_of_attack", settings.angle_of_attack, -90.0, 90.0
  )?;
  validate::strictly_between(
    "sideslip_angle", settings.sideslip_angle, -90.0, 90.0
  )?;
  validate::nonzero_index("iterations", settings.iterations as i64)?;
  validate::positive("reference_area", settings.reference_area)?;
  validate::positive("reference_length", settings.reference_length)?;
  validate::nonzero_index("processors", settings.processors as i64)?;
  script.append_block(
    Block::new("Set the solver settings")
      .line("SOLVER_SETTINGS")
      .kv("ANGLE_OF_ATTACK", settings.angle_of_attack)
      .kv("SIDESLIP_ANGLE", settings.sideslip_angle)
      .kv("FREESTREAM_VELOCITY", settings.freestream_velocity)
      .kv("ITERATIONS", settings.iterations)
      .kv("CONVERGENCE_LIMIT", settings.convergence_limit)
      .kv("FORCED_RUN", settings.forced_run)
      .kv("COMPRESSIBILITY", settings.compressibility)
      .kv("REFERENCE_VELOCITY", settings.reference_velocity)
      .kv("REFERENCE_AREA", settings.reference_area)
      .kv("REFERENCE_LENGTH", settings.reference_length)
      .kv("PROCESSORS", settings.processors)
      .kv("WAKE_SIZE", settings.wake_size)
  );
  return Ok(());
}

/// Appends the command to set the solver angle of attack, in degrees
/// with magnitude below 90.
pub fn aoa(script: &mut Script, angle: f64) -> Result<(), MacroError> {
  validate::strictly_between("angle", angle, -90.0, 90.0)?;
  script.append_block(
    Block::new("Set the solver AOA").kv("SOLVER_SET_AOA", angle)
  );
  return Ok(());
}

/// Appends the command to set the solver side-slip angle, in degrees
/// with magnitude below 90.
pub fn sideslip(script: &mut Script, angle: f64) -> Result<(), MacroError> {
  validate::strictly_between("angle", angle, -90.0, 90.0)?;
  script.append_block(
    Block::new("Set the solver Side-slip angle")
      .kv("SOLVER_SET_SIDESLIP", angle)
  );
  return Ok(());
}

/// Appends the command to set the solver freestream velocity.
pub fn velocity(
  script: &mut Script,
  velocity: f64
) -> Result<(), MacroError> {
  validate::positive("velocity", velocity)?;
  script.append_block(
    Block::new("Set the solver free-stream velocity")
      .kv("SOLVER_SET_VELOCITY", velocity)
  );
  return Ok(());
}

/// Appends the command to set the solver Mach number.
pub fn mach_number(script: &mut Script, mach: f64) -> Result<(), MacroError> {
  validate::non_negative("mach", mach)?;
  script.append_block(
    Block::new("Set the solver Mach number")
      .kv("SOLVER_SET_MACH_NUMBER", mach)
  );
  return Ok(());
}

/// Appends the command to set the solver iteration count.
pub fn iterations(
  script: &mut Script,
  num_iterations: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("num_iterations", num_iterations as i64)?;
  script.append_block(
    Block::new("Set the solver iterations")
      .kv("SOLVER_SET_ITERATIONS", num_iterations)
  );
  return Ok(());
}

/// Appends the command to set the solver convergence threshold.
pub fn convergence(
  script: &mut Script,
  threshold: f64
) -> Result<(), MacroError> {
  validate::positive("threshold", threshold)?;
  script.append_block(
    Block::new("Set the solver convergence threshold")
      .kv("SOLVER_SET_CONVERGENCE", threshold)
  );
  return Ok(());
}

/// Appends the command to toggle the solver forced-iterations mode.
pub fn forced_iterations(
  script: &mut Script,
  mode: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Enable solver forced iterations mode")
      .kv("SOLVER_SET_FORCED_ITERATIONS", mode)
  );
  return Ok(());
}

/// Appends the command to set the solver reference velocity.
pub fn ref_velocity(
  script: &mut Script,
  value: f64
) -> Result<(), MacroError> {
  validate::positive("value", value)?;
  script.append_block(
    Block::new("Set the solver reference velocity")
      .kv("SOLVER_SET_REF_VELOCITY", value)
  );
  return Ok(());
}

/// Appends the command to set the solver reference Mach number.
pub fn ref_mach_number(
  script: &mut Script,
  mach: f64
) -> Result<(), MacroError> {
  validate::non_negative("mach", mach)?;
  script.append_block(
    Block::new("Set the solver reference Mach number")
      .kv("SOLVER_SET_REF_MACH_NUMBER", mach)
  );
  return Ok(());
}

/// Appends the command to set the solver reference area.
pub fn ref_area(script: &mut Script, value: f64) -> Result<(), MacroError> {
  validate::positive("value", value)?;
  script.append_block(
    Block::new("Set the solver reference area")
      .kv("SOLVER_SET_REF_AREA", value)
  );
  return Ok(());
}

/// Appends the command to set the solver reference length.
pub fn ref_length(script: &mut Script, length: f64) -> Result<(), MacroError> {
  validate::positive("length", length)?;
  script.append_block(
    Block::new("Set the solver reference length")
      .kv("SOLVER_SET_REF_LENGTH", length)
  );
  return Ok(());
}

/// Appends the command to set the minimum pressure coefficient the
/// solver allows.
pub fn solver_minimum_cp(
  script: &mut Script,
  cp: f64
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the solver minimum coefficient of pressure")
      .kv("SOLVER_MINIMUM_CP", cp)
  );
  return Ok(());
}

/// Appends the command to toggle the solver compressibility.
pub fn compressibility(
  script: &mut Script,
  compressibility: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the solver compressibility")
      .kv("SOLVER_SET_COMPRESSIBILITY", compressibility)
  );
  return Ok(());
}

/// Appends the command to set the number of solver parallel cores.
pub fn solver_parallel_cores(
  script: &mut Script,
  num_cores: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("num_cores", num_cores as i64)?;
  script.append_block(
    Block::new("Set the solver parallel cores")
      .kv("SOLVER_PARALLEL_CORES", num_cores)
  );
  return Ok(());
}

/// Appends the command to toggle the mesh-induced wake velocity.
pub fn mesh_induced_wake_velocity(
  script: &mut Script,
  enable: bool
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the solver mesh induced wake velocity")
      .kv("SOLVER_SET_MESH_INDUCED_WAKE_VELOCITY", Switch::from_bool(enable))
  );
  return Ok(());
}

/// Appends the command to toggle the adverse pressure gradient boundary
/// layer mode.
pub fn adverse_gradient_boundary_layer(
  script: &mut Script,
  mode: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the adverse pressure gradient boundary layer mode")
      .kv("SOLVER_SET_ADVERSE_GRADIENT_BOUNDARY_LAYER", mode)
  );
  return Ok(());
}

/// Appends the command to set the far-field agglomeration layer count,
/// between 1 and 5.
pub fn farfield_layers(
  script: &mut Script,
  value: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("value", value as i64)?;
  validate::at_most("value", value, 5)?;
  script.append_block(
    Block::new("Set the solver far-field agglomeration layers")
      .kv("SOLVER_SET_FARFIELD_LAYERS", value)
  );
  return Ok(());
}

/// Appends the command to toggle the unsteady Bernoulli and Kutta
/// terms.
pub fn solver_unsteady_pressure_and_kutta(
  script: &mut Script,
  status: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Enable solver unsteady Bernoulli and Kutta terms")
      .kv("SOLVER_UNSTEADY_PRESSURE_AND_KUTTA", status)
  );
  return Ok(());
}

/// Appends the command to toggle the vortex ring normalization.
pub fn solver_vortex_ring_normalization(
  script: &mut Script,
  status: Switch
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Enable solver vortex ring normalization")
      .kv("SOLVER_VORTEX_RING_NORMALIZATION", status)
  );
  return Ok(());
}

/// Appends the command to set how many iterations the solver keeps
/// running after crossing the convergence threshold.
pub fn convergence_iterations(
  script: &mut Script,
  value: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("value", value as i64)?;
  script.append_block(
    Block::new("Set the solver convergence iterations")
      .kv("SET_SOLVER_CONVERGENCE_ITERATIONS", value)
  );
  return Ok(());
}

/// Appends the command to toggle the wake streamwise agglomeration
/// feature.
pub fn wake_streamwise_agglomeration(
  script: &mut Script,
  enable: bool
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Enable the wake-->streamwise agglomeration feature")
      .kv("SET_WAKE_STREAMWISE_AGGLOMERATION", Switch::from_bool(enable))
  );
  return Ok(());
}

/// Appends the command to set the number of time steps after which a
/// wake filament loses its strength and is removed.
pub fn wake_termination_time_steps(
  script: &mut Script,
  value: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("value", value as i64)?;
  script.append_block(
    Block::new("Set the wake termination time-steps value")
      .kv("SET_WAKE_TERMINATION_TIME_STEPS", value)
  );
  return Ok(());
}

/// Appends the command to toggle the wake relaxation feature.
pub fn wake_relaxation(
  script: &mut Script,
  enable: bool
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Set the wake-relaxation feature")
      .kv("SET_WAKE_RELAXATION", Switch::from_bool(enable))
  );
  return Ok(());
}
