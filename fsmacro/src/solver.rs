//! This module implements solver initialization and its immediate
//! neighbors. The big option block for `INITIALIZE_SOLVER` is carried by
//! one struct so call sites only spell out what they change.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, Switch};
use crate::validate;

token_enum!(
  /// Symmetry treatments the solver can initialize with.
  SymmetryType,
  { "No symmetry.", None, "NONE" },
  { "Mirror symmetry about a plane.", Plane, "PLANE" },
  { "Rotational periodicity.", Periodic, "PERIODIC" },
);

/// Where the wake is terminated downstream, in the X direction.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum WakeTermination {
  /// Let the solver pick its default termination distance.
  Default,
  /// Terminate at an explicit X station.
  AtX(f64)
}

impl Display for WakeTermination {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return match self {
      WakeTermination::Default => write!(f, "DEFAULT"),
      WakeTermination::AtX(x) => write!(f, "{}", x)
    };
  }
}

/// One boundary entry in the solver initialization: its mesh index, its
/// symmetry tag, and whether its wake is enabled.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SolverBoundary {
  /// Index of the mesh boundary.
  pub surface: u32,
  /// Symmetry tag for this boundary.
  pub symmetry_tag: u32,
  /// Whether this boundary sheds a wake.
  pub wake: Switch
}

/// Which boundaries the solver is initialized over.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum SolverSurfaces {
  /// All mesh boundaries.
  All,
  /// An explicit list of boundaries.
  Listed(Vec<SolverBoundary>)
}

/// The options handed to `INITIALIZE_SOLVER`, with the defaults the
/// external tool uses.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SolverInit {
  /// The boundaries to initialize over.
  pub surfaces: SolverSurfaces,
  /// Index of the coordinate system for load evaluation.
  pub load_frame: u32,
  /// Downstream wake termination.
  pub wake_termination_x: WakeTermination,
  /// Symmetry treatment.
  pub symmetry_type: SymmetryType,
  /// Periodicity count for the periodic symmetry type.
  pub symmetry_periodicity: u32,
  /// Proximity avoidance toggle.
  pub proximity_avoidance: Switch,
  /// Mesh stabilization toggle.
  pub stabilization: Switch,
  /// Stabilization strength, strictly between 0 and 5.
  pub stabilization_strength: f64,
  /// Fast multipole acceleration toggle.
  pub fast_multipole: Switch
}

impl Default for SolverInit {
  fn default() -> Self {
    return Self {
      surfaces: SolverSurfaces::All,
      load_frame: 1,
      wake_termination_x: WakeTermination::Default,
      symmetry_type: SymmetryType::None,
      symmetry_periodicity: 0,
      proximity_avoidance: Switch::Disable,
      stabilization: Switch::Enable,
      stabilization_strength: 1.0,
      fast_multipole: Switch::Enable
    };
  }
}

/// Appends the command to initialize the solver with the given options.
pub fn initialize_solver(
  script: &mut Script,
  init: &SolverInit
) -> Result<(), MacroError> {
  validate::nonzero_index("load_frame", init.load_frame as i64)?;
  validate::strictly_between(
    "stabilization_strength",
    init.stabilization_strength,
    0.0,
    5.0
  )?;
  if let SolverSurfaces::Listed(ref bs) = init.surfaces {
    validate::not_empty("surfaces", bs.len())?;
    for b in bs.iter() {
      validate::nonzero_index("surface", b.surface as i64)?;
    }
  }
  let mut block = Block::new("Initialize the solver")
    .line("INITIALIZE_SOLVER");
  match init.surfaces {
    SolverSurfaces::All => {
      block = block.kv("SURFACES", -1);
    },
    SolverSurfaces::Listed(ref bs) => {
      block = block.kv("SURFACES", bs.len());
      for b in bs.iter() {
        block = block.line(format_args!(
          "{},{},{}", b.surface, b.symmetry_tag, b.wake
        ));
      }
    }
  }
  block = block
    .kv("WAKE_TERMINATION_X", init.wake_termination_x)
    .kv("SYMMETRY_TYPE", init.symmetry_type)
    .kv("SYMMETRY_PERIODICITY", init.symmetry_periodicity)
    .kv("LOAD_FRAME", init.load_frame)
    .kv("PROXIMITY_AVOIDANCE", init.proximity_avoidance)
    .kv("STABILIZATION", init.stabilization)
    .kv("STABILIZATION_STRENGTH", init.stabilization_strength)
    .kv("FAST_MULTIPOLE", init.fast_multipole);
  script.append_block(block);
  return Ok(());
}

/// Appends the command to enable solver proximity checking for the given
/// boundaries: a count line followed by one index per line.
pub fn solver_proximal_boundaries(
  script: &mut Script,
  boundaries: &[u32]
) -> Result<(), MacroError> {
  validate::not_empty("boundaries", boundaries.len())?;
  for b in boundaries.iter() {
    validate::nonzero_index("boundaries", *b as i64)?;
  }
  let mut block = Block::new(
    "Enable solver proximity checking for specified boundaries"
  ).kv("SOLVER_PROXIMAL_BOUNDARIES", boundaries.len());
  for b in boundaries.iter() {
    block = block.line(b);
  }
  script.append_block(block);
  return Ok(());
}

/// Appends the command to remove the solver initialization.
pub fn solver_uninitialize(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Remove the solver initialization")
      .line("SOLVER_UNINITIALIZE")
  );
  return Ok(());
}
