//! This module implements the motion definition family: euclidean,
//! custom, 6DOF and FSI motions, their kinematic setters, and the 6DOF
//! external forces.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::{join_csv, Block};
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, BoundaryList, NamedAxis, Switch};
use crate::validate;

/// Appends the command to create a new Euclidean motion definition.
pub fn create_new_motion_euclidean(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a new Euclidean motion definition")
      .line("CREATE_NEW_MOTION_EUCLIDEAN")
  );
  return Ok(());
}

/// Appends the command to create a new Custom motion definition.
pub fn create_new_motion_custom(
  script: &mut Script
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a new Custom motion definition")
      .line("CREATE_NEW_MOTION_CUSTOM")
  );
  return Ok(());
}

/// Appends the command to create a new 6DOF motion definition.
pub fn create_new_motion_6dof(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a new 6DOF motion definition")
      .line("CREATE_NEW_MOTION_6DOF")
  );
  return Ok(());
}

/// Appends the command to create a new FSI motion definition.
pub fn create_new_motion_fsi(script: &mut Script) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a new FSI motion definition")
      .line("CREATE_NEW_MOTION_FSI")
  );
  return Ok(());
}

/// Appends the command to assign geometry boundaries to a motion
/// definition.
pub fn set_motion_boundaries(
  script: &mut Script,
  motion_id: u32,
  boundaries: &BoundaryList
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  if let BoundaryList::Listed(ref list) = boundaries {
    validate::not_empty("boundaries", list.len())?;
    for b in list.iter() {
      validate::nonzero_index("boundaries", *b as i64)?;
    }
  }
  let mut block = Block::new("Specify motion definition boundaries")
    .line(format_args!(
      "SET_MOTION_BOUNDARIES {} {}", motion_id, boundaries.count()
    ));
  if !boundaries.indices().is_empty() {
    block = block.line(join_csv(boundaries.indices()));
  }
  script.append_block(block);
  return Ok(());
}

/// Appends the command to attach local coordinate frames to a motion
/// definition.
pub fn set_motion_moving_frames(
  script: &mut Script,
  motion_id: u32,
  frames: &[u32]
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  for f in frames.iter() {
    validate::nonzero_index("frames", *f as i64)?;
  }
  let mut block = Block::new(
    "Specify specified local frames to motion definition"
  ).line(format_args!(
    "SET_MOTION_MOVING_FRAMES {} {}", motion_id, frames.len()
  ));
  if !frames.is_empty() {
    block = block.line(join_csv(frames));
  }
  script.append_block(block);
  return Ok(());
}

/// Appends the command to set the coordinate system of a motion
/// definition.
pub fn set_motion_coordinate_system(
  script: &mut Script,
  motion_id: u32,
  coordinate_system_id: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  validate::nonzero_index(
    "coordinate_system_id",
    coordinate_system_id as i64
  )?;
  script.append_block(
    Block::new("Set the coordinate system for a motion definition")
      .line(format_args!(
        "SET_MOTION_COORDINATE_SYSTEM {} {}",
        motion_id, coordinate_system_id
      ))
  );
  return Ok(());
}

/// Appends the command to set the start time of a motion within the
/// solver physical time.
pub fn set_motion_start_time(
  script: &mut Script,
  motion_id: u32,
  start_time: f64
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  validate::non_negative("start_time", start_time)?;
  script.append_block(
    Block::new("Set the start time for a motion definition")
      .line(format_args!("SET_MOTION_START_TIME {} {}", motion_id, start_time))
  );
  return Ok(());
}

/// Appends the command to set the velocity vector of a motion
/// definition, in its coordinate system.
pub fn set_motion_velocity(
  script: &mut Script,
  motion_id: u32,
  velocity: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Set the velocity vector for a motion definition")
      .line(format_args!(
        "SET_MOTION_VELOCITY {} {} {} {}",
        motion_id, velocity.0, velocity.1, velocity.2
      ))
  );
  return Ok(());
}

/// Appends the command to set the acceleration vector of a motion
/// definition.
pub fn set_motion_acceleration(
  script: &mut Script,
  motion_id: u32,
  acceleration: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Set the acceleration vector for a motion definition")
      .line(format_args!(
        "SET_MOTION_ACCELERATION {} {} {} {}",
        motion_id, acceleration.0, acceleration.1, acceleration.2
      ))
  );
  return Ok(());
}

/// Appends the command to set the angular velocity vector of a motion
/// definition.
pub fn set_motion_angular_velocity(
  script: &mut Script,
  motion_id: u32,
  angular_velocity: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Set the angular velocity vector for a motion definition")
      .line(format_args!(
        "SET_MOTION_ANGULAR_VELOCITY {} {} {} {}",
        motion_id, angular_velocity.0, angular_velocity.1, angular_velocity.2
      ))
  );
  return Ok(());
}

/// Appends the command to set the angular acceleration vector of a
/// motion definition.
pub fn set_motion_angular_acceleration(
  script: &mut Script,
  motion_id: u32,
  angular_acceleration: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Set the acceleration vector for a motion definition")
      .line(format_args!(
        "SET_MOTION_ANGULAR_ACCELERATION {} {} {} {}",
        motion_id,
        angular_acceleration.0,
        angular_acceleration.1,
        angular_acceleration.2
      ))
  );
  return Ok(());
}

/// Appends the command to mark a motion definition as a rotor or
/// propeller about an axis.
pub fn set_motion_is_rotor(
  script: &mut Script,
  motion_id: u32,
  flag: Switch,
  axis: NamedAxis
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Specify if motion definition is a rotor/propeller")
      .line(format_args!("SET_MOTION_IS_ROTOR {} {} {}", motion_id, flag, axis))
  );
  return Ok(());
}

token_enum!(
  /// The table types a custom motion can be driven by.
  CustomMotionTable,
  { "Velocity against time.", VelocityTime, "VELOCITY-TIME" },
  { "Position against time.", PositionTime, "POSITION-TIME" },
);

/// Appends the command to drive a custom motion definition from a table
/// file.
pub fn set_motion_custom_table(
  script: &mut Script,
  motion_type: CustomMotionTable,
  motion_id: u32,
  filename: &Path
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Specify custom motion definition table")
      .line(format_args!(
        "SET_MOTION_CUSTOM_TABLE {} {}", motion_type, motion_id
      ))
      .line(filename.display())
  );
  return Ok(());
}

/// The inertia tensor of a moving body, in the body frame.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct InertiaTensor {
  /// Moment of inertia about X.
  pub ixx: f64,
  /// Moment of inertia about Y.
  pub iyy: f64,
  /// Moment of inertia about Z.
  pub izz: f64,
  /// Product of inertia in XY.
  pub ixy: f64,
  /// Product of inertia in YZ.
  pub iyz: f64,
  /// Product of inertia in ZX.
  pub izx: f64
}

/// Appends the command to set the mass properties of a motion
/// definition.
pub fn set_motion_mass_properties(
  script: &mut Script,
  motion_id: u32,
  mass: f64,
  inertia: &InertiaTensor
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  validate::positive("mass", mass)?;
  script.append_block(
    Block::new("Specify motion mass properties")
      .line(format_args!(
        "SET_MOTION_MASS_PROPERTIES {} {} {} {} {} {} {} {}",
        motion_id, mass, inertia.ixx, inertia.iyy, inertia.izz,
        inertia.ixy, inertia.iyz, inertia.izx
      ))
  );
  return Ok(());
}

/// Appends the command to set the gravity vector of a 6DOF motion
/// definition, in the reference coordinate system.
pub fn set_motion_gravity(
  script: &mut Script,
  motion_id: u32,
  gravity: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Set the gravity force for a 6DOF motion definition")
      .line(format_args!(
        "SET_MOTION_GRAVITY {} {} {} {}",
        motion_id, gravity.0, gravity.1, gravity.2
      ))
  );
  return Ok(());
}

/// Appends the command to set the initial velocity of a 6DOF motion, in
/// the body coordinate system.
pub fn set_motion_6dof_initial_velocity(
  script: &mut Script,
  motion_id: u32,
  velocity: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Set the initial velocity conditions for a 6DOF motion")
      .line(format_args!(
        "SET_MOTION_6DOF_INITIAL_VELOCITY {} {} {} {}",
        motion_id, velocity.0, velocity.1, velocity.2
      ))
  );
  return Ok(());
}

/// Appends the command to set the initial angular velocity of a 6DOF
/// motion.
pub fn set_motion_6dof_initial_angular_velocity(
  script: &mut Script,
  motion_id: u32,
  angular_velocity: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Set initial angular velocity conditions for a 6DOF motion")
      .line(format_args!(
        "SET_MOTION_6DOF_INITIAL_ANGULAR_VELOCITY {} {} {} {}",
        motion_id, angular_velocity.0, angular_velocity.1, angular_velocity.2
      ))
  );
  return Ok(());
}

/// Which of the six body-frame velocity components a 6DOF motion leaves
/// free.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SixDofVariables {
  /// The U (body X velocity) component.
  pub u: Switch,
  /// The V (body Y velocity) component.
  pub v: Switch,
  /// The W (body Z velocity) component.
  pub w: Switch,
  /// The P (roll rate) component.
  pub p: Switch,
  /// The Q (pitch rate) component.
  pub q: Switch,
  /// The R (yaw rate) component.
  pub r: Switch
}

impl Default for SixDofVariables {
  fn default() -> Self {
    return Self {
      u: Switch::Disable,
      v: Switch::Disable,
      w: Switch::Disable,
      p: Switch::Disable,
      q: Switch::Disable,
      r: Switch::Disable
    };
  }
}

/// Appends the command to set the active variables of a 6DOF motion.
pub fn set_motion_6dof_active_variables(
  script: &mut Script,
  motion_id: u32,
  vars: &SixDofVariables
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Set the 6DOF motion active variables")
      .line(format_args!("SET_MOTION_6DOF_ACTIVE_VARIABLES {}", motion_id))
      .kv("U", vars.u)
      .kv("V", vars.v)
      .kv("W", vars.w)
      .kv("P", vars.p)
      .kv("Q", vars.q)
      .kv("R", vars.r)
  );
  return Ok(());
}

/// Appends the command that converts a 6DOF motion into a longitudinal
/// 3DOF one, with an option to include symmetry boundary loads.
pub fn set_6dof_motion_symmetry_loads(
  script: &mut Script,
  motion_id: u32,
  symmetry_loads: Switch
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Convert the 6DOF motion into a longitudinal 3DOF")
      .line(format_args!("SET_3DOF_MOTION {} {}", motion_id, symmetry_loads))
  );
  return Ok(());
}

/// Appends the command to create a new 6DOF external force applied at a
/// point over a time window.
pub fn create_new_6dof_external_force(
  script: &mut Script,
  motion_id: u32,
  position: (f64, f64, f64),
  t_start: f64,
  delta_t: f64,
  force: (f64, f64, f64)
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  validate::non_negative("t_start", t_start)?;
  validate::positive("delta_t", delta_t)?;
  script.append_block(
    Block::new("Create a new 6DOF motion external force")
      .line(format_args!(
        "CREATE_NEW_6DOF_EXTERNAL_FORCE {} {} {} {} {} {} {} {} {}",
        motion_id, position.0, position.1, position.2, t_start, delta_t,
        force.0, force.1, force.2
      ))
  );
  return Ok(());
}

token_enum!(
  /// Profile types for a custom 6DOF external force.
  CustomForceProfile,
  { "Force against time.", ForceVsTime, "FORCE_VS_TIME" },
  { "Force against distance.", ForceVsDistance, "FORCE_VS_DISTANCE" },
);

/// Appends the command to create a custom 6DOF external force driven by
/// a profile file.
pub fn create_new_6dof_custom_force(
  script: &mut Script,
  motion_id: u32,
  force_type: CustomForceProfile,
  filename: &Path
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Create a new 6DOF motion custom external force profile")
      .line(format_args!(
        "CREATE_NEW_6DOF_CUSTOM_FORCE {} {}", motion_id, force_type
      ))
      .line(filename.display())
  );
  return Ok(());
}

/// The geometry of a 6DOF spring force.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpringForce {
  /// Attachment point in the body frame.
  pub position: (f64, f64, f64),
  /// Normal vector of the spring axis.
  pub axis: (f64, f64, f64),
  /// Length of the uncompressed spring.
  pub free_length: f64,
  /// Fully-compressed spring length.
  pub solid_length: f64,
  /// Initial compressed length.
  pub initial_length: f64,
  /// Force per unit length, in N/m.
  pub spring_rate: f64
}

/// Appends the command to create a new 6DOF external spring force.
pub fn create_new_6dof_spring_force(
  script: &mut Script,
  motion_id: u32,
  spring: &SpringForce
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  validate::positive("free_length", spring.free_length)?;
  validate::positive("solid_length", spring.solid_length)?;
  validate::positive("initial_length", spring.initial_length)?;
  validate::positive("spring_rate", spring.spring_rate)?;
  script.append_block(
    Block::new("Create a new 6DOF motion external spring force")
      .line(format_args!(
        "CREATE_NEW_6DOF_SPRING_FORCE {} {} {} {} {} {} {} {} {} {} {}",
        motion_id,
        spring.position.0, spring.position.1, spring.position.2,
        spring.axis.0, spring.axis.1, spring.axis.2,
        spring.free_length, spring.solid_length, spring.initial_length,
        spring.spring_rate
      ))
  );
  return Ok(());
}

/// Appends the command to delete an existing 6DOF external force.
pub fn delete_6dof_external_force(
  script: &mut Script,
  motion_id: u32,
  force_id: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  validate::nonzero_index("force_id", force_id as i64)?;
  script.append_block(
    Block::new("Delete an existing 6DOF Motion external force")
      .line(format_args!(
        "DELETE_6DOF_EXTERNAL_FORCE {} {}", motion_id, force_id
      ))
  );
  return Ok(());
}

/// Appends the command to export the 6DOF trajectory tables of a motion
/// definition to a file.
pub fn export_6dof_trajectory(
  script: &mut Script,
  motion_id: u32,
  filename: &Path
) -> Result<(), MacroError> {
  validate::nonzero_index("motion_id", motion_id as i64)?;
  script.append_block(
    Block::new("Export 6DOF Motion trajectory tables to external file")
      .line(format_args!("EXPORT_6DOF_TRAJECTORY {}", motion_id))
      .line(filename.display())
  );
  return Ok(());
}
