//! This module implements actuator disc commands: propellers and jet
//! exhausts.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, Axis, Switch};
use crate::validate;

token_enum!(
  /// The actuator disc types.
  ActuatorType,
  { "A propeller disc.", Propeller, "PROPELLER" },
  { "A jet exhaust disc.", JetExhaust, "JET_EXHAUST" },
);

/// Appends the command to create a new actuator of the given type.
pub fn create_new_actuator(
  script: &mut Script,
  actuator_type: ActuatorType
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Create a new propeller actuator")
      .line("CREATE_NEW_ACTUATOR")
      .kv("TYPE", actuator_type)
  );
  return Ok(());
}

/// The type-specific tail of an actuator edit. Propeller fields and jet
/// fields cannot be mixed; each optional field is omitted from the block
/// when absent.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ActuatorModel {
  /// Propeller-specific fields.
  Propeller {
    /// Thrust coefficient.
    ct: Option<f64>,
    /// Rotation rate in RPM.
    rpm: Option<f64>,
    /// Swirl velocity toggle.
    swirl_velocity: Switch
  },
  /// Jet-exhaust-specific fields.
  JetExhaust {
    /// Exhaust velocity.
    velocity: Option<f64>,
    /// Exhaust jet density.
    density: Option<f64>,
    /// Jet spreading coefficient.
    cm: Option<f64>
  }
}

impl ActuatorModel {
  /// The grammar token for this model's actuator type.
  const fn type_token(&self) -> ActuatorType {
    return match self {
      ActuatorModel::Propeller { .. } => ActuatorType::Propeller,
      ActuatorModel::JetExhaust { .. } => ActuatorType::JetExhaust
    };
  }
}

/// Appends the command to edit an existing actuator: its placement and
/// its type-specific parameters.
pub fn edit_actuator(
  script: &mut Script,
  actuator: u32,
  name: &str,
  frame: u32,
  axis: Axis,
  offset: f64,
  radius: f64,
  model: &ActuatorModel
) -> Result<(), MacroError> {
  validate::nonzero_index("actuator", actuator as i64)?;
  validate::nonzero_index("frame", frame as i64)?;
  validate::positive("radius", radius)?;
  let mut block = Block::new("Edit a propeller actuator here")
    .line("EDIT_ACTUATOR")
    .kv("ACTUATOR", actuator)
    .kv("NAME", name)
    .kv("TYPE", model.type_token())
    .kv("FRAME", frame)
    .kv("AXIS", axis)
    .kv("OFFSET", offset)
    .kv("RADIUS", radius);
  match model {
    ActuatorModel::Propeller { ct, rpm, swirl_velocity } => {
      if let Some(ct) = ct {
        block = block.kv("CT", ct);
      }
      if let Some(rpm) = rpm {
        block = block.kv("RPM", rpm);
      }
      block = block.kv("SWIRL_VELOCITY", swirl_velocity);
    },
    ActuatorModel::JetExhaust { velocity, density, cm } => {
      if let Some(velocity) = velocity {
        block = block.kv("VELOCITY", velocity);
      }
      if let Some(density) = density {
        block = block.kv("DENSITY", density);
      }
      if let Some(cm) = cm {
        block = block.kv("CM", cm);
      }
    }
  }
  script.append_block(block);
  return Ok(());
}

/// Appends the command to set the RPM of an existing propeller actuator.
pub fn set_prop_actuator_rpm(
  script: &mut Script,
  actuator_index: u32,
  rpm: f64
) -> Result<(), MacroError> {
  validate::nonzero_index("actuator_index", actuator_index as i64)?;
  script.append_block(
    Block::new("Set the RPM of an existing actuator")
      .line(format_args!("SET_PROP_ACTUATOR_RPM {} {}", actuator_index, rpm))
  );
  return Ok(());
}

token_enum!(
  /// Units for an actuator's thrust setting.
  ThrustType,
  { "Non-dimensional thrust coefficient.", Coefficient, "COEFFICIENT" },
  { "Thrust force in newtons.", Newtons, "NEWTONS" },
  { "Thrust force in pounds.", Pounds, "POUNDS" },
);

/// Appends the command to set the thrust of an existing propeller
/// actuator.
pub fn set_prop_actuator_thrust(
  script: &mut Script,
  actuator_index: u32,
  ct: f64,
  thrust_type: ThrustType
) -> Result<(), MacroError> {
  validate::nonzero_index("actuator_index", actuator_index as i64)?;
  validate::positive("ct", ct)?;
  script.append_block(
    Block::new("Set the thrust coefficient of an existing actuator")
      .line(format_args!(
        "SET_PROP_ACTUATOR_THRUST {} {} {}", actuator_index, ct, thrust_type
      ))
  );
  return Ok(());
}

/// Appends the command to toggle the swirl velocity of an existing
/// propeller actuator.
pub fn set_prop_actuator_swirl(
  script: &mut Script,
  actuator_index: u32,
  status: Switch
) -> Result<(), MacroError> {
  validate::nonzero_index("actuator_index", actuator_index as i64)?;
  script.append_block(
    Block::new("Toggle the swirl velocity selection")
      .line(format_args!(
        "SET_PROP_ACTUATOR_SWIRL {} {}", actuator_index, status
      ))
  );
  return Ok(());
}

/// Appends the command to enable an existing actuator.
pub fn enable_actuator(
  script: &mut Script,
  actuator_id: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("actuator_id", actuator_id as i64)?;
  script.append_block(
    Block::new("Enable an existing actuator")
      .line(format_args!("ENABLE_ACTUATOR {}", actuator_id))
  );
  return Ok(());
}

/// Appends the command to disable an existing actuator.
pub fn disable_actuator(
  script: &mut Script,
  actuator_id: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("actuator_id", actuator_id as i64)?;
  script.append_block(
    Block::new("Disable an existing actuator")
      .line(format_args!("DISABLE_ACTUATOR {}", actuator_id))
  );
  return Ok(());
}

/// Appends the command to delete an existing actuator.
pub fn delete_actuator(
  script: &mut Script,
  actuator_index: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("actuator_index", actuator_index as i64)?;
  script.append_block(
    Block::new("Delete an actuator")
      .line("DELETE_ACTUATOR")
      .kv("ACTUATOR", actuator_index)
  );
  return Ok(());
}
