//! This module implements inlet boundary commands.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::token_enum;
use crate::validate;

/// How a new inlet's velocity is specified. Type 1 gives the three
/// velocity components; type 2 gives a surface-normal velocity magnitude.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum InletVelocity {
  /// Component-wise velocity (grammar TYPE=1).
  Components {
    /// X component.
    vx: f64,
    /// Y component.
    vy: f64,
    /// Z component.
    vz: f64
  },
  /// Surface-normal velocity magnitude (grammar TYPE=2).
  Normal {
    /// Velocity magnitude.
    velocity: f64
  }
}

/// Appends the command to mark a boundary surface as an inlet.
pub fn create_new_inlet(
  script: &mut Script,
  surface_id: u32,
  velocity: InletVelocity
) -> Result<(), MacroError> {
  validate::nonzero_index("surface_id", surface_id as i64)?;
  let block = match velocity {
    InletVelocity::Components { vx, vy, vz } => {
      Block::new("Create a new inlet boundary (TYPE=1)")
        .line(format_args!(
          "CREATE_NEW_INLET {} 1 {} {} {}", surface_id, vx, vy, vz
        ))
    },
    InletVelocity::Normal { velocity } => {
      Block::new("Create a new inlet boundary (TYPE=2)")
        .line(format_args!("CREATE_NEW_INLET {} 2 {}", surface_id, velocity))
    }
  };
  script.append_block(block);
  return Ok(());
}

/// Appends the command to upload a custom inlet velocity profile from an
/// external file. The file must exist at call time.
pub fn set_inlet_custom_profile(
  script: &mut Script,
  inlet_id: u32,
  filename: &Path
) -> Result<(), MacroError> {
  validate::nonzero_index("inlet_id", inlet_id as i64)?;
  validate::existing_file(filename)?;
  script.append_block(
    Block::new("Upload custom velocity inlet profile from external file")
      .line("SET_INLET_CUSTOM_PROFILE")
      .line(inlet_id)
      .line(filename.display())
  );
  return Ok(());
}

token_enum!(
  /// Growth schemes for radial inlet meshing.
  GrowthScheme,
  { "Successive growth.", Successive, "1" },
  { "Dual-side growth.", DualSide, "2" },
);

/// Appends the command to radially re-mesh an existing inlet boundary.
pub fn remesh_inlet(
  script: &mut Script,
  inlet: u32,
  inner_radius: f64,
  elements: u32,
  growth_scheme: GrowthScheme,
  growth_rate: f64
) -> Result<(), MacroError> {
  validate::nonzero_index("inlet", inlet as i64)?;
  validate::non_negative("inner_radius", inner_radius)?;
  validate::nonzero_index("elements", elements as i64)?;
  validate::positive("growth_rate", growth_rate)?;
  script.append_block(
    Block::new("Radial mesh an existing inlet boundary")
      .line("REMESH_INLET")
      .kv("INLET", inlet)
      .kv("INNER_RADIUS", inner_radius)
      .kv("ELEMENTS", elements)
      .kv("GROWTH_SCHEME", growth_scheme)
      .kv("GROWTH_RATE", growth_rate)
  );
  return Ok(());
}

/// Appends the command to delete an existing inlet boundary.
pub fn delete_inlet(
  script: &mut Script,
  inlet: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("inlet", inlet as i64)?;
  script.append_block(
    Block::new("Delete an existing inlet boundary")
      .line("DELETE_INLET")
      .kv("INLET", inlet)
  );
  return Ok(());
}
