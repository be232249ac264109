//! This module implements the Boolean-unite command for geometry bodies.
//! The unite itself is performed by an external CompGeom call, so the
//! command wants the path to that executable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::token_enum;
use crate::validate;

token_enum!(
  /// How a body's volume counts in a Boolean unite.
  VolumeType,
  { "The body adds material.", Positive, "POSITIVE" },
  { "The body removes material.", Negative, "NEGATIVE" },
);

/// Appends the command to Boolean-unite a selection of geometry bodies.
/// Pass an empty `bodies` slice with `all_bodies` set to unite everything;
/// otherwise each entry pairs a body index with its volume type.
pub fn boolean_unite_geometry(
  script: &mut Script,
  bodies: &[(u32, VolumeType)],
  all_bodies: bool,
  openvsp_path: &Path
) -> Result<(), MacroError> {
  if !all_bodies {
    validate::not_empty("bodies", bodies.len())?;
    for (index, _) in bodies.iter() {
      validate::nonzero_index("bodies", *index as i64)?;
    }
  }
  validate::existing_file(openvsp_path)?;
  let count: i64 = if all_bodies { -1 } else { bodies.len() as i64 };
  let mut block = Block::new("Boolean unite a selection of geometry bodies")
    .line("BOOLEAN_UNITE_GEOMETRY")
    .kv("BODIES", count);
  if !all_bodies {
    for (index, volume_type) in bodies.iter() {
      block = block.line(format_args!("{} {}", index, volume_type));
    }
  }
  block = block.kv("OPENVSP_PATH", openvsp_path.display());
  script.append_block(block);
  return Ok(());
}
