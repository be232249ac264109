//! This module implements boundary-layer housekeeping commands.

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::validate;

/// Appends the command to delete an existing transition trip edge set.
pub fn delete_transition_trip(
  script: &mut Script,
  transition_trip_index: u32
) -> Result<(), MacroError> {
  validate::nonzero_index(
    "transition_trip_index",
    transition_trip_index as i64
  )?;
  script.append_block(
    Block::new("Delete an existing transition trip edge set")
      .line(format_args!("DELETE_TRANSITION_TRIP {}", transition_trip_index))
  );
  return Ok(());
}
