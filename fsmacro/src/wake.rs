//! This module implements wake physics conditions and trailing-edge
//! marking commands.

use std::path::Path;

use crate::block::{join_csv, Block};
use crate::errors::MacroError;
use crate::script::Script;
use crate::validate;

/// Appends the physics-conditions command. The auto-detection tools for
/// trailing edges and wake termination nodes are opt-in lines inside the
/// block; `end` closes it with the `END` marker.
pub fn physics(
  script: &mut Script,
  auto_trail_edges: bool,
  auto_wake_nodes: bool,
  end: bool
) -> Result<(), MacroError> {
  let mut block = Block::new("Set the physics conditions if needed")
    .line("PHYSICS");
  if auto_trail_edges {
    block = block.line("AUTO_TRAIL_EDGES");
  }
  if auto_wake_nodes {
    block = block.line("AUTO_WAKE_NODES");
  }
  if end {
    block = block.line("END");
  }
  script.append_block(block);
  return Ok(());
}

/// Appends the command to detect trailing edges on the given surfaces.
pub fn detect_trailing_edges_by_surface(
  script: &mut Script,
  surfaces: &[u32]
) -> Result<(), MacroError> {
  validate::not_empty("surfaces", surfaces.len())?;
  for s in surfaces.iter() {
    validate::nonzero_index("surfaces", *s as i64)?;
  }
  script.append_block(
    Block::new("Detect Trailing Edges by Surface")
      .line("DETECT_TRAILING_EDGES_BY_SURFACE")
      .kv("SURFACES", surfaces.len())
      .line(join_csv(surfaces))
  );
  return Ok(());
}

/// Appends the command to import custom trailing-edge markings from a CSV
/// text file. The file lists a vertex count, a length unit, and one
/// `index,X,Y,Z` vertex per line.
pub fn trailing_edges_import(
  script: &mut Script,
  file_path: &Path
) -> Result<(), MacroError> {
  let is_txt = file_path
    .extension()
    .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
  if !is_txt {
    return Err(MacroError::InvalidArgument(format!(
      "`file_path` should end with '.txt', got {}",
      file_path.display()
    )));
  }
  script.append_block(
    Block::new("Import custom trailing edge marking from file")
      .line("TRAILING_EDGES_IMPORT")
      .line(file_path.display())
  );
  return Ok(());
}

/// Appends the command to detect wake termination nodes on a surface.
pub fn detect_wake_termination_nodes_by_surface(
  script: &mut Script,
  surface_id: u32
) -> Result<(), MacroError> {
  validate::nonzero_index("surface_id", surface_id as i64)?;
  script.append_block(
    Block::new("Detect wake termination nodes by surface")
      .line(format_args!(
        "DETECT_WAKE_TERMINATION_NODES_BY_SURFACE {}", surface_id
      ))
  );
  return Ok(());
}
