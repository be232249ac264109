//! This module implements commands for the plots tab.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::token_enum;

token_enum!(
  /// The plot types selectable in the plots tab.
  PlotType,
  { "Lift coefficient along X.", ClAxisX, "CL_AXIS_X" },
  { "Lift coefficient along Y.", ClAxisY, "CL_AXIS_Y" },
  { "Lift coefficient along Z.", ClAxisZ, "CL_AXIS_Z" },
  { "Induced drag coefficient along X.", CdiAxisX, "CDI_AXIS_X" },
  { "Induced drag coefficient along Y.", CdiAxisY, "CDI_AXIS_Y" },
  { "Induced drag coefficient along Z.", CdiAxisZ, "CDI_AXIS_Z" },
  { "Side force coefficient along X.", CyAxisX, "CY_AXIS_X" },
  { "Side force coefficient along Y.", CyAxisY, "CY_AXIS_Y" },
  { "Side force coefficient along Z.", CyAxisZ, "CY_AXIS_Z" },
  { "X force along X.", ForceXAxisX, "FORCE_X_AXIS_X" },
  { "X force along Y.", ForceXAxisY, "FORCE_X_AXIS_Y" },
  { "X force along Z.", ForceXAxisZ, "FORCE_X_AXIS_Z" },
  { "Y force along X.", ForceYAxisX, "FORCE_Y_AXIS_X" },
  { "Y force along Y.", ForceYAxisY, "FORCE_Y_AXIS_Y" },
  { "Y force along Z.", ForceYAxisZ, "FORCE_Y_AXIS_Z" },
  { "Z force along X.", ForceZAxisX, "FORCE_Z_AXIS_X" },
  { "Z force along Y.", ForceZAxisY, "FORCE_Z_AXIS_Y" },
  { "Z force along Z.", ForceZAxisZ, "FORCE_Z_AXIS_Z" },
  { "Solver residuals.", Residuals, "RESIDUALS" },
  { "Aerodynamic loads.", Loads, "LOADS" },
  { "Sectional pressure coefficient.", SectionsCp, "SECTIONS_CP" },
  { "Sectional Mach number.", SectionsMach, "SECTIONS_MACH" },
  { "Unsteady solver plots.", Unsteady, "UNSTEADY" },
);

/// Appends the command to change the plot type.
pub fn set_plot_type(
  script: &mut Script,
  plot_type: PlotType
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Change the plot type")
      .line("SET_PLOT_TYPE")
      .line(plot_type)
  );
  return Ok(());
}

/// Appends the command to save the current plot to an external file.
pub fn save_plot_to_file(
  script: &mut Script,
  filename: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Save plot to an external file")
      .line("SAVE_PLOT_TO_FILE")
      .line(filename.display())
  );
  return Ok(());
}
