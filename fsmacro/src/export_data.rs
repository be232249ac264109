//! This module implements the solver-analysis data exports.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::errors::MacroError;
use crate::script::Script;
use crate::types::{token_enum, BoundaryList, Switch};
use crate::validate;

/// Runs the shared boundary-list checks for exports.
fn check_boundaries(boundaries: &BoundaryList) -> Result<(), MacroError> {
  if let BoundaryList::Listed(ref list) = boundaries {
    validate::not_empty("boundaries", list.len())?;
    for b in list.iter() {
      validate::nonzero_index("boundaries", *b as i64)?;
    }
  }
  return Ok(());
}

/// Appends the command to export the aerodynamic results spreadsheet.
pub fn export_solver_analysis_spreadsheet(
  script: &mut Script,
  output_file: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export the aerodynamic results")
      .line("EXPORT_SOLVER_ANALYSIS_SPREADSHEET")
      .line(output_file.display())
  );
  return Ok(());
}

/// Appends the command to export Tecplot data for all initialized
/// boundaries.
pub fn export_solver_analysis_tecplot(
  script: &mut Script,
  output_file: &Path
) -> Result<(), MacroError> {
  script.append_block(
    Block::new("Export the Tecplot data file")
      .line("EXPORT_SOLVER_ANALYSIS_TECPLOT")
      .line(output_file.display())
  );
  return Ok(());
}

/// Appends the command to export a Visualization Toolkit file for the
/// given boundaries. This one takes its lines without a banner.
pub fn export_solver_analysis_vtk(
  script: &mut Script,
  output_filepath: &Path,
  boundaries: &BoundaryList
) -> Result<(), MacroError> {
  check_boundaries(boundaries)?;
  let mut block = Block::new("Export the Visualization Toolkit data file")
    .line("EXPORT_SOLVER_ANALYSIS_VTK")
    .line(output_filepath.display())
    .kv("SURFACES", boundaries.count());
  for b in boundaries.indices() {
    block = block.line(b);
  }
  script.append_block(block);
  return Ok(());
}

/// Which variables a VTK export carries.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VtkVariables {
  /// Every variable the solver can export.
  All,
  /// An explicit list of variable names (e.g. `X`, `CP`, `PSTATIC`).
  Listed(Vec<String>)
}

/// Appends the command to set the variables exported into VTK files,
/// with a toggle for wake filament export.
pub fn set_vtk_export_variables(
  script: &mut Script,
  variables: &VtkVariables,
  export_wake: Switch
) -> Result<(), MacroError> {
  let count: i64 = match variables {
    VtkVariables::All => -1,
    VtkVariables::Listed(v) => {
      validate::not_empty("variables", v.len())?;
      v.len() as i64
    }
  };
  let mut block = Block::new("Set the VTK export variables")
    .line("SET_VTK_EXPORT_VARIABLES")
    .line(format_args!("{} {}", count, export_wake));
  if let VtkVariables::Listed(ref v) = variables {
    for name in v.iter() {
      block = block.line(name);
    }
  }
  script.append_block(block);
  return Ok(());
}

token_enum!(
  /// Data formats for the FEM CSV export.
  CsvExportFormat,
  {
    "Pressure coefficient against the freestream velocity.",
    CpFreestream,
    "CP-FREESTREAM"
  },
  {
    "Pressure coefficient against the reference velocity.",
    CpReference,
    "CP-REFERENCE"
  },
  { "Static pressure.", Pressure, "PRESSURE" },
  {
    "Pressure difference against the static pressure.",
    DifferencePressure,
    "DIFFERENCE-PRESSURE"
  },
);

token_enum!(
  /// Pressure units for the FEM CSV export.
  PressureUnit,
  { "Pascals.", Pascals, "PASCALS" },
  { "Megapascals.", Megapascals, "MEGAPASCALS" },
  { "Bar.", Bar, "BAR" },
  { "Standard atmospheres.", Atmospheres, "ATMOSPHERES" },
  { "Pounds per square inch.", Psi, "PSI" },
);

/// Appends the command to export the FEM CSV file for the given
/// boundaries.
pub fn export_solver_analysis_csv(
  script: &mut Script,
  file_path: &Path,
  format: CsvExportFormat,
  units: PressureUnit,
  boundaries: &BoundaryList
) -> Result<(), MacroError> {
  check_boundaries(boundaries)?;
  let mut block = Block::new("Export the FEM CSV based on solver results")
    .line("EXPORT_SOLVER_ANALYSIS_CSV")
    .line(file_path.display())
    .kv("FORMAT", format)
    .kv("UNITS", units)
    .kv("SURFACES", boundaries.count());
  for b in boundaries.indices() {
    block = block.line(b);
  }
  script.append_block(block);
  return Ok(());
}

/// Appends the command to export the NASTRAN PLOAD BDF file for the
/// given boundaries.
pub fn export_solver_analysis_pload_bdf(
  script: &mut Script,
  file_path: &Path,
  boundaries: &BoundaryList
) -> Result<(), MacroError> {
  check_boundaries(boundaries)?;
  let mut block = Block::new(
    "Export the NASTRAN PLOAD BDF based on solver results"
  )
    .line("EXPORT_SOLVER_ANALYSIS_PLOAD_BDF")
    .line(file_path.display())
    .kv("SURFACES", boundaries.count());
  for b in boundaries.indices() {
    block = block.line(b);
  }
  script.append_block(block);
  return Ok(());
}

/// Appends the command to export the force distribution vectors for the
/// given boundaries.
pub fn export_solver_analysis_force_distributions(
  script: &mut Script,
  output_filepath: &Path,
  boundaries: &BoundaryList
) -> Result<(), MacroError> {
  check_boundaries(boundaries)?;
  let mut block = Block::new(
    "Export force distributions file for the selected boundaries"
  )
    .line("EXPORT_SOLVER_ANALYSIS_FORCE_DISTRIBUTIONS")
    .line(output_filepath.display())
    .kv("SURFACES", boundaries.count());
  for b in boundaries.indices() {
    block = block.line(b);
  }
  script.append_block(block);
  return Ok(());
}
