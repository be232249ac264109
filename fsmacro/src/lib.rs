//! This library implements types and functions to generate macro scripts
//! for a proprietary aerodynamics simulation program. Each command builder
//! validates its arguments and appends one block of script text to an
//! explicitly-owned buffer; the buffer is then written to disk and handed
//! to the external executable by the runner.
//!
//! Nothing here interprets the generated text -- the grammar (keywords,
//! parameter order, enumerations) belongs to the external tool and is
//! merely mirrored by the builders.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::needless_return)] // i'll never forgive rust for this
#![allow(clippy::too_many_arguments)] // the grammar sets the arity, not us

pub mod acoustics;
pub mod actuators;
pub mod analysis;
pub mod base_region;
pub mod block;
pub mod boundary_layer;
pub mod cad;
pub mod csys;
pub mod errors;
pub mod exec_solver;
pub mod export_data;
pub mod freestream;
pub mod geometry;
pub mod inlets;
pub mod logs;
pub mod motion;
pub mod plots;
pub mod post_points;
pub mod post_streamlines;
pub mod post_surf;
pub mod post_volume;
pub mod runner;
pub mod scene;
pub mod script;
pub mod set_solver;
pub mod simulation;
pub mod solver;
pub mod tools;
pub mod types;
pub mod unite;
pub mod validate;
pub mod wake;
pub mod wrapper;

#[cfg(test)]
mod tests;

/// Imports the most relevant exports from the library.
pub mod prelude {
  pub use crate::acoustics::*;
  pub use crate::actuators::*;
  pub use crate::analysis::*;
  pub use crate::base_region::*;
  pub use crate::block::*;
  pub use crate::boundary_layer::*;
  pub use crate::cad::*;
  pub use crate::csys::*;
  pub use crate::errors::*;
  pub use crate::exec_solver::*;
  pub use crate::export_data::*;
  pub use crate::freestream::*;
  pub use crate::geometry::*;
  pub use crate::inlets::*;
  pub use crate::logs::*;
  pub use crate::motion::*;
  pub use crate::plots::*;
  pub use crate::post_points::*;
  pub use crate::post_streamlines::*;
  pub use crate::post_surf::*;
  pub use crate::post_volume::*;
  pub use crate::runner::*;
  pub use crate::scene::*;
  pub use crate::script::*;
  pub use crate::set_solver::*;
  pub use crate::simulation::*;
  pub use crate::solver::*;
  pub use crate::tools::*;
  pub use crate::types::*;
  pub use crate::unite::*;
  pub use crate::wake::*;
  pub use crate::wrapper::*;
}
