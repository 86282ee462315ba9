//! Generates NFS netlist files describing a row of identical blocks for
//! import into an ICT table.

pub use error::{NfsError, Result};

pub mod cli;
pub mod config;
pub mod error;
pub mod nfs;
pub mod paths;
pub mod plan;
pub mod validate;

use crate::config::BlockConfig;
use crate::plan::{execute_plan, generate_plan, ExecutePlanParams};
use crate::validate::RunParams;

/// Checks `config` and writes the NFS file at the path in `params`.
///
/// Returns the number of lines written. A configuration with mismatched
/// arrays is rejected before the output file is opened.
pub fn generate(params: &RunParams, config: &BlockConfig) -> Result<usize> {
    let plan = generate_plan(params.clone(), config.clone())?;
    execute_plan(ExecutePlanParams {
        plan: &plan,
        ctx: None,
    })
}
