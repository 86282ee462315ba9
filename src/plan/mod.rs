use crate::cli::progress::StepContext;
use crate::config::BlockConfig;
use crate::error::Result;
use crate::nfs::NfsWriter;
use crate::validate::RunParams;

/// A checked generation run.
///
/// Holding a plan means the block configuration arrays are consistent and
/// the run parameters passed validation.
#[derive(Debug, Clone)]
pub struct NfsPlan {
    pub params: RunParams,
    pub config: BlockConfig,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TaskKey {
    GeneratePlan,
    WriteHeader,
    WriteNetlist,
}

pub struct ExecutePlanParams<'a> {
    pub plan: &'a NfsPlan,
    pub ctx: Option<&'a mut StepContext>,
}

pub fn generate_plan(params: RunParams, config: BlockConfig) -> Result<NfsPlan> {
    config.check()?;
    Ok(NfsPlan { params, config })
}

macro_rules! try_finish_task {
    ( $ctx:expr, $task:expr ) => {
        if let Some(ctx) = $ctx.as_mut() {
            ctx.finish($task);
        }
    };
}

/// Writes the planned NFS file and returns the number of lines written.
pub fn execute_plan(params: ExecutePlanParams) -> Result<usize> {
    let ExecutePlanParams { plan, mut ctx } = params;
    let NfsPlan { params, config } = plan;

    let mut writer = NfsWriter::to_file(params.filepath())?;

    writer.write_header(params, config)?;
    try_finish_task!(ctx, TaskKey::WriteHeader);

    writer.write_netlist(params, config)?;
    let lines = writer.lines();
    writer.finish()?;
    try_finish_task!(ctx, TaskKey::WriteNetlist);

    Ok(lines)
}
