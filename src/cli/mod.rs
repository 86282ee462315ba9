use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use crate::cli::args::{Args, ExitCodes};
use crate::cli::progress::StepContext;
use crate::config::{parse_block_config, BlockConfig};
use crate::error::{NfsError, USAGE};
use crate::plan::{execute_plan, generate_plan, ExecutePlanParams, TaskKey};
use crate::validate::validate_args;

pub mod args;
pub mod progress;

pub const BANNER: &str = r"
 ___ ____ _____ ____ _____ _   _
|_ _/ ___|_   _/ ___| ____| \ | |
 | | |     | || |  _|  _| |  \| |
 | | |___  | || |_| | |___| |\  |
|___\____| |_| \____|_____|_| \_|

";

pub const SUCCESS_MESSAGE: &str =
    "NFS file successfully created! Review contents before importing into ICT.";

/// Parses the command line, generates the NFS file, and maps the outcome to
/// an exit status.
pub fn run() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                if let Err(err) = e.print() {
                    log::warn!("failed to print argument error: {err}");
                }
                println!("{USAGE}");
                return ExitCode::from(ExitCodes::default().status(false));
            }
        },
    };

    let exit_codes = args.exit_codes;
    if exit_codes == ExitCodes::Legacy {
        log::debug!("using legacy exit statuses (1 = success, 0 = failure)");
    }

    match execute(args) {
        Ok(()) => {
            println!("{SUCCESS_MESSAGE}");
            ExitCode::from(exit_codes.status(true))
        }
        Err(e) => {
            report(&e);
            ExitCode::from(exit_codes.status(false))
        }
    }
}

fn execute(args: Args) -> anyhow::Result<()> {
    let params = validate_args(args.inputs.as_slice())?;

    let config = match &args.config {
        Some(path) => parse_block_config(path)?,
        None => BlockConfig::default(),
    };

    if !args.quiet {
        println!("{BANNER}");
        if let Some(path) = &args.config {
            println!("Configuration file: {:?}", path);
        } else {
            println!("Configuration file: (built-in)");
        }
        println!("Output file: {:?}\n", params.filepath());
        println!("NFS parameters:");
        println!(
            "\tBlocks: {}..={}",
            params.num_blocks_min(),
            params.num_blocks_max()
        );
        println!("\tNumber of blocks: {}", params.num_blocks());
        println!("\tHeader properties: {}", config.header_props.len());
        println!("\tPins per block: {}\n", config.netlist_pins.len());
    }

    let mut ctx = StepContext::new(args.quiet);

    let plan = ctx.check(generate_plan(params, config))?;
    ctx.finish(TaskKey::GeneratePlan);

    let res = execute_plan(ExecutePlanParams {
        plan: &plan,
        ctx: Some(&mut ctx),
    });
    let lines = ctx.check(res)?;
    log::info!("wrote {} lines to {:?}", lines, plan.params.filepath());

    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<NfsError>() {
        Some(e) => {
            println!("{} {}", "error:".red().bold(), e);
            if e.is_usage_error() {
                println!("{USAGE}");
            }
            log::debug!("{} error: {:?}", e.category(), e);
        }
        None => println!("{} {:#}", "error:".red().bold(), err),
    }
}
