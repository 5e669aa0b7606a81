use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod logger;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    logger::init(args.verbose);

    let Some(input) = args.input_or_help() else {
        return Ok(ExitStatus::Failure);
    };

    let result = run::run(&args, input)?;
    if args.verbose {
        report::print(&result);
    }

    Ok(ExitStatus::Success)
}
