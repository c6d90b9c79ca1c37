use clap::Args;
use std::path::PathBuf;
use visa_ai::error::AppError;
use visa_ai::reports::express_entry::{ExpressEntryReport, ImmigrationProfile, ProfileIntake};

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Path to a profile JSON document
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Emit compact JSON instead of pretty-printed output
    #[arg(long)]
    pub(crate) compact: bool,
}

/// Score a profile from disk and print the merged report to stdout, for
/// demos and spot-checking table changes without a running server.
pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.profile)?;
    let profile: ImmigrationProfile = serde_json::from_str(&raw)?;

    ProfileIntake.validate(&profile)?;
    let report = ExpressEntryReport::assemble(&profile)?;

    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");

    Ok(())
}
