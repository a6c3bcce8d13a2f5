use fda_core::query;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FilterArgs;
use crate::output::output;

/// Handle `fdadash query`: validate and print the request without sending it.
pub fn handle(args: &FilterArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = args.to_filter();
    filter.validate()?;
    output(&query::build(&filter), flags.format)
}
