use fda_config::FdaConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route commands that need loaded configuration.
pub async fn dispatch(
    command: Commands,
    config: &FdaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Fetch(args) => super::fetch::handle(&args, config, flags).await,
        Commands::Query(args) => super::query::handle(&args, flags),
        Commands::Schema(args) => super::schema::handle(&args, flags),
    }
}
