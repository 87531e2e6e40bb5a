use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::AnalyticsLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        Commands::Dashboard => AnalyticsLogic::print_dashboard(&mut pool, cfg),
        Commands::Analytics => AnalyticsLogic::print_analytics(&mut pool, cfg),
        _ => Ok(()),
    }
}
