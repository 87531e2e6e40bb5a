use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        table,
        format,
        file,
        force,
    } = cmd
    {
        info(format!(
            "Exporting table '{}' as {}",
            table.as_str(),
            format.as_str()
        ));
        let mut pool = open_pool(cfg)?;
        ExportLogic::export(&mut pool, *table, *format, file, *force)?;
    }

    Ok(())
}
