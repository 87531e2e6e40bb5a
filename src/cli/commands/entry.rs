use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, EntryCmd};
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::errors::AppResult;
use crate::utils::date::parse_optional_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Entry { action } = cmd else {
        return Ok(());
    };

    match action {
        EntryCmd::In { student, at } => {
            // parse before touching the database
            let at = parse_optional_datetime(at.as_ref())?;
            let mut pool = open_pool(cfg)?;
            EntryLogic::check_in(&mut pool, *student, at)?;
        }
        EntryCmd::Out { student, at } => {
            let at = parse_optional_datetime(at.as_ref())?;
            let mut pool = open_pool(cfg)?;
            EntryLogic::check_out(&mut pool, *student, at)?;
        }
        EntryCmd::Add {
            student,
            entry,
            exit,
            status,
        } => {
            let entry = parse_optional_datetime(entry.as_ref())?;
            let exit = parse_optional_datetime(exit.as_ref())?;
            let status = status.as_deref().unwrap_or(&cfg.default_entry_status);
            let mut pool = open_pool(cfg)?;
            EntryLogic::add(&mut pool, *student, entry, exit, status)?;
        }
        EntryCmd::List { student, open } => {
            let mut pool = open_pool(cfg)?;
            EntryLogic::list(&mut pool, *student, *open)?;
        }
    }

    Ok(())
}
