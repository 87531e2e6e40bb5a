use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, LeaveCmd};
use crate::config::Config;
use crate::core::leave::LeaveLogic;
use crate::errors::AppResult;
use crate::models::LeaveStatus;
use crate::utils::date::{self, parse_date_arg};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Leave { action } = cmd else {
        return Ok(());
    };

    match action {
        LeaveCmd::Add {
            student,
            from,
            to,
            reason,
        } => {
            let from = match from {
                Some(s) => parse_date_arg(s)?,
                None => date::today(),
            };
            let to = match to {
                Some(s) => parse_date_arg(s)?,
                None => date::today(),
            };
            let mut pool = open_pool(cfg)?;
            LeaveLogic::submit(&mut pool, *student, from, to, reason)?;
        }
        LeaveCmd::List { status } => {
            let status = status.as_deref().map(LeaveStatus::from_input).transpose()?;
            let mut pool = open_pool(cfg)?;
            LeaveLogic::list(&mut pool, status)?;
        }
        LeaveCmd::Approve { id } => {
            let mut pool = open_pool(cfg)?;
            LeaveLogic::set_status(&mut pool, *id, LeaveStatus::Approved)?;
        }
        LeaveCmd::Reject { id } => {
            let mut pool = open_pool(cfg)?;
            LeaveLogic::set_status(&mut pool, *id, LeaveStatus::Rejected)?;
        }
        LeaveCmd::Status { id, status } => {
            let status = LeaveStatus::from_input(status)?;
            let mut pool = open_pool(cfg)?;
            LeaveLogic::set_status(&mut pool, *id, status)?;
        }
    }

    Ok(())
}
