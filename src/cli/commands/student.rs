use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, StudentCmd};
use crate::config::Config;
use crate::core::students::StudentLogic;
use crate::errors::AppResult;
use crate::models::{NewStudent, StudentUpdate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Student { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;

    match action {
        StudentCmd::Add {
            name,
            dept,
            year,
            contact,
            guardian,
            guardian_contact,
            room_no,
        } => {
            let student = NewStudent {
                name: name.clone(),
                dept: dept.clone(),
                year: *year,
                contact: contact.clone(),
                guardian: guardian.clone(),
                guardian_contact: guardian_contact.clone(),
                room_no: room_no.clone(),
            };
            StudentLogic::add(&mut pool, &student)?;
        }
        StudentCmd::List => StudentLogic::list(&mut pool)?,
        StudentCmd::Update {
            id,
            name,
            dept,
            year,
            contact,
            guardian,
            guardian_contact,
            room_no,
        } => {
            let upd = StudentUpdate {
                name: name.clone(),
                dept: dept.clone(),
                year: *year,
                contact: contact.clone(),
                guardian: guardian.clone(),
                guardian_contact: guardian_contact.clone(),
                room_no: room_no.clone(),
            };
            StudentLogic::update(&mut pool, *id, &upd)?;
        }
        StudentCmd::Delete { id, yes } => {
            StudentLogic::delete(&mut pool, *id, *yes)?;
        }
    }

    Ok(())
}
