use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, MedicalCmd};
use crate::config::Config;
use crate::core::medical::MedicalLogic;
use crate::errors::AppResult;
use crate::models::MedicalInfo;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Medical { action } = cmd else {
        return Ok(());
    };

    let mut pool = open_pool(cfg)?;

    match action {
        MedicalCmd::Set {
            student,
            blood_group,
            allergies,
            conditions,
            emergency_contact,
        } => {
            let info = MedicalInfo {
                student_id: *student,
                blood_group: blood_group.clone(),
                allergies: allergies.clone(),
                conditions: conditions.clone(),
                emergency_contact: emergency_contact.clone(),
            };
            MedicalLogic::save(&mut pool, &info)?;
        }
        MedicalCmd::Show { student } => {
            MedicalLogic::show(&mut pool, *student)?;
        }
    }

    Ok(())
}
