//! Access functions for the `medical_info` table.

use crate::db::convert::text;
use crate::errors::AppResult;
use crate::models::MedicalInfo;
use rusqlite::{Connection, OptionalExtension, Row, params};

pub fn map_medical(row: &Row) -> rusqlite::Result<MedicalInfo> {
    Ok(MedicalInfo {
        student_id: row.get("student_id")?,
        blood_group: text(row, "blood_group")?,
        allergies: text(row, "allergies")?,
        conditions: text(row, "conditions")?,
        emergency_contact: text(row, "emergency_contact")?,
    })
}

/// Insert or fully replace the medical record of `info.student_id`.
/// Nothing of a previous record survives.
pub fn upsert_medical_info(conn: &Connection, info: &MedicalInfo) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO medical_info
            (student_id, blood_group, allergies, conditions, emergency_contact)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            info.student_id,
            info.blood_group,
            info.allergies,
            info.conditions,
            info.emergency_contact,
        ],
    )?;
    Ok(())
}

pub fn get_medical_info(conn: &Connection, student_id: i64) -> AppResult<Option<MedicalInfo>> {
    let info = conn
        .query_row(
            "SELECT student_id, blood_group, allergies, conditions, emergency_contact
             FROM medical_info WHERE student_id = ?1",
            [student_id],
            map_medical,
        )
        .optional()?;
    Ok(info)
}

pub fn list_medical_info(conn: &Connection) -> AppResult<Vec<MedicalInfo>> {
    let mut stmt = conn.prepare(
        "SELECT student_id, blood_group, allergies, conditions, emergency_contact
         FROM medical_info ORDER BY student_id ASC",
    )?;
    let rows = stmt.query_map([], map_medical)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
