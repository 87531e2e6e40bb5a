use crate::db::pool::DbPool;
use crate::db::{entry_logs, leave_requests, medical, students};
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, ExportTable};
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

impl ExportLogic {
    /// Dump a whole table to `file`. Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        table: ExportTable,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = &pool.conn;
        match table {
            ExportTable::Students => {
                let rows = students::list_students(conn)?;
                write_rows(&rows, format, path)?;
                Ok(rows.len())
            }
            ExportTable::Logs => {
                let rows = entry_logs::list_logs(conn)?;
                write_rows(&rows, format, path)?;
                Ok(rows.len())
            }
            ExportTable::Medical => {
                let rows = medical::list_medical_info(conn)?;
                write_rows(&rows, format, path)?;
                Ok(rows.len())
            }
            ExportTable::Leaves => {
                let rows = leave_requests::list_leave_requests(conn)?;
                write_rows(&rows, format, path)?;
                Ok(rows.len())
            }
        }
    }
}
