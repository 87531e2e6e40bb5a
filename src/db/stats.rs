use crate::db::initialize::TABLES;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

/// Row count of every hostel table, in schema order.
pub fn table_counts(conn: &Connection) -> rusqlite::Result<Vec<(&'static str, i64)>> {
    let mut out = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        // table names come from a fixed list, never from input
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        out.push((table, count));
    }
    Ok(out)
}

/// Run `PRAGMA integrity_check`; `Ok(None)` means the database is sound,
/// otherwise the first problem reported by SQLite is returned.
pub fn integrity_check(conn: &Connection) -> rusqlite::Result<Option<String>> {
    let result: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if result == "ok" {
        Ok(None)
    } else {
        Ok(Some(result))
    }
}

pub fn vacuum(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("VACUUM;")
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROWS PER TABLE
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for (table, count) in table_counts(&pool.conn)? {
        let colour = if count > 0 { GREEN } else { RED };
        println!("    {:<16} {}{}{}", table, colour, count, RESET);
    }

    println!();
    Ok(())
}
