use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod entry;
pub mod export;
pub mod init;
pub mod leave;
pub mod medical;
pub mod student;

/// Open the configured database, creating any missing table first.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
