//! Schema upgrades for the key-value table.
//!
//! # Invariants
//! - Steps are listed in ascending version order and never edited once shipped.
//! - The schema version lives in `PRAGMA user_version`; every pending step and
//!   its version bump commit together.

use crate::store::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

/// `(schema version, SQL that produces it)`.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_kv.sql"))];

/// Highest schema version this build can produce.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.iter().map(|(version, _)| *version).max().unwrap_or(0)
}

/// Brings the store schema up to `latest_version()`.
///
/// Refuses stores written by a newer build.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let db_version: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let latest_supported = latest_version();
    if db_version > latest_supported {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        });
    }

    let pending = SCHEMA_STEPS
        .iter()
        .filter(|(version, _)| *version > db_version)
        .collect::<Vec<_>>();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for &&(version, sql) in &pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!(
        "event=store_migrate module=store status=ok from_version={} to_version={} steps={}",
        db_version,
        latest_supported,
        pending.len()
    );
    Ok(())
}
