//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `mindvault_core` linkage without the UI shell.
//! - Print a deterministic dashboard summary for quick local sanity checks.
//!
//! Reads the store at `MINDVAULT_DB_PATH` when set, otherwise an empty
//! in-memory store.

use mindvault_core::{open_store, open_store_in_memory, DashboardService, KvStudyRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("mindvault_core ping={}", mindvault_core::ping());
    println!("mindvault_core version={}", mindvault_core::core_version());

    let opened = match std::env::var("MINDVAULT_DB_PATH") {
        Ok(path) if !path.trim().is_empty() => open_store(path.trim()),
        _ => open_store_in_memory(),
    };
    let mut store = match opened {
        Ok(store) => store,
        Err(err) => {
            eprintln!("store open failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    match DashboardService::new(KvStudyRepository::new(&mut store)).snapshot() {
        Ok(snapshot) => {
            let reviewed = snapshot.files.iter().filter(|file| file.is_reviewed()).count();
            println!("subjects={}", snapshot.subjects.join(","));
            println!(
                "files={} reviewed={} links={}",
                snapshot.files.len(),
                reviewed,
                snapshot.links.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("dashboard snapshot failed: {err}");
            ExitCode::FAILURE
        }
    }
}
