//! Data migrations for handling breaking changes across versions.
//!
//! Each migration is a one-time transformation that runs when upgrading from
//! an older version. Migrations are numbered sequentially and run in order.
//!
//! To add a new migration:
//! 1. Create a new module `vNNN_description.rs`
//! 2. Implement the migration function
//! 3. Add it to the `MIGRATIONS` array below

mod v001_versioned_store;

use anyhow::Result;
use std::fs;
use tracing::{debug, info};

const CURRENT_VERSION: u32 = 1;
const VERSION_FILE: &str = ".schema_version";

struct Migration {
    version: u32,
    name: &'static str,
    run: fn() -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "versioned_store",
    run: v001_versioned_store::run,
}];

/// Run all pending migrations. Call this early in app startup.
pub fn run_migrations() -> Result<()> {
    let current = get_current_version();
    debug!("Current schema version: {}", current);

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for migration in MIGRATIONS {
        if migration.version > current {
            info!(
                "Running migration v{:03}: {}",
                migration.version, migration.name
            );
            (migration.run)()?;
            set_version(migration.version)?;
        }
    }

    Ok(())
}

fn get_current_version() -> u32 {
    let Ok(dir) = crate::todo::get_app_dir() else {
        return 0;
    };
    let version_file = dir.join(VERSION_FILE);
    if let Ok(content) = fs::read_to_string(version_file) {
        if let Ok(version) = content.trim().parse::<u32>() {
            return version;
        }
    }
    0
}

fn set_version(version: u32) -> Result<()> {
    let dir = crate::todo::get_app_dir()?;
    let version_file = dir.join(VERSION_FILE);
    fs::write(version_file, version.to_string())?;
    debug!("Updated schema version to {}", version);
    Ok(())
}
