//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `maut_core` linkage and print crate version.
//! - Optionally open a store and list toll sections of one type.
//!
//! Usage: `maut_cli [db_path] [section_type]`. `db_path` falls back to
//! `MAUT_DB_PATH`; logs are written only when `MAUT_LOG_DIR` is set.

use log::info;
use maut_core::{
    init_logging_from_config, open_db, RegistryConfig, SqliteTollRegistry, TollRegistry,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("maut_core ping={}", maut_core::ping());
    println!("maut_core version={}", maut_core::core_version());

    let mut args = std::env::args().skip(1);
    let mut config = RegistryConfig::from_env();
    if let Some(path) = args.next() {
        config.db_path = Some(PathBuf::from(path));
    }
    let section_type = args.next();

    match run(&config, section_type.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut cause = err.source();
            while let Some(inner) = cause {
                eprintln!("  caused by: {inner}");
                cause = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(
    config: &RegistryConfig,
    section_type: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    init_logging_from_config(config)?;

    let Some(db_path) = config.db_path.as_deref() else {
        return Ok(());
    };
    let conn = open_db(db_path)?;
    println!("db={} status=open", db_path.display());

    let Some(section_type) = section_type else {
        return Ok(());
    };
    let mut registry = SqliteTollRegistry::new();
    registry.set_connection(&conn);
    let sections = registry.track_informations(section_type)?;
    info!("event=cli_tracks module=cli status=ok count={}", sections.len());
    println!("section_type={section_type} sections={}", sections.len());
    for section in &sections {
        println!(
            "  {} {} length={}",
            section.section_id,
            section.name.as_deref().unwrap_or("-"),
            section.length
        );
    }
    Ok(())
}
