//! Data-access layer for toll (road-usage charging) management.
//! Vehicles, on-board units, toll collections and toll sections are reached
//! through one registry over a caller-owned SQLite connection.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::RegistryConfig;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, init_logging_from_config};
pub use model::toll_section::TollSection;
pub use model::vehicle::{Vehicle, VehicleRegistration};
pub use model::{OnBoardUnitId, SpeedClassId, TollCollectionId, UserId, VehicleId};
pub use repo::toll_registry::{SqliteTollRegistry, StorageError, StorageResult, TollRegistry};

/// Minimal health-check API for host wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
