//! Records exchanged with the toll store.
//!
//! # Responsibility
//! - Define the Rust shapes of vehicles and toll sections.
//! - Name the key types shared by registry operations.
//!
//! # Invariants
//! - Field names are English snake_case; SQL column names stay in `repo`.

pub mod toll_section;
pub mod vehicle;

/// Primary key of `FAHRZEUG.fz_id`.
pub type VehicleId = i64;

/// Primary key of `FAHRZEUGGERAT.fzg_id`.
pub type OnBoardUnitId = i64;

/// Primary key of `MAUTERHEBUNG.maut_id`.
pub type TollCollectionId = i32;

/// User (`nutzer_id`) owning vehicles and incurring toll collections.
pub type UserId = i32;

/// Speed/emission class (`sskl_id`) a vehicle is charged under.
pub type SpeedClassId = i32;
