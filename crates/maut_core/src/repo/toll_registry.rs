//! Toll registry over a late-bound SQLite connection.
//!
//! # Responsibility
//! - Look up and update on-board unit status.
//! - Register and delete vehicles.
//! - Resolve toll collections to users and list toll sections by type.
//!
//! # Invariants
//! - The connection is borrowed, never opened or closed here.
//! - Operations fail with `StorageError::ConnectionNotSet` until
//!   `set_connection` has been called.
//! - Mutations touch at most one row by primary key and never verify the
//!   affected row count.

use crate::db::DbError;
use crate::model::toll_section::TollSection;
use crate::model::vehicle::{Vehicle, VehicleRegistration};
use crate::model::{OnBoardUnitId, TollCollectionId, UserId, VehicleId};
use chrono::Local;
use log::{debug, error};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const UNIT_STATUS_SQL: &str = "SELECT status FROM FAHRZEUGGERAT WHERE fzg_id = ?";

const USER_NUMBER_SQL: &str = "SELECT nutzer_id FROM MAUTERHEBUNG WHERE maut_id = ?";

const REGISTER_VEHICLE_SQL: &str = "INSERT INTO FAHRZEUG (
    fz_id,
    sskl_id,
    nutzer_id,
    kennzeichen,
    fin,
    achsen,
    gewicht,
    zulassungsland,
    anmeldedatum
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

const UPDATE_UNIT_STATUS_SQL: &str = "UPDATE FAHRZEUGGERAT SET status = ? WHERE fzg_id = ?";

const DELETE_VEHICLE_SQL: &str = "DELETE FROM FAHRZEUG WHERE fz_id = ?";

const TRACK_INFORMATIONS_SQL: &str = "SELECT
    abschnitts_id,
    laenge,
    start_koordinate,
    ziel_koordinate,
    name,
    abschnittstyp
FROM MAUTABSCHNITT
WHERE abschnittstyp = ?";

pub type StorageResult<T> = Result<T, StorageError>;

/// Single error type surfaced by every registry operation.
#[derive(Debug)]
pub enum StorageError {
    /// An operation ran before `set_connection`.
    ConnectionNotSet,
    /// The store rejected preparation, binding, execution or row decoding.
    Db(DbError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConnectionNotSet => write!(f, "connection not set"),
            Self::Db(_) => write!(f, "storage operation failed"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ConnectionNotSet => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// `laenge` read as an integer; REAL values are truncated toward zero.
struct SectionLength(i32);

impl FromSql for SectionLength {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(raw) => i32::try_from(raw)
                .map(Self)
                .map_err(|_| FromSqlError::OutOfRange(raw)),
            ValueRef::Real(raw) => {
                let truncated = raw.trunc();
                if truncated.is_finite()
                    && truncated >= f64::from(i32::MIN)
                    && truncated <= f64::from(i32::MAX)
                {
                    Ok(Self(truncated as i32))
                } else {
                    Err(FromSqlError::Other(
                        format!("section length {raw} does not fit an i32").into(),
                    ))
                }
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

/// Data-access contract of the toll management application.
pub trait TollRegistry {
    /// Returns the status code of an on-board unit, or `None` when unknown.
    fn status_for_on_board_unit(&self, unit_id: OnBoardUnitId) -> StorageResult<Option<String>>;
    /// Returns the user who incurred a toll collection, or `None` when unknown.
    fn user_number(&self, toll_id: TollCollectionId) -> StorageResult<Option<UserId>>;
    /// Inserts a vehicle dated today and returns the stored record.
    fn register_vehicle(&self, registration: &VehicleRegistration) -> StorageResult<Vehicle>;
    /// Overwrites the status of an on-board unit. Unknown ids are a no-op.
    fn update_on_board_unit_status(
        &self,
        unit_id: OnBoardUnitId,
        status: &str,
    ) -> StorageResult<()>;
    /// Deletes a vehicle. Unknown ids are a no-op.
    fn delete_vehicle(&self, vehicle_id: VehicleId) -> StorageResult<()>;
    /// Lists toll sections of one type in store order.
    fn track_informations(&self, section_type: &str) -> StorageResult<Vec<TollSection>>;
}

/// SQLite-backed toll registry.
///
/// Constructed without a connection; attach one with [`set_connection`]
/// before calling any [`TollRegistry`] operation. The borrow checker keeps
/// the connection alive for as long as the registry holds it.
///
/// [`set_connection`]: SqliteTollRegistry::set_connection
#[derive(Debug, Default)]
pub struct SqliteTollRegistry<'conn> {
    conn: Option<&'conn Connection>,
}

impl<'conn> SqliteTollRegistry<'conn> {
    /// Creates a registry with no connection attached.
    pub fn new() -> Self {
        Self { conn: None }
    }

    /// Attaches the connection used by subsequent operations.
    ///
    /// Calling this again replaces the previous handle; the old connection is
    /// left untouched.
    pub fn set_connection(&mut self, conn: &'conn Connection) {
        if self.conn.is_some() {
            debug!("event=set_connection module=repo status=ok replaced=true");
        }
        self.conn = Some(conn);
    }

    /// Returns whether a connection has been attached.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Runs one statement against the attached connection.
    ///
    /// This is the single translation boundary: missing connections and
    /// `rusqlite` failures both leave as `StorageError`, and both are logged
    /// with the operation name. Statements and cursors created by `run` are
    /// dropped before this returns.
    fn with_connection<T>(
        &self,
        operation: &'static str,
        run: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> StorageResult<T> {
        let Some(conn) = self.conn else {
            error!("event={operation} module=repo status=error error_code=connection_not_set");
            return Err(StorageError::ConnectionNotSet);
        };

        let started_at = Instant::now();
        match run(conn) {
            Ok(value) => {
                debug!(
                    "event={operation} module=repo status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(value)
            }
            Err(err) => {
                error!(
                    "event={operation} module=repo status=error duration_ms={} error_code=storage_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

impl TollRegistry for SqliteTollRegistry<'_> {
    fn status_for_on_board_unit(&self, unit_id: OnBoardUnitId) -> StorageResult<Option<String>> {
        self.with_connection("unit_status_get", |conn| {
            let mut stmt = conn.prepare(UNIT_STATUS_SQL)?;
            let mut rows = stmt.query([unit_id])?;
            match rows.next()? {
                Some(row) => row.get::<_, Option<String>>("status"),
                None => Ok(None),
            }
        })
    }

    fn user_number(&self, toll_id: TollCollectionId) -> StorageResult<Option<UserId>> {
        self.with_connection("user_number_get", |conn| {
            let mut stmt = conn.prepare(USER_NUMBER_SQL)?;
            let mut rows = stmt.query([toll_id])?;
            match rows.next()? {
                Some(row) => row.get::<_, Option<UserId>>("nutzer_id"),
                None => Ok(None),
            }
        })
    }

    fn register_vehicle(&self, registration: &VehicleRegistration) -> StorageResult<Vehicle> {
        let registered_on = Local::now().date_naive();
        self.with_connection("vehicle_register", |conn| {
            let mut stmt = conn.prepare(REGISTER_VEHICLE_SQL)?;
            stmt.execute(params![
                registration.vehicle_id,
                registration.speed_class_id,
                registration.user_id,
                registration.license_plate.as_str(),
                registration.fin.as_str(),
                registration.axles,
                registration.weight,
                registration.country_code.as_str(),
                registered_on,
            ])?;
            Ok(())
        })?;

        Ok(registration.clone().into_vehicle(registered_on))
    }

    fn update_on_board_unit_status(
        &self,
        unit_id: OnBoardUnitId,
        status: &str,
    ) -> StorageResult<()> {
        self.with_connection("unit_status_update", |conn| {
            let mut stmt = conn.prepare(UPDATE_UNIT_STATUS_SQL)?;
            stmt.execute(params![status, unit_id])?;
            Ok(())
        })
    }

    fn delete_vehicle(&self, vehicle_id: VehicleId) -> StorageResult<()> {
        self.with_connection("vehicle_delete", |conn| {
            let mut stmt = conn.prepare(DELETE_VEHICLE_SQL)?;
            stmt.execute([vehicle_id])?;
            Ok(())
        })
    }

    fn track_informations(&self, section_type: &str) -> StorageResult<Vec<TollSection>> {
        self.with_connection("track_informations_list", |conn| {
            let mut stmt = conn.prepare(TRACK_INFORMATIONS_SQL)?;
            let mut rows = stmt.query([section_type])?;
            let mut sections = Vec::new();
            while let Some(row) = rows.next()? {
                sections.push(TollSection {
                    section_id: row.get("abschnitts_id")?,
                    length: row.get::<_, SectionLength>("laenge")?.0,
                    start_coordinate: row.get("start_koordinate")?,
                    end_coordinate: row.get("ziel_koordinate")?,
                    name: row.get("name")?,
                    section_type: row.get("abschnittstyp")?,
                });
            }
            Ok(sections)
        })
    }
}
