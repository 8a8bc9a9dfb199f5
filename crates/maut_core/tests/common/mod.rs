//! Shared fixtures for toll registry integration tests.

#![allow(dead_code)]

use maut_core::open_db_in_memory;
use rusqlite::{params, Connection};

/// Minimal shape of the toll schema the registry queries.
pub const TOLL_SCHEMA_SQL: &str = "
CREATE TABLE FAHRZEUG (
    fz_id INTEGER PRIMARY KEY,
    sskl_id INTEGER NOT NULL,
    nutzer_id INTEGER NOT NULL,
    kennzeichen TEXT NOT NULL,
    fin TEXT NOT NULL,
    achsen INTEGER NOT NULL,
    gewicht INTEGER NOT NULL,
    zulassungsland TEXT NOT NULL,
    anmeldedatum DATE NOT NULL,
    abmeldedatum DATE
);

CREATE TABLE FAHRZEUGGERAT (
    fzg_id INTEGER PRIMARY KEY,
    fz_id INTEGER,
    status TEXT,
    typ TEXT
);

CREATE TABLE MAUTERHEBUNG (
    maut_id INTEGER PRIMARY KEY,
    abschnitts_id INTEGER,
    fzg_id INTEGER,
    nutzer_id INTEGER,
    kosten REAL
);

CREATE TABLE MAUTABSCHNITT (
    abschnitts_id INTEGER PRIMARY KEY,
    laenge INTEGER NOT NULL,
    start_koordinate TEXT,
    ziel_koordinate TEXT,
    name TEXT,
    abschnittstyp TEXT NOT NULL
);
";

pub fn toll_db() -> Connection {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(TOLL_SCHEMA_SQL).unwrap();
    conn
}

pub fn insert_unit(conn: &Connection, fzg_id: i64, status: Option<&str>) {
    conn.execute(
        "INSERT INTO FAHRZEUGGERAT (fzg_id, status) VALUES (?1, ?2);",
        params![fzg_id, status],
    )
    .unwrap();
}

pub fn insert_toll(conn: &Connection, maut_id: i32, nutzer_id: Option<i32>) {
    conn.execute(
        "INSERT INTO MAUTERHEBUNG (maut_id, nutzer_id) VALUES (?1, ?2);",
        params![maut_id, nutzer_id],
    )
    .unwrap();
}

pub fn insert_section(conn: &Connection, id: i32, length: i32, name: &str, section_type: &str) {
    conn.execute(
        "INSERT INTO MAUTABSCHNITT (
            abschnitts_id, laenge, start_koordinate, ziel_koordinate, name, abschnittstyp
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        params![
            id,
            length,
            format!("{name}-start"),
            format!("{name}-ziel"),
            name,
            section_type
        ],
    )
    .unwrap();
}

pub fn vehicle_count(conn: &Connection, fz_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM FAHRZEUG WHERE fz_id = ?1;",
        [fz_id],
        |row| row.get(0),
    )
    .unwrap()
}
