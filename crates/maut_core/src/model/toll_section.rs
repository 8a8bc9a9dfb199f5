//! Toll section (track) metadata.

use serde::{Deserialize, Serialize};

/// One charged road segment from `MAUTABSCHNITT`.
///
/// Text columns other than `section_type` may be NULL in the store and are
/// surfaced as `None` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollSection {
    pub section_id: i32,
    pub length: i32,
    pub start_coordinate: Option<String>,
    pub end_coordinate: Option<String>,
    pub name: Option<String>,
    /// Free-form type code, e.g. distinguishing motorway from federal road.
    pub section_type: String,
}
