//! Zone codes — compass octants plus special markers.
//!
//! Zones are closed symbolic codes compared by exact match against a room's
//! prescribed ideal zone. The wire representation is the code string
//! (`"SE"`, `"Center/E"`, `"NE-DEFECT"`), matching what renderers label
//! rooms with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional zone assigned to a room placement.
///
/// The eight compass octants plus two special codes: `Center/E`, the
/// composite label used for the central living area, and `NE-DEFECT`, the
/// literal marker carried by the deliberately non-compliant kitchen
/// placement in the flexibility layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    Northeast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    Southeast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    Southwest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    Northwest,
    #[serde(rename = "Center/E")]
    CenterEast,
    #[serde(rename = "NE-DEFECT")]
    NortheastDefect,
}

impl Zone {
    /// The code string used on the wire and in report lines.
    pub fn code(self) -> &'static str {
        match self {
            Zone::North => "N",
            Zone::Northeast => "NE",
            Zone::East => "E",
            Zone::Southeast => "SE",
            Zone::South => "S",
            Zone::Southwest => "SW",
            Zone::West => "W",
            Zone::Northwest => "NW",
            Zone::CenterEast => "Center/E",
            Zone::NortheastDefect => "NE-DEFECT",
        }
    }

    /// True if the code carries an explicit defect marker.
    ///
    /// The marker is a labeling convenience for renderers; classification
    /// treats any zone that misses the prescribed ideal as a defect whether
    /// or not it is marked.
    pub fn is_defect_marker(self) -> bool {
        self.code().contains("DEFECT")
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
