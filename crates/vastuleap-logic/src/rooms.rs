//! The fixed set of placeable rooms.
//!
//! Both the generator's anchor tables and the rule table key off this enum,
//! so a mismatch between them is a compile error rather than a silent miss.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A placeable room. Serializes as its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    #[serde(rename = "Master Bedroom")]
    MasterBedroom,
    #[serde(rename = "Kitchen")]
    Kitchen,
    #[serde(rename = "Pooja Room")]
    PoojaRoom,
    #[serde(rename = "Toilet")]
    Toilet,
    #[serde(rename = "Bedroom 2")]
    Bedroom2,
    #[serde(rename = "Bedroom 3")]
    Bedroom3,
    #[serde(rename = "Living Room")]
    LivingRoom,
}

impl Room {
    /// Every room the generator can place, in no particular order.
    pub const ALL: [Room; 7] = [
        Room::MasterBedroom,
        Room::Kitchen,
        Room::PoojaRoom,
        Room::Toilet,
        Room::Bedroom2,
        Room::Bedroom3,
        Room::LivingRoom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Room::MasterBedroom => "Master Bedroom",
            Room::Kitchen => "Kitchen",
            Room::PoojaRoom => "Pooja Room",
            Room::Toilet => "Toilet",
            Room::Bedroom2 => "Bedroom 2",
            Room::Bedroom3 => "Bedroom 3",
            Room::LivingRoom => "Living Room",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
