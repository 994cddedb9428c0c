//! Vastu rule table — prescribed zones and minimum room dimensions.
//!
//! Immutable reference data, built once at startup and passed by reference
//! into the generator and classifier. Rooms with no prescribed zone (the
//! living room and secondary bedrooms) still carry minimum dimensions; they
//! are classified neutral wherever they land.

use serde::{Deserialize, Serialize};

use crate::rooms::Room;
use crate::zones::Zone;

/// One rule table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub room: Room,
    /// Prescribed directional zone, or `None` when Vastu leaves the room
    /// unconstrained.
    pub ideal_zone: Option<Zone>,
    pub min_width: f32,
    pub min_length: f32,
}

/// A room lookup missed the rule table.
///
/// Never produced by the default table, which covers every [`Room`]; a
/// custom table that drops a room fails fast here instead of having the
/// missing room silently classified neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownRoom(pub Room);

impl std::fmt::Display for UnknownRoom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room '{}' is not present in the rule table", self.0)
    }
}

impl std::error::Error for UnknownRoom {}

/// Immutable collection of [`RoomSpec`]s.
///
/// Safe for unsynchronized concurrent reads; nothing mutates it after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    specs: Vec<RoomSpec>,
}

impl RuleTable {
    pub fn new(specs: Vec<RoomSpec>) -> Self {
        Self { specs }
    }

    pub fn spec(&self, room: Room) -> Result<&RoomSpec, UnknownRoom> {
        self.specs
            .iter()
            .find(|s| s.room == room)
            .ok_or(UnknownRoom(room))
    }

    /// Prescribed zone for a room, `None` when Vastu is silent on it.
    pub fn ideal_zone(&self, room: Room) -> Result<Option<Zone>, UnknownRoom> {
        Ok(self.spec(room)?.ideal_zone)
    }

    /// Minimum `(width, length)` for a room.
    pub fn min_dimensions(&self, room: Room) -> Result<(f32, f32), UnknownRoom> {
        let spec = self.spec(room)?;
        Ok((spec.min_width, spec.min_length))
    }
}

impl Default for RuleTable {
    /// The canonical table: fire in the southeast, stability in the
    /// southwest, the shrine in the northeast, wet areas in the northwest.
    fn default() -> Self {
        Self::new(vec![
            entry(Room::Kitchen, Some(Zone::Southeast), 10.0, 8.0),
            entry(Room::MasterBedroom, Some(Zone::Southwest), 12.0, 14.0),
            entry(Room::PoojaRoom, Some(Zone::Northeast), 6.0, 6.0),
            entry(Room::Toilet, Some(Zone::Northwest), 5.0, 7.0),
            entry(Room::Bedroom2, None, 10.0, 10.0),
            entry(Room::Bedroom3, None, 10.0, 10.0),
            entry(Room::LivingRoom, None, 15.0, 12.0),
        ])
    }
}

fn entry(room: Room, ideal_zone: Option<Zone>, min_width: f32, min_length: f32) -> RoomSpec {
    RoomSpec {
        room,
        ideal_zone,
        min_width,
        min_length,
    }
}
