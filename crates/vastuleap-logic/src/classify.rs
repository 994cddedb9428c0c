//! Compliance classification for room placements.
//!
//! A single pure function consumed by both the renderer and the report
//! view, so the two can never disagree. Classification is total and
//! mutually exclusive: every placement is exactly one of compliant,
//! defect, or neutral.

use serde::{Deserialize, Serialize};

use crate::rooms::Room;
use crate::rules::{RuleTable, UnknownRoom};
use crate::zones::Zone;

/// Verdict for one room placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compliance {
    /// Assigned zone equals the prescribed ideal zone.
    Compliant,
    /// The room has a prescribed zone and the assignment misses it, or the
    /// assigned zone carries an explicit defect marker.
    Defect,
    /// Vastu prescribes no zone for this room; no judgment applies.
    Neutral,
}

/// Classify a placement's assigned zone against the rule table.
///
/// Fails with [`UnknownRoom`] when the room has no table entry at all,
/// rather than masking a table/generator mismatch as neutral.
pub fn classify(rules: &RuleTable, room: Room, zone: Zone) -> Result<Compliance, UnknownRoom> {
    let verdict = match rules.spec(room)?.ideal_zone {
        Some(ideal) if ideal == zone => Compliance::Compliant,
        Some(_) => Compliance::Defect,
        None if zone.is_defect_marker() => Compliance::Defect,
        None => Compliance::Neutral,
    };
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kitchen_in_southeast_is_compliant() {
        let rules = RuleTable::default();
        assert_eq!(
            classify(&rules, Room::Kitchen, Zone::Southeast),
            Ok(Compliance::Compliant)
        );
    }

    #[test]
    fn marked_zone_is_a_defect() {
        let rules = RuleTable::default();
        assert_eq!(
            classify(&rules, Room::Kitchen, Zone::NortheastDefect),
            Ok(Compliance::Defect)
        );
    }

    #[test]
    fn unmarked_mismatch_is_still_a_defect() {
        // The marker is display sugar; missing the ideal zone is enough.
        let rules = RuleTable::default();
        assert_eq!(
            classify(&rules, Room::Toilet, Zone::Southeast),
            Ok(Compliance::Defect)
        );
    }

    #[test]
    fn unconstrained_room_is_neutral() {
        let rules = RuleTable::default();
        assert_eq!(
            classify(&rules, Room::LivingRoom, Zone::CenterEast),
            Ok(Compliance::Neutral)
        );
        assert_eq!(
            classify(&rules, Room::Bedroom2, Zone::North),
            Ok(Compliance::Neutral)
        );
    }

    #[test]
    fn unconstrained_room_with_marker_is_a_defect() {
        let rules = RuleTable::default();
        assert_eq!(
            classify(&rules, Room::Bedroom2, Zone::NortheastDefect),
            Ok(Compliance::Defect)
        );
    }

    #[test]
    fn missing_table_entry_fails_instead_of_neutral() {
        let rules = RuleTable::new(vec![]);
        assert_eq!(
            classify(&rules, Room::Kitchen, Zone::Southeast),
            Err(UnknownRoom(Room::Kitchen))
        );
    }

    #[test]
    fn every_room_zone_pair_gets_exactly_one_verdict() {
        let rules = RuleTable::default();
        let zones = [
            Zone::North,
            Zone::Northeast,
            Zone::East,
            Zone::Southeast,
            Zone::South,
            Zone::Southwest,
            Zone::West,
            Zone::Northwest,
            Zone::CenterEast,
            Zone::NortheastDefect,
        ];
        for room in Room::ALL {
            for zone in zones {
                // Totality over the default table: never an error, and the
                // match in classify() makes the verdicts exclusive.
                classify(&rules, room, zone).unwrap();
            }
        }
    }
}
