//! Plan generation — anchor tables and the candidate layout builder.
//!
//! Each layout variant is declarative data: a static table of
//! `(room, fraction-x, fraction-y, assigned zone)` rows. The generator
//! iterates the table, anchoring every room's center at a fixed fraction
//! of the plot while taking its dimensions verbatim from the rule table.
//! Adding a layout variant is a data change, not a logic change.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rooms::Room;
use crate::rules::{RuleTable, UnknownRoom};
use crate::zones::Zone;

/// Smallest plot edge the input collector accepts, in feet.
pub const MIN_PLOT_DIMENSION: f32 = 10.0;

/// House facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    East,
    North,
    West,
    South,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::East, Facing::North, Facing::West, Facing::South];
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Facing::East => "East",
            Facing::North => "North",
            Facing::West => "West",
            Facing::South => "South",
        };
        f.write_str(label)
    }
}

/// One plan-generation request. Transient; nothing is retained between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Plot width in feet.
    pub plot_width: f32,
    /// Plot length in feet.
    pub plot_length: f32,
    /// Accepted for future directional variants; placement math does not
    /// currently read it.
    pub facing: Facing,
    /// Bedroom count, 2 or 3. Only 3 adds Bedroom 3 to the layouts.
    pub bedrooms: u8,
}

/// A placed room in one candidate layout. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPlacement {
    pub room: Room,
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub length: f32,
    pub zone: Zone,
}

/// One complete candidate layout. Room order is stable within a call and
/// drives downstream numbering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateLayout {
    pub title: String,
    pub rooms: Vec<RoomPlacement>,
}

/// One row of a layout's anchor table.
#[derive(Debug, Clone, Copy)]
pub struct Anchor {
    pub room: Room,
    /// Center as a fraction of plot width.
    pub fx: f32,
    /// Center as a fraction of plot length.
    pub fy: f32,
    /// Zone the layout assigns, which may deliberately miss the ideal.
    pub zone: Zone,
}

const fn anchor(room: Room, fx: f32, fy: f32, zone: Zone) -> Anchor {
    Anchor { room, fx, fy, zone }
}

const TRADITIONAL_ANCHORS: &[Anchor] = &[
    anchor(Room::MasterBedroom, 0.25, 0.25, Zone::Southwest),
    anchor(Room::Kitchen, 0.75, 0.25, Zone::Southeast),
    anchor(Room::PoojaRoom, 0.75, 0.75, Zone::Northeast),
    anchor(Room::Toilet, 0.25, 0.75, Zone::Northwest),
    anchor(Room::Bedroom2, 0.50, 0.75, Zone::North),
    anchor(Room::LivingRoom, 0.50, 0.50, Zone::CenterEast),
    anchor(Room::Bedroom3, 0.50, 0.25, Zone::South),
];

// Same footprint as the traditional layout except the kitchen swaps into
// the pooja corner, carrying the marked defect zone for the dosha check.
const FLEXIBILITY_ANCHORS: &[Anchor] = &[
    anchor(Room::MasterBedroom, 0.25, 0.25, Zone::Southwest),
    anchor(Room::Kitchen, 0.75, 0.75, Zone::NortheastDefect),
    anchor(Room::PoojaRoom, 0.75, 0.25, Zone::Southeast),
    anchor(Room::Toilet, 0.25, 0.75, Zone::Northwest),
    anchor(Room::Bedroom2, 0.50, 0.75, Zone::North),
    anchor(Room::LivingRoom, 0.50, 0.50, Zone::CenterEast),
    anchor(Room::Bedroom3, 0.50, 0.25, Zone::South),
];

/// The layout variants, generated in this order on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutKind {
    Traditional,
    Flexibility,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 2] = [LayoutKind::Traditional, LayoutKind::Flexibility];

    pub fn title(self) -> &'static str {
        match self {
            LayoutKind::Traditional => "Option 1: Traditional Layout",
            LayoutKind::Flexibility => "Option 2: High Flexibility (Check for Dosha)",
        }
    }

    pub fn anchors(self) -> &'static [Anchor] {
        match self {
            LayoutKind::Traditional => TRADITIONAL_ANCHORS,
            LayoutKind::Flexibility => FLEXIBILITY_ANCHORS,
        }
    }
}

/// Generate the two candidate layouts for a request.
///
/// Pure and deterministic; identical requests yield structurally identical
/// output. Room rectangles may extend past the plot edge on small plots
/// since dimensions come from the rule table, not the plot — accepted, the
/// center point always stays inside.
pub fn generate_plans(
    rules: &RuleTable,
    request: &PlanRequest,
) -> Result<Vec<CandidateLayout>, UnknownRoom> {
    LayoutKind::ALL
        .iter()
        .map(|&kind| build_layout(rules, request, kind))
        .collect()
}

fn build_layout(
    rules: &RuleTable,
    request: &PlanRequest,
    kind: LayoutKind,
) -> Result<CandidateLayout, UnknownRoom> {
    let mut rooms = Vec::with_capacity(kind.anchors().len());
    for a in kind.anchors() {
        if a.room == Room::Bedroom3 && request.bedrooms != 3 {
            continue;
        }
        let (width, length) = rules.min_dimensions(a.room)?;
        rooms.push(RoomPlacement {
            room: a.room,
            center_x: a.fx * request.plot_width,
            center_y: a.fy * request.plot_length,
            width,
            length,
            zone: a.zone,
        });
    }
    Ok(CandidateLayout {
        title: kind.title().to_string(),
        rooms,
    })
}

/// Request validation error, for the input-collection side.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Plot width below [`MIN_PLOT_DIMENSION`].
    PlotTooNarrow(f32),
    /// Plot length below [`MIN_PLOT_DIMENSION`].
    PlotTooShort(f32),
    /// Bedroom count outside {2, 3}.
    UnsupportedBedroomCount(u8),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::PlotTooNarrow(w) => {
                write!(f, "plot width {} ft below minimum {}", w, MIN_PLOT_DIMENSION)
            }
            RequestError::PlotTooShort(l) => {
                write!(f, "plot length {} ft below minimum {}", l, MIN_PLOT_DIMENSION)
            }
            RequestError::UnsupportedBedroomCount(n) => {
                write!(f, "unsupported bedroom count {}, expected 2 or 3", n)
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// Validate a request against the input collector's domain, returning all
/// errors found.
///
/// The generator itself never calls this: out-of-domain requests are the
/// collector's responsibility, and generator behavior on them is
/// unspecified.
pub fn validate_request(request: &PlanRequest) -> Vec<RequestError> {
    let mut errors = Vec::new();
    if request.plot_width < MIN_PLOT_DIMENSION {
        errors.push(RequestError::PlotTooNarrow(request.plot_width));
    }
    if request.plot_length < MIN_PLOT_DIMENSION {
        errors.push(RequestError::PlotTooShort(request.plot_length));
    }
    if request.bedrooms != 2 && request.bedrooms != 3 {
        errors.push(RequestError::UnsupportedBedroomCount(request.bedrooms));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(width: f32, length: f32, facing: Facing, bedrooms: u8) -> PlanRequest {
        PlanRequest {
            plot_width: width,
            plot_length: length,
            facing,
            bedrooms,
        }
    }

    #[test]
    fn always_two_layouts_in_fixed_order() {
        let rules = RuleTable::default();
        let plans = generate_plans(&rules, &request(30.0, 40.0, Facing::East, 2)).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].title, "Option 1: Traditional Layout");
        assert_eq!(plans[1].title, "Option 2: High Flexibility (Check for Dosha)");
    }

    #[test]
    fn two_bedrooms_places_six_rooms() {
        let rules = RuleTable::default();
        let plans = generate_plans(&rules, &request(30.0, 40.0, Facing::East, 2)).unwrap();
        for plan in &plans {
            assert_eq!(plan.rooms.len(), 6);
            assert!(!plan.rooms.iter().any(|p| p.room == Room::Bedroom3));
        }
    }

    #[test]
    fn three_bedrooms_adds_bedroom_3() {
        let rules = RuleTable::default();
        let plans = generate_plans(&rules, &request(30.0, 40.0, Facing::North, 3)).unwrap();
        for plan in &plans {
            assert_eq!(plan.rooms.len(), 7);
            let b3 = plan
                .rooms
                .iter()
                .find(|p| p.room == Room::Bedroom3)
                .unwrap();
            assert_eq!((b3.center_x, b3.center_y), (15.0, 10.0));
            assert_eq!(b3.zone, Zone::South);
        }
    }

    #[test]
    fn centers_anchor_to_plot_fractions() {
        let rules = RuleTable::default();
        let plans = generate_plans(&rules, &request(30.0, 40.0, Facing::East, 2)).unwrap();
        let kitchen = &plans[0].rooms[1];
        assert_eq!(kitchen.room, Room::Kitchen);
        assert_eq!((kitchen.center_x, kitchen.center_y), (22.5, 10.0));
        assert_eq!(kitchen.zone, Zone::Southeast);

        let kitchen2 = &plans[1].rooms[1];
        assert_eq!((kitchen2.center_x, kitchen2.center_y), (22.5, 30.0));
        assert_eq!(kitchen2.zone, Zone::NortheastDefect);
    }

    #[test]
    fn dimensions_come_from_the_rule_table_not_the_plot() {
        let rules = RuleTable::default();
        let small = generate_plans(&rules, &request(10.0, 10.0, Facing::South, 2)).unwrap();
        let large = generate_plans(&rules, &request(90.0, 120.0, Facing::South, 2)).unwrap();
        for (a, b) in small[0].rooms.iter().zip(&large[0].rooms) {
            assert_eq!(a.room, b.room);
            assert_eq!((a.width, a.length), (b.width, b.length));
        }
    }

    #[test]
    fn centers_stay_inside_the_plot() {
        let rules = RuleTable::default();
        let plans = generate_plans(&rules, &request(10.0, 10.0, Facing::West, 3)).unwrap();
        for plan in &plans {
            for p in &plan.rooms {
                assert!(p.center_x >= 0.0 && p.center_x <= 10.0);
                assert!(p.center_y >= 0.0 && p.center_y <= 10.0);
            }
        }
    }

    #[test]
    fn facing_direction_does_not_affect_placement() {
        // Documented non-use: facing is an accepted input and a future
        // extension point, but today every facing yields the same plans.
        let rules = RuleTable::default();
        let east = generate_plans(&rules, &request(30.0, 40.0, Facing::East, 3)).unwrap();
        for facing in Facing::ALL {
            let other = generate_plans(&rules, &request(30.0, 40.0, facing, 3)).unwrap();
            assert_eq!(east, other);
        }
    }

    #[test]
    fn generation_is_idempotent() {
        let rules = RuleTable::default();
        let req = request(30.0, 40.0, Facing::East, 2);
        assert_eq!(
            generate_plans(&rules, &req).unwrap(),
            generate_plans(&rules, &req).unwrap()
        );
    }

    #[test]
    fn layouts_share_room_sets_and_dimensions() {
        let rules = RuleTable::default();
        let plans = generate_plans(&rules, &request(25.0, 35.0, Facing::North, 3)).unwrap();
        let (first, second) = (&plans[0], &plans[1]);
        assert_eq!(first.rooms.len(), second.rooms.len());
        for p in &first.rooms {
            let q = second.rooms.iter().find(|q| q.room == p.room).unwrap();
            assert_eq!((p.width, p.length), (q.width, q.length));
        }
    }

    #[test]
    fn truncated_rule_table_surfaces_unknown_room() {
        let rules = RuleTable::new(vec![]);
        let err = generate_plans(&rules, &request(30.0, 40.0, Facing::East, 2)).unwrap_err();
        assert_eq!(err, UnknownRoom(Room::MasterBedroom));
    }

    #[test]
    fn validate_request_accepts_the_domain() {
        assert!(validate_request(&request(30.0, 40.0, Facing::East, 2)).is_empty());
        assert!(validate_request(&request(10.0, 10.0, Facing::South, 3)).is_empty());
    }

    #[test]
    fn validate_request_reports_every_violation() {
        let errors = validate_request(&request(5.0, 8.0, Facing::East, 4));
        assert_eq!(
            errors,
            vec![
                RequestError::PlotTooNarrow(5.0),
                RequestError::PlotTooShort(8.0),
                RequestError::UnsupportedBedroomCount(4),
            ]
        );
    }
}
