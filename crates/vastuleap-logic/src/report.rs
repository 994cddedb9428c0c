//! Human-readable compliance lines and the render color map.
//!
//! Pure formatting over the classifier's verdicts; the renderer and the
//! textual report both read from here so their colors and wording agree.

use crate::classify::{classify, Compliance};
use crate::layout::CandidateLayout;
use crate::rules::{RuleTable, UnknownRoom};

/// Fill color for a placement's rectangle, keyed by verdict.
pub fn color_hex(compliance: Compliance) -> &'static str {
    match compliance {
        Compliance::Compliant => "#4CAF50",
        Compliance::Defect => "#F44336",
        Compliance::Neutral => "#2196F3",
    }
}

/// One report line per room, in the layout's room order.
pub fn report_lines(
    rules: &RuleTable,
    layout: &CandidateLayout,
) -> Result<Vec<String>, UnknownRoom> {
    let mut lines = Vec::with_capacity(layout.rooms.len());
    for p in &layout.rooms {
        let line = match classify(rules, p.room, p.zone)? {
            Compliance::Compliant => {
                format!("{}: placed compliantly in {}", p.room, p.zone)
            }
            Compliance::Defect => match rules.ideal_zone(p.room)? {
                Some(ideal) => {
                    format!("{}: defect detected, should be in {}", p.room, ideal)
                }
                None => format!("{}: defect detected in {}", p.room, p.zone),
            },
            Compliance::Neutral => {
                format!("{}: placed in {} (neutral zone)", p.room, p.zone)
            }
        };
        lines.push(line);
    }
    Ok(lines)
}
