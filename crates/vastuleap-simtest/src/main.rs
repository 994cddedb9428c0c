//! VastuLeap Headless Check Harness
//!
//! Validates the pure layout logic without any UI or canvas.
//! Runs entirely in-process — no session store, no rendering.
//!
//! Usage:
//!   cargo run -p vastuleap-simtest
//!   cargo run -p vastuleap-simtest -- --verbose
//!   cargo run -p vastuleap-simtest -- --json

use vastuleap_logic::classify::{classify, Compliance};
use vastuleap_logic::layout::{
    generate_plans, validate_request, Facing, PlanRequest, RequestError,
};
use vastuleap_logic::report::{color_hex, report_lines};
use vastuleap_logic::rooms::Room;
use vastuleap_logic::rules::RuleTable;
use vastuleap_logic::zones::Zone;

// ── Check harness ───────────────────────────────────────────────────────

struct CheckResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> CheckResult {
    CheckResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn request(width: f32, length: f32, facing: Facing, bedrooms: u8) -> PlanRequest {
    PlanRequest {
        plot_width: width,
        plot_length: length,
        facing,
        bedrooms,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let json = std::env::args().any(|a| a == "--json");
    let rules = RuleTable::default();

    if json {
        let plans = generate_plans(&rules, &request(30.0, 40.0, Facing::East, 3))
            .expect("default rule table covers every room");
        println!(
            "{}",
            serde_json::to_string_pretty(&plans).expect("layouts serialize")
        );
        return;
    }

    println!("=== VastuLeap Check Harness ===\n");

    let mut results = Vec::new();

    // 1. Rule table sanity
    results.extend(validate_rule_table(&rules));

    // 2. Layout structure across the input domain
    results.extend(validate_layout_structure(&rules));

    // 3. Concrete placement scenarios
    results.extend(validate_scenarios(&rules));

    // 4. Classification sweep
    results.extend(validate_classification(&rules));

    // 5. Report formatting
    results.extend(validate_report(&rules));

    // 6. Request domain checks
    results.extend(validate_request_domain());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Rule table ───────────────────────────────────────────────────────

fn validate_rule_table(rules: &RuleTable) -> Vec<CheckResult> {
    println!("--- Rule Table ---");
    let mut results = Vec::new();

    let missing: Vec<Room> = Room::ALL
        .into_iter()
        .filter(|&r| rules.spec(r).is_err())
        .collect();
    results.push(check(
        "rules_cover_all_rooms",
        missing.is_empty(),
        if missing.is_empty() {
            "all 7 rooms present".into()
        } else {
            format!("missing: {:?}", missing)
        },
    ));

    let bad_dims: Vec<Room> = Room::ALL
        .into_iter()
        .filter(|&r| {
            rules
                .min_dimensions(r)
                .map(|(w, l)| w <= 0.0 || l <= 0.0)
                .unwrap_or(true)
        })
        .collect();
    results.push(check(
        "rules_positive_dimensions",
        bad_dims.is_empty(),
        if bad_dims.is_empty() {
            "all minimum dimensions positive".into()
        } else {
            format!("non-positive: {:?}", bad_dims)
        },
    ));

    let prescribed = Room::ALL
        .into_iter()
        .filter(|&r| matches!(rules.ideal_zone(r), Ok(Some(_))))
        .count();
    results.push(check(
        "rules_four_prescribed_zones",
        prescribed == 4,
        format!("{} rooms carry an ideal zone", prescribed),
    ));

    results
}

// ── 2. Layout structure ─────────────────────────────────────────────────

fn validate_layout_structure(rules: &RuleTable) -> Vec<CheckResult> {
    println!("--- Layout Structure ---");
    let mut results = Vec::new();

    for bedrooms in [2u8, 3] {
        let expected = if bedrooms == 3 { 7 } else { 6 };
        let plans = match generate_plans(rules, &request(30.0, 40.0, Facing::East, bedrooms)) {
            Ok(p) => p,
            Err(e) => {
                results.push(check(
                    "generation_succeeds",
                    false,
                    format!("{} bedrooms: {}", bedrooms, e),
                ));
                continue;
            }
        };

        results.push(check(
            "two_layouts_fixed_titles",
            plans.len() == 2
                && plans[0].title == "Option 1: Traditional Layout"
                && plans[1].title == "Option 2: High Flexibility (Check for Dosha)",
            format!("{} bedrooms: {} layouts", bedrooms, plans.len()),
        ));

        let counts_ok = plans.iter().all(|p| p.rooms.len() == expected);
        results.push(check(
            "room_count_matches_bedrooms",
            counts_ok,
            format!(
                "{} bedrooms: {} and {} rooms",
                bedrooms,
                plans[0].rooms.len(),
                plans[1].rooms.len()
            ),
        ));

        let dims_match = plans[0].rooms.iter().all(|p| {
            plans[1]
                .rooms
                .iter()
                .any(|q| q.room == p.room && q.width == p.width && q.length == p.length)
        });
        results.push(check(
            "dimensions_identical_across_layouts",
            dims_match,
            format!("{} bedrooms", bedrooms),
        ));
    }

    // Boundary: minimal plot must not error even though rectangles overflow.
    let minimal = generate_plans(rules, &request(10.0, 10.0, Facing::South, 3));
    results.push(check(
        "minimal_plot_generates",
        minimal.as_ref().map(|p| p.len() == 2).unwrap_or(false),
        "10x10 plot, 3 bedrooms".into(),
    ));

    // Facing never changes placement (documented non-use).
    let east = generate_plans(rules, &request(30.0, 40.0, Facing::East, 3)).ok();
    let invariant = Facing::ALL.into_iter().all(|f| {
        generate_plans(rules, &request(30.0, 40.0, f, 3)).ok() == east
    });
    results.push(check(
        "facing_invariant",
        invariant,
        "all four facings yield identical plans".into(),
    ));

    results
}

// ── 3. Concrete scenarios ───────────────────────────────────────────────

fn validate_scenarios(rules: &RuleTable) -> Vec<CheckResult> {
    println!("--- Placement Scenarios ---");
    let mut results = Vec::new();

    let plans = match generate_plans(rules, &request(30.0, 40.0, Facing::East, 2)) {
        Ok(p) => p,
        Err(e) => {
            results.push(check("scenario_generation", false, e.to_string()));
            return results;
        }
    };

    let k1 = plans[0].rooms.iter().find(|p| p.room == Room::Kitchen);
    results.push(check(
        "traditional_kitchen_southeast",
        k1.map(|p| p.center_x == 22.5 && p.center_y == 10.0 && p.zone == Zone::Southeast)
            .unwrap_or(false),
        format!("{:?}", k1.map(|p| (p.center_x, p.center_y, p.zone))),
    ));

    let k2 = plans[1].rooms.iter().find(|p| p.room == Room::Kitchen);
    results.push(check(
        "flexibility_kitchen_marked_defect",
        k2.map(|p| p.center_x == 22.5 && p.center_y == 30.0 && p.zone == Zone::NortheastDefect)
            .unwrap_or(false),
        format!("{:?}", k2.map(|p| (p.center_x, p.center_y, p.zone))),
    ));

    let living = plans[0].rooms.iter().find(|p| p.room == Room::LivingRoom);
    results.push(check(
        "living_room_at_plot_center",
        living
            .map(|p| p.center_x == 15.0 && p.center_y == 20.0 && p.zone == Zone::CenterEast)
            .unwrap_or(false),
        format!("{:?}", living.map(|p| (p.center_x, p.center_y, p.zone))),
    ));

    results
}

// ── 4. Classification ───────────────────────────────────────────────────

fn validate_classification(rules: &RuleTable) -> Vec<CheckResult> {
    println!("--- Classification ---");
    let mut results = Vec::new();

    let plans = match generate_plans(rules, &request(30.0, 40.0, Facing::East, 3)) {
        Ok(p) => p,
        Err(e) => {
            results.push(check("classification_inputs", false, e.to_string()));
            return results;
        }
    };

    let mut unclassified = 0usize;
    let mut defects = Vec::new();
    for plan in &plans {
        for p in &plan.rooms {
            match classify(rules, p.room, p.zone) {
                Ok(Compliance::Defect) => defects.push((plan.title.clone(), p.room)),
                Ok(_) => {}
                Err(_) => unclassified += 1,
            }
        }
    }

    results.push(check(
        "every_placement_classified",
        unclassified == 0,
        format!("{} unclassified placements", unclassified),
    ));

    results.push(check(
        "single_intentional_defect",
        defects.len() == 1 && defects[0].1 == Room::Kitchen,
        format!("defects: {:?}", defects),
    ));

    let colors_distinct = {
        let c = [
            color_hex(Compliance::Compliant),
            color_hex(Compliance::Defect),
            color_hex(Compliance::Neutral),
        ];
        c[0] != c[1] && c[1] != c[2] && c[0] != c[2]
    };
    results.push(check(
        "verdict_colors_distinct",
        colors_distinct,
        "compliant/defect/neutral map to distinct colors".into(),
    ));

    results
}

// ── 5. Report formatting ────────────────────────────────────────────────

fn validate_report(rules: &RuleTable) -> Vec<CheckResult> {
    println!("--- Report ---");
    let mut results = Vec::new();

    let plans = match generate_plans(rules, &request(30.0, 40.0, Facing::East, 2)) {
        Ok(p) => p,
        Err(e) => {
            results.push(check("report_inputs", false, e.to_string()));
            return results;
        }
    };

    match report_lines(rules, &plans[1]) {
        Ok(lines) => {
            results.push(check(
                "one_line_per_room",
                lines.len() == plans[1].rooms.len(),
                format!("{} lines for {} rooms", lines.len(), plans[1].rooms.len()),
            ));
            let flagged = lines
                .iter()
                .filter(|l| l.contains("defect detected"))
                .count();
            results.push(check(
                "report_flags_the_kitchen",
                flagged == 1 && lines[1].starts_with("Kitchen"),
                format!("{} flagged lines", flagged),
            ));
        }
        Err(e) => results.push(check("report_lines", false, e.to_string())),
    }

    results
}

// ── 6. Request domain ───────────────────────────────────────────────────

fn validate_request_domain() -> Vec<CheckResult> {
    println!("--- Request Domain ---");
    let mut results = Vec::new();

    let ok = validate_request(&request(30.0, 40.0, Facing::East, 2));
    results.push(check(
        "valid_request_accepted",
        ok.is_empty(),
        format!("{} errors", ok.len()),
    ));

    let bad = validate_request(&request(5.0, 40.0, Facing::East, 5));
    let expected = bad.contains(&RequestError::PlotTooNarrow(5.0))
        && bad.contains(&RequestError::UnsupportedBedroomCount(5));
    results.push(check(
        "invalid_request_rejected",
        expected,
        format!("{:?}", bad),
    ));

    results
}
