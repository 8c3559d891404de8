//! Tour timing probe for small widths.
//!
//! Builds the folded cube for n = 1..=3, searches with both turn rules, verifies
//! every tour found, and prints one line of counters per run.

use std::time::Instant;

use cubetour::api::{build_cube, search_tour, verify_tour, SearchCfg, SearchOutcome, TurnRule};

fn main() {
    for n in 1..=3 {
        let cube = build_cube(n).expect("cube builds");
        for rule in [TurnRule::AsGiven, TurnRule::FollowHeading] {
            let cfg = SearchCfg {
                turn_rule: rule,
                ..SearchCfg::default()
            };
            let t0 = Instant::now();
            let report = search_tour(&cube, cfg);
            let ms = t0.elapsed().as_secs_f64() * 1e3;
            if let SearchOutcome::Found(tour) = &report.outcome {
                verify_tour(&cube, &tour.cells, rule).expect("search returns valid tours");
            }
            println!(
                "n={n} rule={rule} outcome={} expanded={} max_stack={} time_ms={ms:.3}",
                report.outcome.label(),
                report.stats.expanded,
                report.stats.max_stack
            );
        }
    }
}
