//! Exhaustive depth-first tour search over an explicit branch stack.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::cube::{build_cube, CellId, Cube, CubeError};

use super::knight::move_table;
use super::types::{Branch, SearchCfg, SearchOutcome, SearchReport, SearchStats, Tour};

/// Search `cube` for a tour starting at cell `(0,0,0)`.
///
/// Branches are popped last-in-first-out. A branch is accepted once its path covers
/// every cell and, for even widths, one knight move from the last cell lands back on
/// the start.
pub fn search_tour(cube: &Cube, cfg: SearchCfg) -> SearchReport {
    TourSearch::new(cube, cfg).run()
}

/// Convenience: build the cube for `width` and search with default settings.
pub fn solve(width: usize) -> Result<SearchReport, CubeError> {
    let cube = build_cube(width)?;
    Ok(search_tour(&cube, SearchCfg::default()))
}

/// Whether a path of `len` cells ending with knight destinations `dests` is a tour.
///
/// The path must cover all `total` cells; when `must_close` is set one of `dests`
/// must also be the start.
pub(crate) fn accepts(
    len: usize,
    total: usize,
    must_close: bool,
    dests: &[CellId; 8],
    start: CellId,
) -> bool {
    len == total && (!must_close || dests.contains(&start))
}

/// Search runner carrying the move table and counters.
struct TourSearch<'a> {
    cube: &'a Cube,
    cfg: SearchCfg,
    moves: Vec<[CellId; 8]>,
    rng: Option<StdRng>,
    stats: SearchStats,
}

impl<'a> TourSearch<'a> {
    fn new(cube: &'a Cube, cfg: SearchCfg) -> Self {
        Self {
            cube,
            cfg,
            moves: move_table(cube, cfg.turn_rule),
            rng: cfg.shuffle_seed.map(StdRng::seed_from_u64),
            stats: SearchStats::default(),
        }
    }

    fn run(mut self) -> SearchReport {
        let total = self.cube.len();
        let start = self.cube.origin();
        let must_close = self.cube.width() % 2 == 0;
        tracing::debug!(
            width = self.cube.width(),
            cells = total,
            turn_rule = %self.cfg.turn_rule,
            max_branches = ?self.cfg.max_branches,
            shuffle_seed = ?self.cfg.shuffle_seed,
            "tour search start"
        );

        let mut stack = vec![Branch::root(start, total)];
        self.stats.pushed = 1;
        self.stats.max_stack = 1;
        while let Some(mut branch) = stack.pop() {
            if let Some(max) = self.cfg.max_branches {
                if self.stats.expanded >= max {
                    return self.finish(SearchOutcome::BudgetReached);
                }
            }
            self.stats.expanded += 1;
            branch.enter();

            let dests = self.moves[branch.cell.0];
            if accepts(branch.path.len(), total, must_close, &dests, start) {
                return self.finish(SearchOutcome::Found(Tour { cells: branch.path }));
            }

            for next in self.candidates(&dests) {
                if !branch.visited[next.0] {
                    stack.push(branch.child(next));
                    self.stats.pushed += 1;
                }
            }
            self.stats.max_stack = self.stats.max_stack.max(stack.len());
            if self.stats.expanded % 1_000_000 == 0 {
                tracing::trace!(
                    expanded = self.stats.expanded,
                    stack = stack.len(),
                    depth = branch.path.len(),
                    "tour search progress"
                );
            }
        }
        self.finish(SearchOutcome::Exhausted)
    }

    /// Destinations to push, in push order.
    ///
    /// Repeated destinations keep only their last occurrence: that copy is popped
    /// first, and an earlier copy would only re-explore the same subtree.
    fn candidates(&mut self, dests: &[CellId; 8]) -> Vec<CellId> {
        let mut out: Vec<CellId> = dests
            .iter()
            .enumerate()
            .filter(|&(i, d)| !dests[i + 1..].contains(d))
            .map(|(_, &d)| d)
            .collect();
        if let Some(rng) = self.rng.as_mut() {
            out.shuffle(rng);
        }
        out
    }

    fn finish(self, outcome: SearchOutcome) -> SearchReport {
        tracing::info!(
            width = self.cube.width(),
            outcome = outcome.label(),
            expanded = self.stats.expanded,
            pushed = self.stats.pushed,
            max_stack = self.stats.max_stack,
            "tour search done"
        );
        SearchReport {
            outcome,
            stats: self.stats,
        }
    }
}
