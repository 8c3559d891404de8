use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cubetour::api::{
    build_cube, search_tour, verify_tour, Cube, Direction, SearchCfg, SearchOutcome,
    SearchReport, TurnRule,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;

use provenance::Provenance;

#[derive(Parser)]
#[command(name = "cubetour-cli")]
#[command(about = "Knight's tours on a folded cube surface")]
struct Cmd {
    /// Optional run tag; propagated to artifacts and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the cube, search for a tour, and print it
    Solve {
        #[arg(long, default_value_t = 3)]
        width: usize,
        #[arg(long, value_enum, default_value_t = TurnArg::AsGiven)]
        turn: TurnArg,
        /// Stop after this many search branches
        #[arg(long)]
        max_branches: Option<u64>,
        /// Shuffle the move order with this seed
        #[arg(long)]
        shuffle_seed: Option<u64>,
        /// Also write a JSON artifact (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print every cell with its four neighbors
    Graph {
        #[arg(long, default_value_t = 3)]
        width: usize,
        #[arg(long)]
        json: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TurnArg {
    AsGiven,
    FollowHeading,
}

impl From<TurnArg> for TurnRule {
    fn from(t: TurnArg) -> Self {
        match t {
            TurnArg::AsGiven => TurnRule::AsGiven,
            TurnArg::FollowHeading => TurnRule::FollowHeading,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            width,
            turn,
            max_branches,
            shuffle_seed,
            out,
        } => {
            let cfg = SearchCfg {
                turn_rule: turn.into(),
                max_branches,
                shuffle_seed,
            };
            solve(width, cfg, out, cmd.tag)
        }
        Action::Graph { width, json } => graph(width, json),
        Action::Report => report(cmd.tag),
    }
}

fn solve(width: usize, cfg: SearchCfg, out: Option<PathBuf>, tag: Option<String>) -> Result<()> {
    tracing::info!(width, turn_rule = %cfg.turn_rule, tag = ?tag, "solve");
    let cube = build_cube(width).context("building cube graph")?;
    let report = search_tour(&cube, cfg);
    if let SearchOutcome::Found(tour) = &report.outcome {
        verify_tour(&cube, &tour.cells, cfg.turn_rule).context("search returned a broken tour")?;
    }

    let stdout = io::stdout();
    render_outcome(&mut stdout.lock(), &cube, &report)?;

    if let Some(out) = out {
        let prov = write_artifact(&out, &cube, cfg, &report, tag)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote artifact");
    }
    Ok(())
}

/// Tour lines (`k:\t[face,row,col]`) or a one-line negative result.
fn render_outcome<W: Write>(w: &mut W, cube: &Cube, report: &SearchReport) -> io::Result<()> {
    match &report.outcome {
        SearchOutcome::Found(tour) => {
            for (k, c) in tour.coords(cube).enumerate() {
                writeln!(w, "{}:\t{}", k + 1, c)?;
            }
        }
        SearchOutcome::Exhausted => writeln!(w, "No solution found.")?,
        SearchOutcome::BudgetReached => writeln!(
            w,
            "Search stopped after {} branches without a tour.",
            report.stats.expanded
        )?,
    }
    Ok(())
}

#[derive(Serialize)]
struct StatsRecord {
    expanded: u64,
    pushed: u64,
    max_stack: usize,
}

#[derive(Serialize)]
struct TourArtifact {
    width: usize,
    turn_rule: &'static str,
    max_branches: Option<u64>,
    shuffle_seed: Option<u64>,
    outcome: &'static str,
    stats: StatsRecord,
    tour: Vec<[usize; 3]>,
}

fn write_artifact(
    out: &Path,
    cube: &Cube,
    cfg: SearchCfg,
    report: &SearchReport,
    tag: Option<String>,
) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let tour: Vec<[usize; 3]> = report
        .outcome
        .tour()
        .map(|t| t.coords(cube).map(|c| [c.face, c.row, c.col]).collect())
        .unwrap_or_default();
    let artifact = TourArtifact {
        width: cube.width(),
        turn_rule: cfg.turn_rule.name(),
        max_branches: cfg.max_branches,
        shuffle_seed: cfg.shuffle_seed,
        outcome: report.outcome.label(),
        stats: StatsRecord {
            expanded: report.stats.expanded,
            pushed: report.stats.pushed,
            max_stack: report.stats.max_stack,
        },
        tour,
    };
    std::fs::write(out, serde_json::to_vec_pretty(&artifact)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "width": cube.width(),
        "turn_rule": cfg.turn_rule.name(),
        "max_branches": cfg.max_branches,
        "shuffle_seed": cfg.shuffle_seed,
    });
    Provenance::capture(tag, params).write_sidecar(out)
}

#[derive(Serialize)]
struct CellRecord {
    cell: [usize; 3],
    up: [usize; 3],
    down: [usize; 3],
    left: [usize; 3],
    right: [usize; 3],
}

fn cell_records(cube: &Cube) -> Vec<CellRecord> {
    let triple = |id| {
        let c = cube.coord(id);
        [c.face, c.row, c.col]
    };
    cube.ids()
        .map(|id| CellRecord {
            cell: triple(id),
            up: triple(cube.neighbor(id, Direction::Up)),
            down: triple(cube.neighbor(id, Direction::Down)),
            left: triple(cube.neighbor(id, Direction::Left)),
            right: triple(cube.neighbor(id, Direction::Right)),
        })
        .collect()
}

fn graph(width: usize, json: bool) -> Result<()> {
    tracing::info!(width, json, "graph");
    let cube = build_cube(width).context("building cube graph")?;
    let stdout = io::stdout();
    let mut w = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut w, &cell_records(&cube))?;
        writeln!(w)?;
    } else {
        for id in cube.ids() {
            write!(w, "{}", cube.coord(id))?;
            for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
                write!(w, "\t{dir}={}", cube.coord(cube.neighbor(id, dir)))?;
            }
            writeln!(w)?;
        }
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let prov = Provenance::capture(tag, serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
