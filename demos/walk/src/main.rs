//! walk — headless driver for the grid movement scheduler.
//!
//! Fills a walled room with random walkers and runs the scheduler at a fixed
//! frame rate.  Even-numbered walkers use immediate moves and odd-numbered
//! walkers use batched moves, so both regimes share one clock.  Every
//! completed move is written to `output/walk/moves.csv`.
//!
//! Usage: `walk [config.json]`.  Without an argument the default
//! `GridConfig` is used.  Set `RUST_LOG=debug` to watch admissions and
//! completions.

mod room;
mod walker;

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, trace, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use grid_core::{ActorId, Direction, FrameClock, GridConfig, GridError, GridPoint};
use grid_motion::{MoveKind, MoveRejected, MoveScheduler};

use walker::Walker;

// ── Constants ─────────────────────────────────────────────────────────────────

const ROOM_WIDTH:    i32   = 12;
const ROOM_HEIGHT:   i32   = 8;
const WALKER_COUNT:  usize = 20;
const SEED:          u64   = 42;
const FRAME_RATE_HZ: f64   = 60.0;
const RUN_SECS:      f64   = 30.0;
const OUTPUT_DIR:    &str  = "output/walk";

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<GridConfig> {
    let config = match path {
        None => GridConfig::default(),
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(GridError::from)
                .with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).map_err(|e| GridError::Parse(e.to_string()))?
        }
    };
    config.validate()?;
    Ok(config)
}

fn kind_for(id: ActorId) -> MoveKind {
    if id.0 % 2 == 0 { MoveKind::Immediate } else { MoveKind::Batched }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref())?;
    info!(
        "walk: {WALKER_COUNT} walkers in {ROOM_WIDTH}x{ROOM_HEIGHT}, cell_size={}, move_duration={}s, reserve={}",
        config.cell_size, config.move_duration_secs, config.reserve_destinations,
    );

    // 1. Room and walkers.
    let mut scheduler = MoveScheduler::<ActorId>::new(config)?;
    let walls = room::build_walls(&mut scheduler, ROOM_WIDTH, ROOM_HEIGHT);
    info!("placed {walls} wall segments");

    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut cells: Vec<GridPoint> = room::interior(ROOM_WIDTH, ROOM_HEIGHT).collect();
    cells.shuffle(&mut rng);

    let walkers: Vec<Rc<RefCell<Walker>>> = cells
        .iter()
        .take(WALKER_COUNT)
        .enumerate()
        .map(|(i, &cell)| {
            let id = ActorId(i as u32);
            let position = scheduler.register_actor(id, cell);
            Rc::new(RefCell::new(Walker::new(id, cell, position)))
        })
        .collect();

    // 2. Output.
    fs::create_dir_all(OUTPUT_DIR)?;
    let mut moves = csv::Writer::from_path(Path::new(OUTPUT_DIR).join("moves.csv"))?;
    moves.write_record(["frame", "time_secs", "actor", "kind", "x", "y"])?;

    // 3. Run.
    let mut clock = FrameClock::with_rate(FRAME_RATE_HZ);
    let total_frames = clock.frames_for_secs(RUN_SECS);
    let mut admitted = 0u64;
    let mut blocked  = 0u64;
    let mut cycles   = 0u64;

    let t0 = Instant::now();
    for _ in 0..total_frames {
        for walker in &walkers {
            let id = walker.borrow().id;
            let direction = Direction::CARDINAL[rng.gen_range(0..Direction::CARDINAL.len())];
            let result = match kind_for(id) {
                MoveKind::Immediate => scheduler.request_immediate_move(id, direction, walker.clone()),
                MoveKind::Batched   => scheduler.request_batched_move(id, direction, walker.clone()),
            };
            match result {
                Ok(()) => admitted += 1,
                Err(MoveRejected::AlreadyMoving(_)) => {}
                Err(e) => {
                    blocked += 1;
                    trace!("{id} {direction}: {e}");
                }
            }
        }

        let step = clock.advance();
        let report = scheduler.advance(step.now, step.dt);
        if report.cycle_crossed {
            cycles += 1;
        }
        for c in &report.completed {
            moves.write_record(&[
                step.frame.to_string(),
                format!("{:.4}", step.now),
                c.actor.0.to_string(),
                c.kind.to_string(),
                c.point.x.to_string(),
                c.point.y.to_string(),
            ])?;
        }
    }
    moves.flush()?;
    let elapsed = t0.elapsed();

    // 4. Checks.
    let occupied: HashSet<GridPoint> = walkers
        .iter()
        .filter_map(|w| scheduler.coordinate_of(w.borrow().id))
        .collect();
    if occupied.len() != walkers.len() || !scheduler.occupancy().is_consistent() {
        warn!("occupancy check failed: {} distinct cells for {} walkers", occupied.len(), walkers.len());
    }
    for walker in &walkers {
        let w = walker.borrow();
        if scheduler.is_moving(w.id) {
            continue;
        }
        if scheduler.coordinate_of(w.id) != Some(w.cell) {
            warn!("{} believes it is at {} but the grid disagrees", w.id, w.cell);
        }
    }

    // 5. Summary.
    info!(
        "ran {total_frames} frames ({clock}) in {:.3} s: {admitted} admitted, {blocked} blocked, {cycles} cycles",
        elapsed.as_secs_f64(),
    );
    println!("{:<12} {:<10} {:>6} {:>8} {:<10} {:<22}", "Walker", "Kind", "Steps", "Updates", "Cell", "Position");
    println!("{}", "-".repeat(72));
    for walker in &walkers {
        let w = walker.borrow();
        println!(
            "{:<12} {:<10} {:>6} {:>8} {:<10} {:<22}",
            w.id.to_string(),
            kind_for(w.id).to_string(),
            w.steps,
            w.updates,
            w.cell.to_string(),
            w.position.to_string(),
        );
    }

    Ok(())
}
