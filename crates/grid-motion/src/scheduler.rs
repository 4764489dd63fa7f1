//! The movement scheduler: admission, cancellation, and the per-frame loop.

use std::collections::BTreeMap;

use grid_core::{ActorKey, Direction, GridConfig, GridPoint, GridResult, WorldPos, cycle_index, cycle_start};
use grid_occupancy::OccupancyMap;
use log::{debug, trace};

use crate::{
    AdmissionResult, Completion, FrameReport, JobPhase, MoveJob, MoveKind, MoveObserver,
    MoveRejected,
};

/// Owns the occupancy map and every pending move.
///
/// Jobs live in three pools keyed by actor:
///
/// | Pool             | Holds                                           |
/// |------------------|-------------------------------------------------|
/// | `immediate`      | active immediate jobs (own timer)               |
/// | `batched_active` | batched jobs moving in the current cycle        |
/// | `batched_queued` | batched jobs waiting for the next boundary      |
///
/// Pools are `BTreeMap`s so every frame visits actors in ascending order and
/// callback order is reproducible.
///
/// The scheduler is single-threaded and must not be re-entered: observers
/// get no handle back to it, and every mutating method takes `&mut self`.
pub struct MoveScheduler<A: ActorKey> {
    config:         GridConfig,
    occupancy:      OccupancyMap<A>,
    immediate:      BTreeMap<A, MoveJob<A>>,
    batched_active: BTreeMap<A, MoveJob<A>>,
    batched_queued: BTreeMap<A, MoveJob<A>>,
}

impl<A: ActorKey> MoveScheduler<A> {
    /// Create an empty scheduler.  Fails if `config` does not validate.
    pub fn new(config: GridConfig) -> GridResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            occupancy:      OccupancyMap::new(),
            immediate:      BTreeMap::new(),
            batched_active: BTreeMap::new(),
            batched_queued: BTreeMap::new(),
        })
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Commit `actor` at `point` and return the matching world position.
    ///
    /// No admission checks: this places (or teleports) the actor.  It is also
    /// the commit step when a move completes.
    pub fn register_actor(&mut self, actor: A, point: GridPoint) -> WorldPos {
        self.occupancy.set(actor, point);
        point.to_world(self.config.cell_size)
    }

    /// Remove `actor` from the grid and drop all of its pending moves
    /// without firing their callbacks.
    ///
    /// Returns the point the actor held.  Calling this for an actor that is
    /// not registered changes nothing beyond cancelling stray jobs, and logs
    /// a warning from the occupancy map.
    pub fn unregister_actor(&mut self, actor: A) -> Option<GridPoint> {
        let cancelled = [
            self.immediate.remove(&actor),
            self.batched_active.remove(&actor),
            self.batched_queued.remove(&actor),
        ]
        .into_iter()
        .flatten()
        .count();
        if cancelled > 0 {
            debug!("cancelled {cancelled} pending move(s) for {actor:?}");
        }
        self.occupancy.remove(actor)
    }

    // ── Admission ─────────────────────────────────────────────────────────

    /// Ask for an immediate move of `actor` one step in `direction`.
    ///
    /// On success the job starts moving on the next [`advance`][Self::advance]
    /// and `observer` receives its callbacks.  On rejection nothing changes.
    pub fn request_immediate_move(
        &mut self,
        actor:     A,
        direction: Direction,
        observer:  impl MoveObserver + 'static,
    ) -> AdmissionResult<()> {
        self.request(actor, MoveKind::Immediate, direction, Box::new(observer))
    }

    /// Ask for a batched move of `actor` one step in `direction`.
    ///
    /// On success the job waits for the next cycle boundary, then moves with
    /// the rest of the batch.  An actor may queue its next batched step while
    /// its current one is still active.  With `reserve_destinations` on, the
    /// queued step starts from the active step's destination; with it off,
    /// from the committed point.
    pub fn request_batched_move(
        &mut self,
        actor:     A,
        direction: Direction,
        observer:  impl MoveObserver + 'static,
    ) -> AdmissionResult<()> {
        self.request(actor, MoveKind::Batched, direction, Box::new(observer))
    }

    /// Run the admission checks for a move without creating it.
    ///
    /// Returns the destination a request of this `kind` would receive.
    pub fn check_move(
        &self,
        actor:     A,
        kind:      MoveKind,
        direction: Direction,
    ) -> AdmissionResult<GridPoint> {
        self.admit(actor, kind, direction).map(|(_, to)| to)
    }

    fn request(
        &mut self,
        actor:     A,
        kind:      MoveKind,
        direction: Direction,
        observer:  Box<dyn MoveObserver>,
    ) -> AdmissionResult<()> {
        let (from, to) = self.admit(actor, kind, direction).inspect_err(|e| {
            trace!("rejected {kind} move of {actor:?} {direction}: {e}");
        })?;

        debug!("admitted {kind} move of {actor:?} {from} -> {to}");
        let job = MoveJob::new(actor, from, to, kind, observer);
        match kind {
            MoveKind::Immediate => self.immediate.insert(actor, job),
            MoveKind::Batched   => self.batched_queued.insert(actor, job),
        };
        Ok(())
    }

    /// Admission checks, in order.  Returns `(from, to)` on success.
    fn admit(
        &self,
        actor:     A,
        kind:      MoveKind,
        direction: Direction,
    ) -> AdmissionResult<(GridPoint, GridPoint)> {
        let pending = match kind {
            MoveKind::Immediate => self.immediate.contains_key(&actor),
            MoveKind::Batched   => self.batched_queued.contains_key(&actor),
        };
        if pending {
            return Err(MoveRejected::AlreadyMoving(kind));
        }

        let committed = self
            .occupancy
            .coordinate_of(actor)
            .ok_or(MoveRejected::NotRegistered)?;

        // With reservation on, a queued batched step follows on from the
        // active one.  Without it, every check runs against committed state.
        let reserve = self.config.reserve_destinations;
        let chained = match kind {
            MoveKind::Batched if reserve => self.batched_active.get(&actor).map(|job| job.to),
            _ => None,
        };
        let from = chained.unwrap_or(committed);

        let to = from
            .step(direction)
            .ok_or(MoveRejected::InvalidDirection(direction))?;

        // A chained step may return to the actor's own point: it runs after
        // the actor has left it.
        let blocked = match self.occupancy.occupant_at(to) {
            Some(other) => chained.is_none() || other != actor,
            None => false,
        };
        if blocked {
            return Err(MoveRejected::DestinationOccupied(to));
        }

        if reserve && self.is_reserved(to) {
            return Err(MoveRejected::DestinationReserved(to));
        }

        Ok((from, to))
    }

    /// `true` if any pending move, in any pool, ends at `point`.
    pub fn is_reserved(&self, point: GridPoint) -> bool {
        self.jobs().any(|job| job.to == point)
    }

    fn jobs(&self) -> impl Iterator<Item = &MoveJob<A>> {
        self.immediate
            .values()
            .chain(self.batched_active.values())
            .chain(self.batched_queued.values())
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance every pending move to time `now`, `dt` seconds after the
    /// previous call.
    ///
    /// Call exactly once per frame with non-decreasing `now`.  Within one
    /// call:
    ///
    /// 1. **Immediate** jobs each add `dt` to their timer, report their
    ///    position, and complete (commit, then notify) once
    ///    `elapsed >= move_duration`.
    /// 2. **Boundary**: if a cycle boundary lies in `(now - dt, now]`, every
    ///    active batched job snaps to its destination, commits, and
    ///    completes; then every queued batched job becomes active.
    /// 3. **Batch progress**: every active batched job reports its position
    ///    at the shared progress of the current cycle.
    ///
    /// A `dt` spanning several cycles is treated as a single boundary.
    pub fn advance(&mut self, now: f64, dt: f64) -> FrameReport<A> {
        let duration  = self.config.move_duration_secs;
        let cell_size = self.config.cell_size;
        let mut report = FrameReport::default();

        // ── Immediate jobs ────────────────────────────────────────────────
        let mut finished = Vec::new();
        for (&actor, job) in self.immediate.iter_mut() {
            job.elapsed_secs += dt;
            let progress = job.timer_progress(duration);
            let position = job.position_at(progress.min(1.0) as f32, cell_size);
            trace!("{actor:?} immediate at {position} ({progress:.3})");
            job.notify_position(position);
            if progress >= 1.0 {
                finished.push(actor);
            }
        }
        for actor in finished {
            if let Some(job) = self.immediate.remove(&actor) {
                self.complete(job, &mut report);
            }
        }

        // ── Cycle boundary ────────────────────────────────────────────────
        if cycle_index(now, duration) != cycle_index(now - dt, duration) {
            report.cycle_crossed = true;

            let landing = std::mem::take(&mut self.batched_active);
            for (_, mut job) in landing {
                job.notify_position(job.to.to_world(cell_size));
                self.complete(job, &mut report);
            }

            report.promoted = self.batched_queued.len();
            self.batched_active = std::mem::take(&mut self.batched_queued);
            if report.promoted > 0 {
                debug!("cycle boundary at {now:.3}s: promoted {} batched move(s)", report.promoted);
            }
        }

        // ── Batch progress ────────────────────────────────────────────────
        if !self.batched_active.is_empty() {
            let progress = self.cycle_progress(now);
            for job in self.batched_active.values_mut() {
                let position = job.position_at(progress, cell_size);
                job.notify_position(position);
            }
            trace!("batch of {} at {progress:.3}", self.batched_active.len());
        }

        debug_assert!(self.occupancy.is_consistent());
        report
    }

    /// Commit a finished job's destination, then notify its observer.
    fn complete(&mut self, mut job: MoveJob<A>, report: &mut FrameReport<A>) {
        self.register_actor(job.actor, job.to);
        job.notify_completed();
        debug!("{:?} completed {} move {} -> {}", job.actor, job.kind, job.from, job.to);
        report.completed.push(Completion {
            actor: job.actor,
            kind:  job.kind,
            point: job.to,
        });
    }

    /// Shared progress of the batch at `now`, in `[0, 1]`.
    pub fn cycle_progress(&self, now: f64) -> f32 {
        let duration = self.config.move_duration_secs;
        ((now - cycle_start(now, duration)) / duration).clamp(0.0, 1.0) as f32
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Read-only view of committed occupancy.
    pub fn occupancy(&self) -> &OccupancyMap<A> {
        &self.occupancy
    }

    #[inline]
    pub fn coordinate_of(&self, actor: A) -> Option<GridPoint> {
        self.occupancy.coordinate_of(actor)
    }

    #[inline]
    pub fn is_occupied(&self, point: GridPoint) -> bool {
        self.occupancy.is_occupied(point)
    }

    /// World position of the actor's committed point.
    pub fn world_position_of(&self, actor: A) -> Option<WorldPos> {
        self.coordinate_of(actor)
            .map(|p| p.to_world(self.config.cell_size))
    }

    /// Phase of `actor`'s pending move of `kind`.
    ///
    /// An actor with both an active and a queued batched move reports
    /// `Active`.
    pub fn phase_of(&self, actor: A, kind: MoveKind) -> Option<JobPhase> {
        match kind {
            MoveKind::Immediate => self.immediate.contains_key(&actor).then_some(JobPhase::Active),
            MoveKind::Batched => {
                if self.batched_active.contains_key(&actor) {
                    Some(JobPhase::Active)
                } else if self.batched_queued.contains_key(&actor) {
                    Some(JobPhase::Queued)
                } else {
                    None
                }
            }
        }
    }

    /// `true` if `actor` has any pending move.
    pub fn is_moving(&self, actor: A) -> bool {
        self.immediate.contains_key(&actor)
            || self.batched_active.contains_key(&actor)
            || self.batched_queued.contains_key(&actor)
    }

    pub fn immediate_count(&self) -> usize {
        self.immediate.len()
    }

    pub fn batched_active_count(&self) -> usize {
        self.batched_active.len()
    }

    pub fn batched_queued_count(&self) -> usize {
        self.batched_queued.len()
    }
}
