//! `grid-motion` — move admission and frame-by-frame movement scheduling.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`job`]       | `MoveKind`, `JobPhase`; the crate-private `MoveJob`         |
//! | [`observer`]  | `MoveObserver` — per-move position/completion callbacks     |
//! | [`scheduler`] | `MoveScheduler<A>` — occupancy, job pools, `advance`        |
//! | [`report`]    | `FrameReport`, `Completion` — what one `advance` did        |
//! | [`error`]     | `MoveRejected`, `AdmissionResult<T>`                        |
//!
//! # Movement model
//!
//! An actor holds exactly one committed grid point.  A move request is
//! checked against committed occupancy (and, by default, against the
//! destinations of moves already admitted); if accepted it becomes a job and
//! the actor keeps its old point until the job completes.
//!
//! Two kinds of job share one clock:
//!
//! 1. **Immediate** jobs start on admission and each run their own timer for
//!    `move_duration_secs`.
//! 2. **Batched** jobs wait in a queue until the next cycle boundary (a
//!    multiple of `move_duration_secs`), then all move in lock-step through
//!    the following cycle and land together at the boundary after that.
//!
//! `MoveScheduler::advance(now, dt)` is called once per frame.  It finishes
//! immediate jobs first, then handles a crossed cycle boundary (land the
//! active batch, promote the queue), then reports positions for the new
//! active batch.  Observers receive interpolated `WorldPos` updates and a
//! single completion with the final `GridPoint`.

pub mod error;
pub mod job;
pub mod observer;
pub mod report;
pub mod scheduler;


pub use error::{AdmissionResult, MoveRejected};
pub use job::{JobPhase, MoveKind};
pub(crate) use job::MoveJob;
pub use observer::{FnObserver, MoveObserver, NoopObserver, observer_fn};
pub use report::{Completion, FrameReport};
pub use scheduler::MoveScheduler;
