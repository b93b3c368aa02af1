//! Simulation core for the VOIDFRAME display: a scrolling log feed, an
//! anomaly alert timer, a bouncing particle cloud with proximity links, and
//! per-frame gauge sampling, composed into a flat draw list once per tick.
//!
//! The crate performs no I/O and never touches a terminal. All randomness
//! flows through the [`rng::RandomSource`] trait so a frame sequence is
//! reproducible from a seed, and the front end consumes frames as plain
//! [`scene::DrawOp`] values.

pub mod alert;
pub mod compositor;
pub mod config;
pub mod feed;
pub mod field;
pub mod metrics;
pub mod rng;
pub mod scene;

pub use alert::AlertState;
pub use compositor::FrameCompositor;
pub use feed::{LogEntry, LogFeed};
pub use field::{Particle, ParticleField};
pub use metrics::{sample_metrics, Metric};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use scene::{DrawOp, FontSize, Tint};
