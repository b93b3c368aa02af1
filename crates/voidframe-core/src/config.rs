//! Fixed tuning for the display. Nothing here is configurable at runtime;
//! the layout values assume the logical surface below and the front end
//! scales the whole scene to the terminal it actually gets.

/// Logical surface the compositor lays out against, in pixels.
pub const SURFACE_WIDTH: f64 = 1024.0;
pub const SURFACE_HEIGHT: f64 = 768.0;

/// Target simulation rate, ticks per second.
pub const TICKS_PER_SECOND: u64 = 60;

/// Feed capacity; the panel is seeded full and stays full.
pub const LOG_LINES: usize = 26;
/// Per-tick chance of appending one feed line.
pub const LOG_APPEND_CHANCE: f64 = 0.05;

pub const LOG_MESSAGES: [&str; 10] = [
    "[CORE] Neural branch expanded",
    "[AI] Recursive depth increased",
    "[NET] Signal triangulated",
    "[SYS] Heuristic drift corrected",
    "[MEM] Volatile cache overwritten",
    "[WARN] Pattern instability detected",
    "[OK] Stabilization complete",
    "[CORE] Predictive loop refined",
    "[AI] Autonomous cycle executed",
    "[NET] External vector mapped",
];

/// Per-tick chance of an anomaly banner firing while idle.
pub const ALERT_CHANCE: f64 = 0.002;
/// Banner duration bounds in ticks, inclusive.
pub const ALERT_TICKS_MIN: u32 = 60;
pub const ALERT_TICKS_MAX: u32 = 120;

pub const PARTICLE_COUNT: usize = 40;
/// Spawn offset from the surface midpoint, whole pixels per axis.
pub const SPAWN_SPREAD: i64 = 120;
/// Speed bound per axis, pixels per tick.
pub const SPEED_LIMIT: f64 = 0.3;
/// Containment box half-extent around the midpoint, per axis.
pub const FIELD_HALF_EXTENT: f64 = 150.0;
/// Particles closer than this get a link segment drawn between them.
pub const LINK_DISTANCE: f64 = 90.0;

/// Gauge table: label, minimum, maximum (inclusive).
pub const METRIC_TABLE: [(&str, i64, i64); 4] = [
    ("CPU LOAD", 70, 95),
    ("AI LOAD", 80, 98),
    ("SIGNAL", 50, 90),
    ("LATENCY", 12, 60),
];
/// Gauge bar length per percentage point, pixels.
pub const BAR_SCALE: f64 = 2.0;
pub const BAR_HEIGHT: f64 = 6.0;
pub const METRIC_ROW_PITCH: f64 = 40.0;
/// Top of the first gauge row: label baseline, then its bar below.
pub const METRIC_TEXT_TOP: f64 = 40.0;
pub const METRIC_BAR_TOP: f64 = 65.0;

// Panel geometry.
pub const PANEL_MARGIN: f64 = 20.0;
pub const LOG_PANEL_WIDTH: f64 = 420.0;
pub const LOG_TEXT_INSET: f64 = 30.0;
pub const LOG_ROW_PITCH: f64 = 22.0;
pub const METRICS_PANEL_INSET: f64 = 300.0;
pub const METRICS_PANEL_WIDTH: f64 = 280.0;
pub const METRICS_TEXT_INSET: f64 = 280.0;

pub const TITLE_TEXT: &str = "AUTONOMOUS AI CORE";
pub const ALERT_TEXT: &str = "ANOMALOUS DATA STREAM";
pub const STATUS_TEXT: &str = "CORE STATE: ADAPTIVE | THREADS ACTIVE | VOIDFRAME ONLINE";
