//! Frame orchestration. The compositor is the sole owner of all display
//! state; one `tick` advances the simulation and one `compose` turns the
//! current snapshot into a draw list. The driver loop owns pacing and quit
//! polling, so nothing here touches a clock or an input source.

use chrono::NaiveTime;

use crate::alert::AlertState;
use crate::config::{
    ALERT_TEXT, BAR_HEIGHT, BAR_SCALE, LOG_PANEL_WIDTH, LOG_ROW_PITCH, LOG_TEXT_INSET,
    METRICS_PANEL_INSET, METRICS_PANEL_WIDTH, METRICS_TEXT_INSET, METRIC_BAR_TOP,
    METRIC_ROW_PITCH, METRIC_TEXT_TOP, PANEL_MARGIN, STATUS_TEXT, TITLE_TEXT,
};
use crate::feed::LogFeed;
use crate::field::ParticleField;
use crate::metrics::sample_metrics;
use crate::rng::RandomSource;
use crate::scene::{DrawOp, FontSize, Tint};

pub struct FrameCompositor<R: RandomSource> {
    rng: R,
    width: f64,
    height: f64,
    feed: LogFeed,
    alert: AlertState,
    field: ParticleField,
}

impl<R: RandomSource> FrameCompositor<R> {
    /// `width` and `height` come from the surface once at startup and stay
    /// fixed for the life of the display. The feed starts full and the
    /// particle cloud spawns around the surface midpoint.
    pub fn new(width: f64, height: f64, now: NaiveTime, mut rng: R) -> Self {
        let feed = LogFeed::seeded(&mut rng, now);
        let field = ParticleField::new((width / 2.0, height / 2.0), &mut rng);
        Self {
            rng,
            width,
            height,
            feed,
            alert: AlertState::Idle,
            field,
        }
    }

    /// Advance one tick: feed append roll, alert transition, particle
    /// integration and containment. State mutation only; no drawing.
    pub fn tick(&mut self, now: NaiveTime) {
        self.feed.roll(&mut self.rng, now);
        self.alert.tick(&mut self.rng);
        self.field.advance();
    }

    /// Produce the frame's draw list from the current snapshot: background,
    /// feed panel, gauge panel, particle links then markers, title, the
    /// banner while an alert is active, and the status footer. Gauges are
    /// sampled fresh here, which is the only reason this takes `&mut self`;
    /// simulation state is read-only throughout.
    pub fn compose(&mut self) -> Vec<DrawOp> {
        let (w, h) = (self.width, self.height);
        let (cx, cy) = self.field.center();

        let mut ops = vec![DrawOp::Clear {
            tint: Tint::Background,
        }];

        // Left feed panel, oldest line at the top.
        ops.push(DrawOp::Rect {
            x: PANEL_MARGIN,
            y: PANEL_MARGIN,
            width: LOG_PANEL_WIDTH,
            height: h - 2.0 * PANEL_MARGIN,
            tint: Tint::PanelFill,
        });
        for (i, entry) in self.feed.entries().enumerate() {
            ops.push(DrawOp::Text {
                x: LOG_TEXT_INSET,
                y: LOG_TEXT_INSET + i as f64 * LOG_ROW_PITCH,
                text: entry.display(),
                size: FontSize::Small,
                tint: if entry.is_warning() {
                    Tint::Warning
                } else {
                    Tint::Nominal
                },
            });
        }

        // Right gauge panel.
        ops.push(DrawOp::Rect {
            x: w - METRICS_PANEL_INSET,
            y: PANEL_MARGIN,
            width: METRICS_PANEL_WIDTH,
            height: h - 2.0 * PANEL_MARGIN,
            tint: Tint::PanelFill,
        });
        for (i, metric) in sample_metrics(&mut self.rng).iter().enumerate() {
            let row = i as f64 * METRIC_ROW_PITCH;
            ops.push(DrawOp::Text {
                x: w - METRICS_TEXT_INSET,
                y: METRIC_TEXT_TOP + row,
                text: format!("{}: {}%", metric.label, metric.value),
                size: FontSize::Medium,
                tint: Tint::Accent,
            });
            ops.push(DrawOp::Rect {
                x: w - METRICS_TEXT_INSET,
                y: METRIC_BAR_TOP + row,
                width: metric.value as f64 * BAR_SCALE,
                height: BAR_HEIGHT,
                tint: Tint::Accent,
            });
        }

        // Core graph: link web beneath the node markers.
        for ((x1, y1), (x2, y2)) in self.field.links() {
            ops.push(DrawOp::Segment {
                x1,
                y1,
                x2,
                y2,
                tint: Tint::Nominal,
            });
        }
        for p in self.field.particles() {
            ops.push(DrawOp::Marker {
                x: p.x.round() as i64,
                y: p.y.round() as i64,
                tint: Tint::Nominal,
            });
        }

        ops.push(DrawOp::Text {
            x: cx - 160.0,
            y: cy - 200.0,
            text: TITLE_TEXT.to_string(),
            size: FontSize::Large,
            tint: Tint::Accent,
        });

        if self.alert.is_active() {
            ops.push(DrawOp::Text {
                x: cx - 220.0,
                y: 40.0,
                text: ALERT_TEXT.to_string(),
                size: FontSize::Large,
                tint: Tint::Warning,
            });
        }

        ops.push(DrawOp::Segment {
            x1: PANEL_MARGIN,
            y1: h - 40.0,
            x2: w - PANEL_MARGIN,
            y2: h - 40.0,
            tint: Tint::Divider,
        });
        ops.push(DrawOp::Text {
            x: PANEL_MARGIN,
            y: h - 30.0,
            text: STATUS_TEXT.to_string(),
            size: FontSize::Small,
            tint: Tint::Nominal,
        });

        ops
    }

    pub fn feed(&self) -> &LogFeed {
        &self.feed
    }

    pub fn alert(&self) -> AlertState {
        self.alert
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Force the alert machine into a known state, for tests and demos.
    pub fn set_alert(&mut self, alert: AlertState) {
        self.alert = alert;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LOG_LINES, PARTICLE_COUNT, SURFACE_HEIGHT, SURFACE_WIDTH};
    use crate::rng::ScriptedRandom;
    use chrono::NaiveTime;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).expect("valid time")
    }

    fn quiet_compositor() -> FrameCompositor<ScriptedRandom> {
        FrameCompositor::new(SURFACE_WIDTH, SURFACE_HEIGHT, noon(), ScriptedRandom::new())
    }

    #[test]
    fn construction_seeds_a_full_feed_and_cloud() {
        let comp = quiet_compositor();
        assert_eq!(comp.feed().len(), LOG_LINES);
        assert_eq!(comp.field().particles().len(), PARTICLE_COUNT);
        assert_eq!(comp.alert(), AlertState::Idle);
        assert_eq!(comp.field().center(), (512.0, 384.0));
    }

    #[test]
    fn frame_starts_with_clear_and_ends_with_the_status_line() {
        let mut comp = quiet_compositor();
        let ops = comp.compose();
        assert_eq!(
            ops.first(),
            Some(&DrawOp::Clear {
                tint: Tint::Background
            })
        );
        match ops.last() {
            Some(DrawOp::Text { text, .. }) => assert_eq!(text, STATUS_TEXT),
            other => panic!("unexpected final op: {other:?}"),
        }
    }

    #[test]
    fn banner_is_present_iff_alert_is_active() {
        let mut comp = quiet_compositor();
        let has_banner = |ops: &[DrawOp]| {
            ops.iter().any(|op| {
                matches!(op, DrawOp::Text { text, tint: Tint::Warning, .. } if text == ALERT_TEXT)
            })
        };

        assert!(!has_banner(&comp.compose()));
        comp.set_alert(AlertState::Active { remaining: 3 });
        assert!(has_banner(&comp.compose()));
        comp.set_alert(AlertState::Idle);
        assert!(!has_banner(&comp.compose()));
    }

    #[test]
    fn markers_come_after_every_link_segment() {
        let mut comp = quiet_compositor();
        let ops = comp.compose();
        let first_marker = ops
            .iter()
            .position(|op| matches!(op, DrawOp::Marker { .. }))
            .expect("markers present");
        let last_link = ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Segment { tint: Tint::Nominal, .. }))
            .expect("links present");
        assert!(last_link < first_marker);
    }

    #[test]
    fn feed_lines_carry_the_warning_tint() {
        let mut comp = quiet_compositor();
        // Force one append of the [WARN] catalog entry.
        comp.rng.queue_float(0.0);
        comp.rng.queue_int(5);
        comp.tick(noon());

        let ops = comp.compose();
        let warn_lines = ops
            .iter()
            .filter(|op| {
                matches!(op, DrawOp::Text { text, tint: Tint::Warning, .. } if text.contains("[WARN]"))
            })
            .count();
        assert!(warn_lines >= 1);
    }

    #[test]
    fn gauge_rows_follow_the_configured_pitch() {
        let mut comp = quiet_compositor();
        let ops = comp.compose();

        let label_ys: Vec<f64> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    x,
                    y,
                    size: FontSize::Medium,
                    tint: Tint::Accent,
                    ..
                } => {
                    assert_eq!(*x, SURFACE_WIDTH - METRICS_TEXT_INSET);
                    Some(*y)
                }
                _ => None,
            })
            .collect();
        let bar_ys: Vec<f64> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect {
                    y,
                    tint: Tint::Accent,
                    ..
                } => Some(*y),
                _ => None,
            })
            .collect();

        let expected_labels: Vec<f64> = (0..4)
            .map(|i| METRIC_TEXT_TOP + i as f64 * METRIC_ROW_PITCH)
            .collect();
        let expected_bars: Vec<f64> = (0..4)
            .map(|i| METRIC_BAR_TOP + i as f64 * METRIC_ROW_PITCH)
            .collect();
        assert_eq!(label_ys, expected_labels);
        assert_eq!(bar_ys, expected_bars);
    }

    #[test]
    fn tick_advances_every_component_once() {
        let mut comp = quiet_compositor();
        let before: Vec<_> = comp.field().particles().to_vec();
        // Script: feed roll fires, alert roll fires with the shortest
        // in-range run (scripted draws clamp to the requested bounds).
        comp.rng.queue_float(0.0);
        comp.rng.queue_int(0);
        comp.rng.queue_float(0.0);
        comp.rng.queue_int(60);
        comp.tick(noon());

        assert_eq!(comp.alert(), AlertState::Active { remaining: 60 });
        assert_eq!(comp.feed().len(), LOG_LINES);
        let moved = comp
            .field()
            .particles()
            .iter()
            .zip(&before)
            .all(|(now, was)| now.x == was.x + was.vx && now.y == was.y + was.vy);
        assert!(moved);
    }
}
