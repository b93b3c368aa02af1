//! Generic scene painter: rasterizes the compositor's draw list onto one
//! full-area braille canvas. The canvas maps the fixed logical surface to
//! whatever cell grid the terminal provides, so the scene never needs to
//! know the real terminal size.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block,
    },
    Frame,
};
use voidframe_core::{config, DrawOp};

use crate::theme;

pub fn render(f: &mut Frame, scene: &[DrawOp]) {
    let area = f.size();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let background = scene
        .iter()
        .find_map(|op| match op {
            DrawOp::Clear { tint } => Some(theme::color(*tint)),
            _ => None,
        })
        .unwrap_or(theme::BACKGROUND);

    // The canvas only touches cells it draws on, so a plain block underneath
    // provides the clear color.
    f.render_widget(Block::default().style(Style::default().bg(background)), area);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, config::SURFACE_WIDTH])
        .y_bounds([0.0, config::SURFACE_HEIGHT])
        .paint(|ctx| paint_scene(ctx, scene, area));
    f.render_widget(canvas, area);
}

/// Paint ops in list order; text prints layer above shapes, which matches
/// the scene's z-order since every text op follows the fills it sits on.
fn paint_scene(ctx: &mut Context, scene: &[DrawOp], area: Rect) {
    // Logical size of one braille dot on this terminal.
    let dot_width = config::SURFACE_WIDTH / (f64::from(area.width) * 2.0);
    let dot_height = config::SURFACE_HEIGHT / (f64::from(area.height) * 4.0);

    for op in scene {
        match op {
            DrawOp::Clear { .. } => {}
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                tint,
            } => {
                // One hatch line per dot row fills the rectangle exactly.
                let color = theme::color(*tint);
                let mut row = 0.0;
                while row <= *height {
                    let fy = flip(y + row);
                    ctx.draw(&CanvasLine {
                        x1: *x,
                        y1: fy,
                        x2: x + width,
                        y2: fy,
                        color,
                    });
                    row += dot_height;
                }
            }
            DrawOp::Segment {
                x1,
                y1,
                x2,
                y2,
                tint,
            } => {
                ctx.draw(&CanvasLine {
                    x1: *x1,
                    y1: flip(*y1),
                    x2: *x2,
                    y2: flip(*y2),
                    color: theme::color(*tint),
                });
            }
            DrawOp::Marker { x, y, tint } => {
                let (px, py) = (*x as f64, flip(*y as f64));
                let coords = [
                    (px, py),
                    (px - dot_width, py),
                    (px + dot_width, py),
                    (px, py - dot_height),
                    (px, py + dot_height),
                ];
                ctx.draw(&Points {
                    coords: &coords,
                    color: theme::color(*tint),
                });
            }
            DrawOp::Text {
                x,
                y,
                text,
                size,
                tint,
            } => {
                ctx.print(
                    *x,
                    flip(*y),
                    Span::styled(text.clone(), theme::text_style(*size, *tint)),
                );
            }
        }
    }
}

/// The scene's y axis grows downward; the canvas's grows upward.
fn flip(y: f64) -> f64 {
    config::SURFACE_HEIGHT - y
}
