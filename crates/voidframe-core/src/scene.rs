//! The narrow surface interface as data. The compositor emits a flat list
//! of [`DrawOp`] per frame; the front end rasterizes them in order, so list
//! order is z-order and earlier ops sit beneath later ones.

/// Palette role of a draw. The core never names concrete colors; the front
/// end owns the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Background,
    PanelFill,
    Nominal,
    Accent,
    Warning,
    Divider,
}

/// Text size class; glyph metrics are the renderer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

/// One instruction for the rendering surface, in logical surface pixels
/// with the origin at the top-left and y growing downward.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        tint: Tint,
    },
    /// Filled axis-aligned rectangle.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        tint: Tint,
    },
    /// One-pixel line segment.
    Segment {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        tint: Tint,
    },
    /// Small filled dot at an integer position.
    Marker {
        x: i64,
        y: i64,
        tint: Tint,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: FontSize,
        tint: Tint,
    },
}
