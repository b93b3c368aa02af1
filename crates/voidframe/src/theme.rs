use ratatui::style::{Color, Modifier, Style};
use voidframe_core::{FontSize, Tint};

pub const BACKGROUND: Color = Color::Rgb(5, 8, 10);
pub const PANEL: Color = Color::Rgb(10, 15, 20);
pub const NOMINAL: Color = Color::Rgb(0, 255, 120);
pub const ACCENT: Color = Color::Rgb(0, 200, 255);
pub const WARNING: Color = Color::Rgb(255, 60, 60);
pub const DIVIDER: Color = Color::Rgb(120, 120, 120);

pub fn color(tint: Tint) -> Color {
    match tint {
        Tint::Background => BACKGROUND,
        Tint::PanelFill => PANEL,
        Tint::Nominal => NOMINAL,
        Tint::Accent => ACCENT,
        Tint::Warning => WARNING,
        Tint::Divider => DIVIDER,
    }
}

/// Terminal cells have one glyph size; the large class keeps its weight
/// through bold instead.
pub fn text_style(size: FontSize, tint: Tint) -> Style {
    let style = Style::default().fg(color(tint));
    match size {
        FontSize::Large => style.add_modifier(Modifier::BOLD),
        FontSize::Small | FontSize::Medium => style,
    }
}
