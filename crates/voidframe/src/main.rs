mod theme;
mod ui;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};
use voidframe_core::{config, FrameCompositor, ThreadRandom};

fn main() -> Result<()> {
    let mut compositor = FrameCompositor::new(
        config::SURFACE_WIDTH,
        config::SURFACE_HEIGHT,
        Local::now().time(),
        ThreadRandom::new(),
    );

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut compositor);
    restore_terminal(&mut terminal)?;

    if let Err(err) = result {
        eprintln!("voidframe: {err}");
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    compositor: &mut FrameCompositor<ThreadRandom>,
) -> Result<()> {
    let tick_rate = Duration::from_micros(1_000_000 / config::TICKS_PER_SECOND);
    let mut last_tick = Instant::now();
    let mut scene = compositor.compose();

    loop {
        terminal.draw(|f| ui::render(f, &scene))?;

        // Sleep inside the input poll for whatever is left of this tick's
        // budget; a slow frame just polls with a zero timeout.
        let budget = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(budget)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
                    && quit_requested(&key)
                {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            compositor.tick(Local::now().time());
            scene = compositor.compose();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn quit_requested(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
