//! Terminal entry point for the procalc TUI.

use std::io;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use procalc::tui::{layout, render, CalculatorApp, InputHandler};

/// Scientific pocket calculator with a keypad-driven terminal UI.
#[derive(Debug, Parser)]
#[command(name = "procalc", version, about)]
struct Cli {
    /// Start with the scientific keypad open.
    #[arg(long)]
    scientific: bool,

    /// Number of tape entries to keep in memory.
    #[arg(long, default_value_t = 100)]
    history_limit: usize,

    /// Log filter when RUST_LOG is unset, e.g. `procalc=debug`.
    #[arg(long, default_value = "procalc=warn")]
    log: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(io::stderr)
        .init();

    let mut app = CalculatorApp::with_history_limit(cli.history_limit);
    if cli.scientific {
        app.open_scientific();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Runs the synchronous event loop: draw, block on one event, apply one
/// transition.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|frame| render(app, frame))?;

        match event::read()? {
            Event::Key(key) => app.apply_key(input_handler.handle_key(key)),
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let size = terminal.size()?;
                    let areas = layout(
                        Rect::new(0, 0, size.width, size.height),
                        app.engine().scientific_mode(),
                    );
                    app.click(&areas, mouse.column, mouse.row);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
