use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use item_row::app::App;
use item_row::config::AppConfig;
use item_row::ui;

/// Poll interval while a row is animating (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll interval while idle
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "item-row")]
#[command(about = "Animated list rows rendered in the terminal")]
#[command(version)]
struct Cli {
    /// Config file path [default: $XDG_CONFIG_HOME/item-row/config.toml]
    #[arg(long)]
    config: Option<String>,

    /// Override the enable/disable animation length
    #[arg(long)]
    duration_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never tear the alternate screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_row=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    if let Some(ms) = cli.duration_ms {
        config.animation.duration_ms = ms;
    }
    tracing::info!("Loaded {} rows", config.rows.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let animating = app.on_frame(Instant::now());
        if app.take_redraw() {
            terminal.draw(|f| ui::draw(f, app))?;
        }

        let timeout = if animating { FRAME_INTERVAL } else { IDLE_INTERVAL };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Resize(..) => app.mark_dirty(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let step = app.scrub_step();
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Up | KeyCode::Char('k') => app.previous(),
                    KeyCode::Down | KeyCode::Char('j') => app.next(),
                    KeyCode::Char('b') => app.toggle_brief(true),
                    KeyCode::Char('B') => app.toggle_brief(false),
                    KeyCode::Char('d') => app.toggle_body(true),
                    KeyCode::Char('D') => app.toggle_body(false),
                    KeyCode::Left | KeyCode::Char('h') => app.scrub_body(-step),
                    KeyCode::Right | KeyCode::Char('l') => app.scrub_body(step),
                    KeyCode::Char('s') => app.toggle_start_icon(),
                    KeyCode::Char('e') => app.toggle_end_icon(),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
