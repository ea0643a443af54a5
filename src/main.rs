mod controller;
mod debounce;
mod logging;
mod model;
mod sentinel;
mod view;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use controller::AppController;
use model::{AppModel, FeedApi, LocalFeedClient};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== feedgram starting ===");

    let client = LocalFeedClient::load()?;

    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(model.clone(), client);

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("feedgram shutting down");
    Ok(())
}

async fn run_app<C: FeedApi>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController<C>,
) -> io::Result<()> {
    loop {
        // Get current state
        let (ui_state, feed, search, should_quit) = {
            let model_guard = model.lock().await;

            // Auto-clear old errors (after 5 seconds)
            model_guard.auto_clear_old_errors().await;

            // Keep the sentinel in step with the rows actually drawn
            let size = terminal.size()?;
            model_guard
                .set_viewport_rows(AppView::content_viewport_rows(size.height))
                .await;

            (
                model_guard.get_ui_state().await,
                model_guard.get_feed_state().await,
                model_guard.get_search_state().await,
                model_guard.should_quit().await,
            )
        };

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &ui_state, &feed, &search);
        })?;

        // Settle the debouncer and re-evaluate the prefetch trigger
        controller.on_tick(Instant::now()).await;

        // Handle input with shorter poll time for smoother UI updates
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
