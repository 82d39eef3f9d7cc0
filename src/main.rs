use examdesk::adapters::{FileSessionStore, ReqwestHttpClient};
use examdesk::app::App;
use examdesk::cli::{parse_args, run_cli_command};
use examdesk::config::DashboardConfig;
use examdesk::logging;
use examdesk::terminal::{setup_panic_hook, TerminalManager};
use examdesk::traits::SessionStore;
use examdesk::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Redraw/expiry tick
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let args = parse_args(std::env::args())?;
    let config = args.apply(DashboardConfig::from_env());
    config.validate()?;

    // Logging failure is not fatal; the dashboard works without a log file
    match config.log_file() {
        Ok(path) => {
            if let Err(e) = logging::init(config.debug, &path) {
                eprintln!("Warning: could not open log file {}: {}", path.display(), e);
            }
        }
        Err(e) => eprintln!("Warning: {}", e),
    }

    if let Some(result) = run_cli_command(&args, &config) {
        return result;
    }

    let session = Arc::new(FileSessionStore::new(config.session_file()?));
    if let Some(token) = &args.token {
        session.save(token)?;
        tracing::info!("Session token saved from --token");
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let http = Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout)?);

    let runtime = tokio::runtime::Runtime::new()?;

    let mut manager = TerminalManager::new()?;
    let size = manager.terminal().size()?;

    let mut app = App::new(&config, http, session);
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(async {
        app.start();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!("Dashboard exited with error: {:?}", e);
    }
    tracing::info!("Dashboard closed");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
