use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;

use veridict_core::api::http::{DEFAULT_BASE_URL, HttpClient};

mod action;
mod app;
mod config_file;
mod input;
mod theme;
mod tui_event;
mod view;

use app::App;
use tui_event::BackendEvent;

/// Veridict TUI — fake-news analysis for pasted articles and documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Document to pre-select for analysis (.pdf or .docx)
    file: Option<PathBuf>,

    /// Classification API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,
}

/// Logs go to a file; stdout belongs to the terminal UI.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = dirs::data_local_dir()?.join("veridict").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::daily(dir, "veridict.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let _log_guard = init_logging();

    if let Some(ref path) = args.file {
        if !path.exists() {
            anyhow::bail!("file not found: {}", path.display());
        }
    }

    let file_cfg = config_file::load_config();

    // Resolve settings from CLI flags > env vars > config file > defaults
    let base_url = args
        .api_url
        .or_else(|| std::env::var("VERIDICT_API_URL").ok())
        .or_else(|| file_cfg.api.as_ref().and_then(|a| a.base_url.clone()))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout_secs = args
        .timeout_secs
        .or_else(|| {
            std::env::var("VERIDICT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or_else(|| file_cfg.api.as_ref().and_then(|a| a.timeout_secs))
        .unwrap_or(60);
    let theme_name = args
        .theme
        .or_else(|| file_cfg.display.as_ref().and_then(|d| d.theme.clone()))
        .unwrap_or_else(|| "hacker".to_string());

    let theme = match theme_name.as_str() {
        "modern" => theme::Theme::modern(),
        _ => theme::Theme::hacker(),
    };

    tracing::info!(%base_url, timeout_secs, theme = %theme_name, "starting veridict");

    let client = HttpClient::new(base_url, Duration::from_secs(timeout_secs));
    let mut app = App::new(client, theme);

    if let Some(path) = args.file {
        if let Err(err) = app.seed_file(path) {
            anyhow::bail!("{err}");
        }
    }

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let (backend_tx, mut backend_rx) = mpsc::unbounded_channel::<BackendEvent>();

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| view::view(f, &app))?;

        tokio::select! {
            // Network task completions
            maybe_event = backend_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.on_backend_event(backend_event);
                    while let Ok(evt) = backend_rx.try_recv() {
                        app.on_backend_event(evt);
                    }
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let action = input::map_event(&evt, &app.screen, &app.input_mode);
                        app.update(action);
                    }
                }
            } => {}
        }

        // An accepted submit leaves a request behind; run it off-loop so
        // the UI keeps ticking.
        if let Some(request) = app.take_pending_request() {
            let client = app.client();
            let tx = backend_tx.clone();
            tokio::spawn(async move {
                let outcome = veridict_core::controller::dispatch(client.as_ref(), &request).await;
                let _ = tx.send(BackendEvent::ClassificationFinished(outcome));
            });
        }

        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
