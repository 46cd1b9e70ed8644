use throwcard::adapters::FileSnapshotProvider;
use throwcard::app::CardApp;
use throwcard::cli::{parse_args, version_string, CliCommand, CliOptions, USAGE};
use throwcard::config::CardConfig;
use throwcard::logging::init_logging;
use throwcard::models::Snapshot;
use throwcard::terminal::{setup_panic_hook, TerminalManager};
use throwcard::traits::SnapshotProvider;
use throwcard::ui::render_to_text;
use throwcard::watcher::{read_snapshot, spawn_snapshot_watcher};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Width used by `--print` when stdout is not a terminal.
const PRINT_FALLBACK_WIDTH: u16 = 80;

fn main() -> Result<()> {
    // Handle flags that print and exit before any initialization
    let (options, print_once) = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_string());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("throwcard: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Print(options) => (options, true),
        CliCommand::Run(options) => (options, false),
    };

    color_eyre::install()?;

    if let Some(path) = init_logging() {
        tracing::info!("{} starting, logging to {}", version_string(), path.display());
    }

    let config = load_config(&options)?;
    let snapshot_path = config
        .resolved_snapshot_path()
        .ok_or_else(|| eyre!("no snapshot file configured; pass --snapshot <path>"))?;
    tracing::info!(
        "Reading snapshots from {} (title: {:?}, locale: {})",
        snapshot_path.display(),
        config.display_title(),
        config.locale
    );
    let provider: Arc<dyn SnapshotProvider> = Arc::new(FileSnapshotProvider::new(snapshot_path));

    let mut app = CardApp::new(&config);

    if print_once {
        return print_card(&mut app, provider.as_ref());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_interactive(&mut app, provider, &config))
}

/// Full-screen card, redrawn on every changed snapshot.
async fn run_interactive(
    app: &mut CardApp,
    provider: Arc<dyn SnapshotProvider>,
    config: &CardConfig,
) -> Result<()> {
    let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel();
    let watcher = spawn_snapshot_watcher(provider, config.poll_interval(), snapshot_tx);

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), app, snapshot_rx).await;
    manager.restore();

    watcher.abort();
    result
}

/// Config file and environment, then flag overrides.
fn load_config(options: &CliOptions) -> Result<CardConfig> {
    let config = CardConfig::load()?;
    Ok(options.apply(config))
}

/// `--print`: bind and render one snapshot to stdout.
fn print_card(app: &mut CardApp, provider: &dyn SnapshotProvider) -> Result<()> {
    let (snapshot, error) = read_snapshot(provider);
    if let Some(error) = error {
        tracing::warn!("Snapshot read failed: {}", error);
        eprintln!("throwcard: {}", error);
    }
    app.apply_snapshot(&snapshot);

    let width = crossterm::terminal::size()
        .map(|(width, _)| width)
        .unwrap_or(PRINT_FALLBACK_WIDTH);
    println!("{}", render_to_text(app.card(), width));
    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CardApp,
    mut snapshot_rx: mpsc::UnboundedReceiver<Snapshot>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Draw only when the card changed or the terminal was resized
        if app.needs_redraw {
            terminal.draw(|f| {
                f.render_widget(app.card(), f.area());
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            snapshot = snapshot_rx.recv() => {
                match snapshot {
                    Some(snapshot) => {
                        app.apply_snapshot(&snapshot);
                    }
                    None => {
                        tracing::warn!("Snapshot watcher stopped");
                        return Ok(());
                    }
                }
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested after {} snapshots", app.updates());
            return Ok(());
        }
    }
}
