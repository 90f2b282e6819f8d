use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::{request_news_page, send_city_query};
use crate::sources::ApiClient;
use crate::state::{AppState, SelectedCity};
use crate::theme::Settings;
use crate::util::is_headless;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;
mod handlers;
mod workers;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the localnews TUI end-to-end.
///
/// Inputs:
/// - `settings`: Resolved settings (config file merged with CLI overrides).
/// - `initial_city`: Optional startup scope; `None` starts on the Global feed.
///
/// Output:
/// - `Ok(())` when the user quits; `Err` on terminal setup or client construction
///   failures.
///
/// Details:
/// - Builds the shared API client, spawns the request workers, the tick task and the
///   terminal event reader, then issues the initial city (count) and news fetches.
/// - With `LOCALNEWS_TEST_HEADLESS=1` the terminal is never touched.
/// - The terminal is restored on every exit path once it was set up.
pub async fn run(settings: Settings, initial_city: Option<SelectedCity>) -> Result<()> {
    let api = ApiClient::from_settings(&settings)?;
    let headless = is_headless();
    tracing::info!(
        api = %api.base_url(),
        headless,
        global_row = settings.global_row.as_config_key(),
        "[Runtime] starting"
    );

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = AppState {
        selected_city: initial_city,
        show_keybinds_footer: settings.show_keybinds_footer,
        ..AppState::default()
    };

    let mut channels = Channels::new(&api);
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    send_city_query(&mut app, &channels.city_query_tx);
    request_news_page(&mut app, &channels.news_req_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    cleanup_on_exit(&channels);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("[Runtime] stopped");
    Ok(())
}
