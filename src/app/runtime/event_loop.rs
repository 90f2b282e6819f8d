use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{
    handle_city_results, handle_news_results, handle_submit_result, handle_tick,
};

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(
                &ev,
                app,
                &channels.city_query_tx,
                &channels.news_req_tx,
                &channels.submit_req_tx,
            )
        }
        Some(results) = channels.city_results_rx.recv() => {
            handle_city_results(app, results);
            false
        }
        Some(results) = channels.news_results_rx.recv() => {
            handle_news_results(app, results, &channels.news_req_tx);
            false
        }
        Some(result) = channels.submit_results_rx.recv() => {
            handle_submit_result(app, result, &channels.news_req_tx);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app);
            false
        }
        else => false
    }
}

/// What: Render and dispatch until a handler requests exit.
///
/// Inputs:
/// - `terminal`: Terminal to draw on (`None` in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
