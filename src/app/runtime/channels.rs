use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::ApiClient;
use crate::state::{CityQuery, CityResults, NewsRequest, NewsResults, SubmitRequest, SubmitResult};

use super::workers::{
    cities::spawn_city_worker, news::spawn_news_worker, submit::spawn_submit_worker,
};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Request senders go to the workers; result receivers are drained by the event loop.
/// - Senders for terminal events and ticks are kept so background producers can be
///   attached after construction.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on shutdown so the reader thread exits.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Periodic ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving side of ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// City search requests.
    pub city_query_tx: mpsc::UnboundedSender<CityQuery>,
    /// City search results.
    pub city_results_rx: mpsc::UnboundedReceiver<CityResults>,
    /// News page requests.
    pub news_req_tx: mpsc::UnboundedSender<NewsRequest>,
    /// News page results.
    pub news_results_rx: mpsc::UnboundedReceiver<NewsResults>,
    /// Submission requests.
    pub submit_req_tx: mpsc::UnboundedSender<SubmitRequest>,
    /// Submission outcomes.
    pub submit_results_rx: mpsc::UnboundedReceiver<SubmitResult>,
}

impl Channels {
    /// What: Create all channels and spawn the request workers.
    ///
    /// Inputs:
    /// - `api`: Client cloned into each worker.
    ///
    /// Output:
    /// - Channel bundle owned by the event loop.
    ///
    /// Details:
    /// - Must be called inside a tokio runtime; the workers are spawned immediately.
    pub fn new(api: &ApiClient) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        let (city_query_tx, city_query_rx) = mpsc::unbounded_channel::<CityQuery>();
        let (city_results_tx, city_results_rx) = mpsc::unbounded_channel::<CityResults>();
        let (news_req_tx, news_req_rx) = mpsc::unbounded_channel::<NewsRequest>();
        let (news_results_tx, news_results_rx) = mpsc::unbounded_channel::<NewsResults>();
        let (submit_req_tx, submit_req_rx) = mpsc::unbounded_channel::<SubmitRequest>();
        let (submit_results_tx, submit_results_rx) = mpsc::unbounded_channel::<SubmitResult>();

        spawn_city_worker(api.clone(), city_query_rx, city_results_tx);
        spawn_news_worker(api.clone(), news_req_rx, news_results_tx);
        spawn_submit_worker(api.clone(), submit_req_rx, submit_results_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            tick_tx,
            tick_rx,
            city_query_tx,
            city_results_rx,
            news_req_tx,
            news_results_rx,
            submit_req_tx,
            submit_results_rx,
        }
    }
}
