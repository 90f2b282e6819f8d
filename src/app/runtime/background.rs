use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::Duration;

/// Interval between spinner ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// What: Spawn the blocking terminal event reader.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started.
/// - `event_tx`: Destination for terminal events.
/// - `cancelled`: Flag checked between polls; setting it stops the thread.
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed promptly.
/// - Exits when the receiver is dropped. Read errors are skipped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("[Runtime] event thread exiting");
    });
}

/// What: Spawn the tick task that drives spinner animation.
///
/// Inputs:
/// - `tick_tx`: Destination for ticks.
///
/// Details:
/// - Stops once the receiver is gone.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}
