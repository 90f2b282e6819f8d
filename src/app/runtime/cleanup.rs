use std::sync::atomic::Ordering;

use super::channels::Channels;

/// What: Stop background producers on exit.
///
/// Inputs:
/// - `channels`: Communication channels.
///
/// Details:
/// - Signals the event reader thread; request workers stop once their senders drop
///   with `channels`.
pub fn cleanup_on_exit(channels: &Channels) {
    tracing::debug!("[Runtime] Main loop exited");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
}
