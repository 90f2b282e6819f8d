//! Shared utilities for argument processing.

use std::future::Future;

use localnews::state::SelectedCity;
use localnews::theme::Settings;

use crate::args::Args;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`; `RUST_LOG` is applied later and wins over both.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Apply CLI overrides on top of settings loaded from `settings.conf`.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings to update in place.
///
/// Details:
/// - A trailing `/` on `--api-url` is dropped to match the config file handling.
pub fn apply_overrides(args: &Args, settings: &mut Settings) {
    if let Some(url) = &args.api_url {
        let url = url.trim().trim_end_matches('/');
        tracing::info!(url = %url, "API base URL overridden from CLI");
        settings.api_base_url = url.to_string();
    }
}

/// What: Build the startup scope from `--city` and `--state`.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Some(SelectedCity)` when both flags are present; `None` otherwise.
///
/// Details:
/// - The state code is upper-cased, so `--state gl` also selects the Global feed.
pub fn initial_city(args: &Args) -> Option<SelectedCity> {
    match (&args.city, &args.state) {
        (Some(name), Some(state)) => Some(SelectedCity {
            name: name.trim().to_string(),
            state_code: state.trim().to_ascii_uppercase(),
        }),
        _ => None,
    }
}

/// What: Drive a future to completion on a throwaway current-thread runtime.
///
/// Inputs:
/// - `fut`: Future to run.
///
/// Output:
/// - The future's output, or an error when the runtime could not be built or the
///   worker thread died.
///
/// Details:
/// - Runs on a separate thread to avoid nesting inside the `#[tokio::main]` runtime.
pub fn block_on_fresh_runtime<F, T>(fut: F) -> Result<T, String>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build();
        let res = match rt {
            Ok(rt) => Ok(rt.block_on(fut)),
            Err(e) => Err(format!("rt: {e}")),
        };
        let _ = tx.send(res);
    });
    rx.recv().map_err(|e| e.to_string())?
}
