#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts localnews::app::run in the background against an unreachable API.
// - Runs with LOCALNEWS_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - Waits briefly so the initial fetches fail and are handled.
// - Asserts the task does not panic. If it finishes, it must return Ok(()).
// - If still running after the wait, aborts the task and asserts the join was a clean cancel.

use std::time::Duration;

use localnews::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("LOCALNEWS_TEST_HEADLESS", "1");
    }

    // Port 9 (discard) is closed on test machines, so both startup fetches fail fast.
    let settings = Settings {
        api_base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout_secs: 1,
        request_timeout_secs: 1,
        ..Settings::default()
    };
    let handle = tokio::spawn(async move { localnews::app::run(settings, None).await });

    tokio::time::sleep(Duration::from_millis(200)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            // Rare race: the task may have completed right before abort. Require Ok(()).
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}

#[tokio::test]
async fn runtime_rejects_unparsable_base_url() {
    unsafe {
        std::env::set_var("LOCALNEWS_TEST_HEADLESS", "1");
    }
    let settings = Settings {
        api_base_url: "not a url".to_string(),
        ..Settings::default()
    };
    let res = localnews::app::run(settings, None).await;
    assert!(res.is_err());
}
