pub mod builders;
pub mod fake_executor;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Env var holding a filter directive for test logs, e.g.
/// `BOOTSTRAP_TEST_LOG=bootstrap_runner=trace`.
pub const TEST_LOG_ENV_VAR: &str = "BOOTSTRAP_TEST_LOG";

const DEFAULT_TEST_FILTER: &str = "bootstrap_runner=debug";

/// Install a tracing subscriber that writes through the test harness, so
/// runner and executor logs only show up for failing tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(TEST_LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .init();
    });
}

/// Fail the test if `f` takes longer than 5 seconds.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("test timed out after 5 seconds")
}
