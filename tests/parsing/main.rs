mod samples;

/// Route the parser's log output through the test harness so that skipped
/// entries show up alongside a failing test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
