use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a logging subscriber for the test binary, so debug output from the engine shows up in
/// failing tests.
pub fn setup_test_environment() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing_core::Level::DEBUG)
            .with_test_writer()
            .with_file(true)
            .with_line_number(true)
            .init();
    });
}
