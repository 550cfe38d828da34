use std::sync::Once;

static INIT: Once = Once::new();

/// Route `log` output through the test harness, once per test binary.
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
