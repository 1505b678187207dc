//! Browser console logging setup.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Route `log` records to the browser console and install the panic hook.
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
