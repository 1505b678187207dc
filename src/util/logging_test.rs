use super::*;

#[test]
fn init_logging_tolerates_repeat_calls() {
    init_logging();
    init_logging();
    log::debug!("logging initialized twice");
}
