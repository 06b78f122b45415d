use cliplens_config::Config;

use crate::state::AppState;

#[test]
fn test_busy_gate_single_slot() {
    let state = AppState::new(Config::default());

    assert!(state.begin_ocr());
    // A second trigger while the first pass is in flight is refused
    assert!(!state.begin_ocr());

    state.finish_ocr();
    assert!(state.begin_ocr());
}

#[test]
fn test_busy_flag_observable() {
    let state = AppState::new(Config::default());
    assert!(!state.ocr_busy());

    assert!(state.begin_ocr());
    assert!(state.ocr_busy());

    state.finish_ocr();
    assert!(!state.ocr_busy());
}
