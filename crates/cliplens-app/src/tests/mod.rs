mod busy_gate_tests;
mod event_flow_tests;
mod trigger_ocr_tests;
