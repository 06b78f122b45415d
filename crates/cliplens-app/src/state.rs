use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cliplens_config::Config;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    ocr_busy: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            ocr_busy: AtomicBool::new(false),
        }
    }

    /// Claim the single OCR slot. Returns false when a pass is already in
    /// flight; the caller drops the trigger instead of queueing it.
    pub fn begin_ocr(&self) -> bool {
        !self.ocr_busy.swap(true, Ordering::SeqCst)
    }

    pub fn finish_ocr(&self) {
        self.ocr_busy.store(false, Ordering::SeqCst);
    }

    pub fn ocr_busy(&self) -> bool {
        self.ocr_busy.load(Ordering::SeqCst)
    }
}
