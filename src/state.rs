use crate::models::AlarmRecord;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub alarm: Arc<Mutex<AlarmRecord>>,
}

impl AppState {
    pub fn new(alarm: AlarmRecord) -> Self {
        Self {
            alarm: Arc::new(Mutex::new(alarm)),
        }
    }
}
