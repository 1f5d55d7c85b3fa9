use crate::models::{DriverProfile, SessionState};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub driver: Arc<DriverProfile>,
    pub session: Arc<Mutex<SessionState>>,
}

impl AppState {
    pub fn new(driver: DriverProfile) -> Self {
        Self {
            driver: Arc::new(driver),
            session: Arc::new(Mutex::new(SessionState::default())),
        }
    }
}
