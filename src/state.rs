use std::sync::Arc;

use crate::config::Config;
use crate::db::ProjectStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub config: Config,
}
