// App state for the Axum server
use std::sync::Arc;

use crate::config::FormDefaults;
use crate::pipeline::Viewer;

#[derive(Clone)]
pub struct AppState {
    pub viewer: Arc<Viewer>,
    pub defaults: Arc<FormDefaults>,
}
