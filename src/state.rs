use std::sync::Arc;

use crate::config::Environment;
use crate::users::repo::UserStore;

/// Shared per-request state. The store is held behind a trait object so the
/// handlers never see the pool directly and tests can substitute a fake.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub env: Environment,
}
