//! Application state.
//!
//! One cohesive state instance, built explicitly at startup and shared via
//! `Arc`. The metadata store and orchestrator are trait objects so the
//! future MongoDB/Kubernetes integrations slot in without touching handlers.

use std::sync::Arc;

use vidp_core::Config;
use vidp_db::MetadataStore;
use vidp_storage::{LocalVideoStorage, UploadValidator};
use vidp_worker::Orchestrator;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub validator: UploadValidator,
    pub storage: LocalVideoStorage,
    pub store: Arc<dyn MetadataStore>,
    pub orchestrator: Arc<dyn Orchestrator>,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
