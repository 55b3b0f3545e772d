use std::path::PathBuf;
use std::sync::Arc;

use hx_core::Explainer;
use hx_dataset::DatasetStore;

/// Shared per-request state, injected into handlers instead of globals.
pub struct AppState {
    pub store: Arc<DatasetStore>,
    pub explainer: Arc<dyn Explainer>,
    pub assets_dir: PathBuf,
}
