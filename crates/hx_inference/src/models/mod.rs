use std::sync::Arc;

use hx_core::{Error, Explainer, Result};

pub mod dummy;
pub mod groq;

/// Build an explainer by name. `groq` needs an API key, `dummy` runs offline.
pub fn create_explainer(model: &str, api_key: Option<String>) -> Result<Arc<dyn Explainer>> {
    match model {
        "groq" => Ok(Arc::new(groq::GroqExplainer::new(api_key)?)),
        "dummy" => Ok(Arc::new(dummy::DummyExplainer)),
        other => Err(Error::Config(format!("Unknown explainer model: {}", other))),
    }
}
