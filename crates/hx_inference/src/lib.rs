pub mod models;
pub mod prompt;

pub use models::dummy::DummyExplainer;
pub use models::groq::GroqExplainer;
pub use models::create_explainer;

pub mod prelude {
    pub use crate::models::create_explainer;
    pub use crate::prompt::compose;
    pub use hx_core::{Error, Explainer, HeadlineRecord, Result};
}
