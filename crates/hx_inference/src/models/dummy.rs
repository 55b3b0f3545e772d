use std::fmt;

use async_trait::async_trait;
use hx_core::{Explainer, HeadlineRecord, Result};

/// Offline explainer for manual testing without an API key.
pub struct DummyExplainer;

impl fmt::Debug for DummyExplainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyExplainer").finish()
    }
}

#[async_trait]
impl Explainer for DummyExplainer {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn explain(&self, record: &HeadlineRecord) -> Result<String> {
        // Echo the record in the output template shape
        let summary: Vec<&str> = record.description.split_whitespace().take(20).collect();
        Ok(format!(
            "Headline:\n{}\n\nTopic:\n(unknown)\n\nKey Entity:\n(unknown)\n\nSummary:\n{}\n\nBackground / History:\n(not available offline)",
            record.title,
            summary.join(" ")
        ))
    }
}
