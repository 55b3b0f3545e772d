use async_trait::async_trait;

use crate::types::HeadlineRecord;
use crate::Result;

#[async_trait]
pub trait Explainer: Send + Sync {
    fn name(&self) -> &str;

    /// Produce a structured explanation for a headline record
    async fn explain(&self, record: &HeadlineRecord) -> Result<String>;
}
