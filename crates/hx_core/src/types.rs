use serde::{Deserialize, Serialize};

/// One row of the news dataset. Built once at load time, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    pub title: String,
    pub description: String,
    pub link: String,
}
