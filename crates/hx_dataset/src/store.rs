use std::path::Path;

use hx_core::{Error, HeadlineRecord, Result};
use tracing::debug;

use crate::csv;

const REQUIRED_COLUMNS: [&str; 3] = ["title", "description", "link"];

/// In-memory news dataset, loaded once at startup and read-only afterwards.
///
/// Rows keep their source-file order. Rows with a missing or empty required
/// field are dropped at load time.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<HeadlineRecord>,
}

impl DatasetStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_csv(&content)
    }

    pub fn from_csv(content: &str) -> Result<Self> {
        let rows = csv::parse(content);
        let header = rows
            .first()
            .ok_or_else(|| Error::Dataset("Dataset file is empty".to_string()))?;

        let column = |name: &str| header.iter().position(|h| h == name);
        let (title_idx, description_idx, link_idx) =
            match (column("title"), column("description"), column("link")) {
                (Some(t), Some(d), Some(l)) => (t, d, l),
                (t, d, l) => {
                    let missing: Vec<&str> = REQUIRED_COLUMNS
                        .iter()
                        .zip([t, d, l])
                        .filter(|(_, idx)| idx.is_none())
                        .map(|(name, _)| *name)
                        .collect();
                    return Err(Error::Dataset(format!(
                        "Dataset must contain columns: {}",
                        missing.join(", ")
                    )));
                }
            };

        let mut records = Vec::new();
        let mut dropped = 0usize;
        for row in rows.iter().skip(1) {
            let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
            let title = field(title_idx);
            let description = field(description_idx);
            let link = field(link_idx);
            if title.is_empty() || description.is_empty() || link.is_empty() {
                dropped += 1;
                continue;
            }
            records.push(HeadlineRecord {
                title: title.to_string(),
                description: description.to_string(),
                link: link.to_string(),
            });
        }

        if dropped > 0 {
            debug!("Dropped {} rows with missing required fields", dropped);
        }

        Ok(Self { records })
    }

    pub fn from_records(records: Vec<HeadlineRecord>) -> Self {
        Self { records }
    }

    /// All titles in load order.
    pub fn titles(&self) -> Vec<String> {
        self.records.iter().map(|r| r.title.clone()).collect()
    }

    /// First exact (case-sensitive) title match.
    pub fn find_by_title(&self, title: &str) -> Option<&HeadlineRecord> {
        self.records.iter().find(|r| r.title == title)
    }

    /// Case-insensitive substring search over titles, with absolute indices.
    pub fn search(&self, keyword: &str) -> Vec<(usize, &HeadlineRecord)> {
        let keyword = keyword.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.title.to_lowercase().contains(&keyword))
            .collect()
    }

    pub fn records(&self) -> &[HeadlineRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
