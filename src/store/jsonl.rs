//! JSONL file-backed store and analytics log

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{AnalyticsSink, FaqStore};
use crate::error::Result;
use crate::types::{AnalyticsEvent, FaqRecord};

/// Knowledge base stored as one JSON row per line
#[derive(Debug, Clone)]
pub struct JsonlFaqStore {
    path: PathBuf,
}

impl JsonlFaqStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FaqStore for JsonlFaqStore {
    async fn fetch_active_faqs(&self) -> Result<Vec<FaqRecord>> {
        if !fs::try_exists(&self.path).await? {
            warn!(path = %self.path.display(), "FAQ file not found, knowledge base is empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        let mut records = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<FaqRecord>(line) {
                Ok(record) if record.is_active => records.push(record),
                Ok(_) => {}
                Err(e) => {
                    warn!(line = line_num + 1, error = %e, "Skipping unparseable FAQ row");
                }
            }
        }

        debug!(path = %self.path.display(), rows = records.len(), "Fetched active FAQ rows");
        Ok(records)
    }
}

/// Append-only analytics log, one event per line
#[derive(Debug)]
pub struct JsonlAnalyticsSink {
    path: PathBuf,
    /// Serializes appends so lines never interleave
    write_lock: Mutex<()>,
}

impl JsonlAnalyticsSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AnalyticsSink for JsonlAnalyticsSink {
    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<()> {
        let mut line = serde_json::to_string(event)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FaqEntry, FaqMatch, MatchType};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_filters_inactive_and_bad_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("faqs.jsonl");
        std::fs::write(
            &path,
            concat!(
                r#"{"id":"1","question":"Cara bayar?","answer":"Transfer."}"#,
                "\n",
                "not json\n",
                "\n",
                r#"{"id":"2","question":"Lama?","answer":"Ya.","isActive":false}"#,
                "\n",
                r#"{"id":"3","question":"Tanpa jawaban"}"#,
                "\n",
            ),
        )
        .unwrap();

        let store = JsonlFaqStore::new(&path);
        let records = store.fetch_active_faqs().await.unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(records[1].answer.is_none());
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonlFaqStore::new(temp_dir.path().join("missing.jsonl"));
        assert!(store.fetch_active_faqs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analytics_appends_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("analytics.jsonl");
        let sink = JsonlAnalyticsSink::new(&path);

        let entry = FaqEntry {
            id: "faq-9".to_string(),
            question: "Q".to_string(),
            answer: "A".to_string(),
        };
        let matches = vec![FaqMatch::new(&entry, 0.5, MatchType::Keyword, vec![])];
        let event = AnalyticsEvent::faq_match(&matches, 10, &[]).unwrap();

        sink.insert_event(&event).await.unwrap();
        sink.insert_event(&event).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: AnalyticsEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.matched_faq_id.as_deref(), Some("faq-9"));
    }
}
