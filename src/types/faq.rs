//! Knowledge base entry types

use serde::{Deserialize, Serialize};

/// Raw knowledge base row as returned by a data store
///
/// Rows are not trusted: `question` and `answer` may be missing and are
/// validated when converted into a [`FaqEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqRecord {
    pub id: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(rename = "isActive", alias = "is_active", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl FaqRecord {
    /// Create an active record with question and answer
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: Some(question.into()),
            answer: Some(answer.into()),
            is_active: true,
        }
    }
}

/// Validated FAQ entry participating in matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    /// Question and answer joined by a single space
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.question, self.answer)
    }
}

impl TryFrom<FaqRecord> for FaqEntry {
    type Error = &'static str;

    fn try_from(record: FaqRecord) -> Result<Self, Self::Error> {
        if !record.is_active {
            return Err("inactive");
        }
        if record.id.trim().is_empty() {
            return Err("blank id");
        }
        let question = record.question.ok_or("missing question")?;
        let answer = record.answer.ok_or("missing answer")?;
        if question.trim().is_empty() {
            return Err("blank question");
        }

        Ok(Self {
            id: record.id,
            question,
            answer,
        })
    }
}
