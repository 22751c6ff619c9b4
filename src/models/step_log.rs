use bson::oid::ObjectId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Step log submission. One record per (user, date) is not enforced:
/// duplicates accumulate and the leaderboard sums them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StepLog {
    pub user: String,
    pub steps: i64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StepLog {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.user.trim().is_empty() {
            return Err(AppError::Validation("user must not be empty".to_string()));
        }
        if self.steps < 0 {
            return Err(AppError::Validation("steps must be non-negative".to_string()));
        }
        Ok(())
    }
}

/// Stored shape of a step log. `_id` is assigned by the store, the
/// timestamps by the service at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: String,
    pub steps: i64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<bson::DateTime>,
}

impl StepEntry {
    pub fn from_log(log: StepLog) -> Self {
        let now = bson::DateTime::now();
        StepEntry {
            id: None,
            user: log.user,
            steps: log.steps,
            date: log.date,
            note: log.note,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StepEntryOut {
    pub id: String,
    pub user: String,
    pub steps: i64,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<StepEntry> for StepEntryOut {
    fn from(entry: StepEntry) -> Self {
        StepEntryOut {
            id: entry.id.map(|oid| oid.to_hex()).unwrap_or_default(), // ObjectId -> hex string
            user: entry.user,
            steps: entry.steps,
            date: entry.date,
            note: entry.note,
            created_at: entry.created_at.map(bson::DateTime::to_chrono),
            updated_at: entry.updated_at.map(bson::DateTime::to_chrono),
        }
    }
}

/// Derived per-user total over a date range; never persisted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardRow {
    pub user: String,
    pub total_steps: i64,
}
