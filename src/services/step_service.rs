use std::sync::Arc;

use bson::{Document, doc};
use chrono::NaiveDate;

use crate::db::Store;
use crate::error::AppError;
use crate::models::step_log::{LeaderboardRow, StepEntry, StepEntryOut, StepLog};

const COLLECTION: &str = "steplog";

pub struct StepService {
    store: Arc<Store>,
}

impl StepService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn create(&self, log: StepLog) -> Result<String, AppError> {
        let entry = StepEntry::from_log(log);
        self.store.create_document(COLLECTION, &entry).await
    }

    pub async fn list(
        &self,
        user: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: i64,
    ) -> Result<Vec<StepEntryOut>, AppError> {
        let filter = list_filter(user, start_date, end_date);
        let docs = self.store.get_documents(COLLECTION, filter, limit).await?;

        docs.into_iter()
            .map(|d| {
                let entry: StepEntry = bson::from_document(d)?;
                Ok(StepEntryOut::from(entry))
            })
            .collect()
    }

    pub async fn leaderboard(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: i64,
    ) -> Result<Vec<LeaderboardRow>, AppError> {
        let pipeline = leaderboard_pipeline(start_date, end_date, limit);
        let docs = self.store.aggregate(COLLECTION, pipeline).await?;

        docs.into_iter()
            .map(|d| Ok(bson::from_document::<LeaderboardRow>(d)?))
            .collect()
    }
}

/// Inclusive on both ends; one-sided when only one bound is given. Dates are
/// stored as `YYYY-MM-DD` strings, so lexicographic comparison matches
/// chronological order.
pub(crate) fn date_filter(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Document> {
    match (start, end) {
        (Some(s), Some(e)) => Some(doc! { "$gte": s.to_string(), "$lte": e.to_string() }),
        (Some(s), None) => Some(doc! { "$gte": s.to_string() }),
        (None, Some(e)) => Some(doc! { "$lte": e.to_string() }),
        (None, None) => None,
    }
}

pub(crate) fn list_filter(
    user: Option<&str>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Document {
    let mut filter = Document::new();
    if let Some(user) = user {
        filter.insert("user", user);
    }
    if let Some(range) = date_filter(start_date, end_date) {
        filter.insert("date", range);
    }
    filter
}

/// Group by user summing steps, sort descending, truncate, project to the
/// public row shape. Tie order among equal totals is store-dependent.
pub(crate) fn leaderboard_pipeline(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    limit: i64,
) -> Vec<Document> {
    let mut pipeline = Vec::new();
    if let Some(range) = date_filter(start_date, end_date) {
        pipeline.push(doc! { "$match": { "date": range } });
    }
    pipeline.push(doc! { "$group": { "_id": "$user", "total_steps": { "$sum": "$steps" } } });
    pipeline.push(doc! { "$sort": { "total_steps": -1 } });
    pipeline.push(doc! { "$limit": limit });
    pipeline.push(doc! { "$project": { "user": "$_id", "total_steps": 1, "_id": 0 } });
    pipeline
}
