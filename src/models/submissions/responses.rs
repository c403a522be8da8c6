use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// GetSubmissionsToAssignment 的行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionRow {
    pub uid: String,
    pub fname: String,
    pub lname: String,
    pub time: DateTime<Utc>,
    pub score: i32,
}
