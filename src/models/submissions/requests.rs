use serde::Deserialize;
use ts_rs::TS;

use crate::models::classes::entities::Season;

// SubmitAssignmentText 的参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitTextParams {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
    pub category: String,
    pub asgname: String,
    pub uid: String,
    pub contents: String,
}

/// SubmitAssignmentText 的查询参数；提交者 uid 取自令牌
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitTextQuery {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
    pub category: String,
    pub asgname: String,
    pub contents: String,
}

// GradeSubmission 的参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionParams {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
    pub category: String,
    pub asgname: String,
    pub uid: String,
    pub score: i32,
}

// GetSubmissionText：作业定位加学生 uid
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionTextQuery {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
    pub category: String,
    pub asgname: String,
    pub uid: String,
}
