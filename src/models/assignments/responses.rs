use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// GetAssignmentCategories 的行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CategorySummary {
    pub name: String,
    pub weight: i32,
}

// GetAssignmentsInCategory 的行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentSummary {
    pub aname: String,
    pub cname: String,
    pub due: DateTime<Utc>,
    pub submissions: i64,
}

/// GetAssignmentsInClass 的行；score 为 null 表示该学生尚未提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct StudentAssignment {
    pub aname: String,
    pub cname: String,
    pub due: DateTime<Utc>,
    pub score: Option<i32>,
}
