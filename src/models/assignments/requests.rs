use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::classes::entities::Season;
use crate::models::classes::requests::ClassScope;

/// GetAssignmentsInCategory：category 缺省时返回课堂内全部分类的作业
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CategoryFilterQuery {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
    pub category: Option<String>,
}

// 定位一个作业：分类定位加作业名
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentScope {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
    pub category: String,
    pub asgname: String,
}

impl AssignmentScope {
    pub fn class(&self) -> ClassScope {
        ClassScope {
            subject: self.subject.clone(),
            number: self.number,
            season: self.season,
            year: self.year,
        }
    }
}

// CreateAssignmentCategory 的参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateCategoryParams {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
    pub category: String,
    pub catweight: i32,
}

// CreateAssignment 的参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentParams {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
    pub category: String,
    pub asgname: String,
    pub asgpoints: i32,
    pub asgdue: DateTime<Utc>,
    pub asgcontents: String,
}
