use chrono::NaiveTime;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::Season;

/// 定位一个课堂的四元组 (subject, number, season, year)
///
/// 模式上并不保证四元组唯一；写操作解析到多个课堂时会拒绝执行，
/// 读操作会合并全部匹配课堂的结果。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassScope {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
}

// CreateClass 的参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassParams {
    pub subject: String,
    pub number: i32,
    pub season: Season,
    pub year: i32,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub location: String,
    pub instructor: String,
}
