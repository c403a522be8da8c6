use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// GetStudentsInClass 的行；grade 为哨兵 "--" 表示尚未评定
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct EnrolledStudent {
    pub fname: String,
    pub lname: String,
    pub uid: String,
    pub dob: NaiveDate,
    pub grade: String,
}

// 教授版 GetMyClasses 的行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct TaughtClass {
    pub subject: String,
    pub number: i32,
    pub name: String,
    pub season: String,
    pub year: i32,
}

// 学生版 GetMyClasses 的行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct EnrolledClass {
    pub subject: String,
    pub number: i32,
    pub name: String,
    pub season: String,
    pub year: i32,
    pub grade: String,
}
