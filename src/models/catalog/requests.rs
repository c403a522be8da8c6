use serde::Deserialize;
use ts_rs::TS;

// 按院系检索（GetCourses / GetProfessors）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct SubjectQuery {
    pub subject: String,
}

// 按课程检索（GetClassOfferings）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CourseQuery {
    pub subject: String,
    pub number: i32,
}

// CreateCourse 的参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateCourseParams {
    pub subject: String,
    pub number: i32,
    pub name: String,
}
