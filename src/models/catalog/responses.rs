use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// GetDepartments 的行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct DepartmentEntry {
    pub name: String,
    pub subject: String,
}

// GetCourses 的行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CourseEntry {
    pub number: i32,
    pub name: String,
}

// GetProfessors 的行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct ProfessorEntry {
    pub lname: String,
    pub fname: String,
    pub uid: String,
}

// GetCatalog 中嵌套的课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CatalogCourse {
    pub number: i32,
    pub cname: String,
}

/// GetCatalog 的行：每个院系一条，没有课程的院系也出现（courses 为空数组）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CatalogDepartment {
    pub subject: String,
    pub dname: String,
    pub courses: Vec<CatalogCourse>,
}

// GetClassOfferings 的行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct ClassOffering {
    pub season: String,
    pub year: i32,
    pub location: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub fname: String,
    pub lname: String,
}
