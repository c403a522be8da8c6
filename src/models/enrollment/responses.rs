use serde::{Deserialize, Serialize};
use ts_rs::TS;

// GetGPA 的单对象结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct GpaResult {
    pub gpa: f64,
}
