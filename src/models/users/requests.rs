use serde::Deserialize;
use ts_rs::TS;

// 以 uid 为唯一参数的查询（GetUser / GetMyClasses / GetGPA）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UidQuery {
    pub uid: String,
}
