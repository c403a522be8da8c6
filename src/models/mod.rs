pub mod assignments;
pub mod catalog;
pub mod classes;
pub mod common;
pub mod enrollment;
pub mod submissions;
pub mod users;

pub use common::response::{ApiResponse, ErrorCode, WriteResult};

/// 记录程序启动时间，用于启动耗时统计
#[derive(Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
