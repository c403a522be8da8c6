//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的投影结构分离。
//! Storage 层使用这些实体进行查询和写入，然后组装为 models 中的响应结构。

pub mod prelude;

pub mod administrators;
pub mod assignment_categories;
pub mod assignments;
pub mod classes;
pub mod courses;
pub mod departments;
pub mod enrolled;
pub mod professors;
pub mod students;
pub mod submissions;
