pub mod administrator;

pub mod common;

pub mod professor;

pub mod student;

pub use administrator::configure_administrator_routes;
pub use common::configure_common_routes;
pub use professor::configure_professor_routes;
pub use student::configure_student_routes;
