pub mod administrator;
pub mod common;
pub mod professor;
pub mod student;
