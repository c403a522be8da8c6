pub mod grade;
pub mod jwt;
pub mod parameter_error_handler;
pub mod time;
pub mod validate;

pub use grade::{NO_GRADE, compute_gpa, grade_points};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use time::{
    date_from_timestamp, datetime_from_timestamp, seconds_from_midnight, time_of_day,
    timestamp_from_date,
};
pub use validate::validate_uid;
