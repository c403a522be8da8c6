//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_lms_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum LMSError {
            $($variant(String),)*
        }

        impl LMSError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(LMSError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(LMSError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(LMSError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl LMSError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        LMSError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_lms_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Uniqueness Conflict"),
    AmbiguousScope("E007", "Ambiguous Class Scope"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
}

impl LMSError {
    /// 写操作的失败是否属于请求方的问题（数据不存在/冲突），
    /// 而不是存储层故障
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LMSError::NotFound(_)
                | LMSError::Conflict(_)
                | LMSError::AmbiguousScope(_)
                | LMSError::Validation(_)
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LMSError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LMSError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LMSError {
    fn from(err: sea_orm::DbErr) -> Self {
        LMSError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LMSError {
    fn from(err: std::io::Error) -> Self {
        LMSError::DatabaseConnection(err.to_string())
    }
}

impl From<serde_json::Error> for LMSError {
    fn from(err: serde_json::Error) -> Self {
        LMSError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LMSError {
    fn from(err: chrono::ParseError) -> Self {
        LMSError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LMSError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LMSError::database_config("test").code(), "E001");
        assert_eq!(LMSError::not_found("test").code(), "E005");
        assert_eq!(LMSError::conflict("test").code(), "E006");
        assert_eq!(LMSError::authentication("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            LMSError::conflict("test").error_type(),
            "Uniqueness Conflict"
        );
        assert_eq!(
            LMSError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_is_rejection() {
        assert!(LMSError::not_found("no such class").is_rejection());
        assert!(LMSError::conflict("duplicate course").is_rejection());
        assert!(LMSError::ambiguous_scope("two classes match").is_rejection());
        assert!(!LMSError::database_operation("disk full").is_rejection());
    }

    #[test]
    fn test_format_simple() {
        let err = LMSError::validation("Invalid season");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid season"));
    }
}
