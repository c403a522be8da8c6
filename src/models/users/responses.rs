use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// GetUser 的单对象结果
///
/// `department` 对教授是其任职院系、对学生是其主修院系，
/// 对管理员整个字段不出现在 JSON 中。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserProfile {
    pub fname: String,
    pub lname: String,
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_field_absent_for_administrators() {
        let profile = UserProfile {
            fname: "Dana".into(),
            lname: "Adler".into(),
            uid: "u0000010".into(),
            department: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("department").is_none());
    }
}
